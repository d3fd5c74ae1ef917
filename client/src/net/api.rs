//! REST calls against the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`; pages only
//! fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers always get `Result<_, ApiError>`. List fetches are the exception
//! to strictness: a body that is not a success envelope yields an empty list
//! instead of an error, matching how list pages degrade.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::payload::FormPayload;
use super::resource::{FormMode, ResourceSpec};
use crate::util::files::LocalFile;

/// Map a non-2xx response to an error, preferring the server's message.
fn failure_from_body(status: u16, body: Option<&serde_json::Value>) -> ApiError {
    match body.and_then(|b| b.get("message")).and_then(serde_json::Value::as_str) {
        Some(message) if !message.trim().is_empty() => ApiError::Rejected(message.trim().to_owned()),
        _ => ApiError::Status(status),
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: &gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json(resp: gloo_net::http::Response) -> Result<serde_json::Value, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<serde_json::Value>().await.ok();
        return Err(failure_from_body(status, body.as_ref()));
    }
    resp.json::<serde_json::Value>().await.map_err(|_| ApiError::Malformed)
}

/// Fetch the collection behind `spec`, optionally filtered by `query`.
///
/// # Errors
///
/// Returns an error only for transport failures and non-OK statuses.
pub async fn fetch_collection<T: DeserializeOwned>(
    base: &str,
    spec: &ResourceSpec,
    query: &[(&str, String)],
) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = spec.collection_url(base, query);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        match read_json(resp).await {
            Ok(body) => Ok(super::types::parse_collection(&body, spec.collection_key)),
            Err(ApiError::Malformed) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, spec, query);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one record by id.
///
/// # Errors
///
/// Returns an error if the request fails, the envelope is rejected, or the
/// record is missing.
pub async fn fetch_record<T: DeserializeOwned>(base: &str, spec: &ResourceSpec, id: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = spec.item_url(base, id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        let body = read_json(resp).await?;
        super::types::parse_record(&body, spec.item_key)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, spec, id);
        Err(ApiError::Unavailable)
    }
}

/// Delete one record. Success is judged by HTTP status alone; some backends
/// answer `204` with no body.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not OK.
pub async fn delete_record(base: &str, spec: &ResourceSpec, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = spec.item_url(base, id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.json::<serde_json::Value>().await.ok();
        Err(failure_from_body(status, body.as_ref()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, spec, id);
        Err(ApiError::Unavailable)
    }
}

/// Submit a multipart body: `POST` to create, `PUT` to update.
///
/// # Errors
///
/// Returns an error if the body cannot be encoded, the request fails, or the
/// backend does not acknowledge with `success: true`.
pub async fn submit_form(
    base: &str,
    spec: &ResourceSpec,
    mode: &FormMode,
    payload: FormPayload<LocalFile>,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = spec.submit_url(base, mode);
        let form = to_form_data(payload)?;
        let request = match mode {
            FormMode::Create => gloo_net::http::Request::post(&url),
            FormMode::Edit(_) => gloo_net::http::Request::put(&url),
        };
        let resp = request
            .body(form)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        let body = read_json(resp).await?;
        super::types::parse_ack(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, spec, mode, payload);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn to_form_data(payload: FormPayload<LocalFile>) -> Result<web_sys::FormData, ApiError> {
    use super::payload::PartValue;

    let encode = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(encode)?;
    for part in payload.into_parts() {
        match part.value {
            PartValue::Text(value) => form.append_with_str(&part.name, &value),
            PartValue::File(file) => form.append_with_blob_and_filename(&part.name, &file, &file.name()),
        }
        .map_err(encode)?;
    }
    Ok(form)
}
