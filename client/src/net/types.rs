//! Backend DTOs and envelope parsing for the marketplace REST API.
//!
//! DESIGN
//! ======
//! These types mirror backend documents (`_id`, camelCase keys). The backend
//! is loose about encodings: prices arrive as numbers or strings, lists as
//! arrays or comma-separated text, and the provider on a service as either a
//! bare id or a populated object. All of that is absorbed here so UI state
//! only ever sees one shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;

/// A cleaning service offered on the marketplace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub price: Option<f64>,
    /// Duration in hours.
    #[serde(default, deserialize_with = "deserialize_number")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub images: Vec<String>,
    #[serde(default)]
    pub provider: Option<Reference>,
    #[serde(default = "default_true", deserialize_with = "deserialize_flag")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A bookable hotel listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub capacity: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub outside_food_allowed: bool,
}

/// A company that owns cleaning services.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub city: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub state: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub pincode: String,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub total_reviews: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub images: Vec<String>,
    #[serde(default = "default_true", deserialize_with = "deserialize_flag")]
    pub is_active: bool,
}

/// Home-page or cleaning-page hero banner. Only one of each kind is live.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub subtitle: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
    #[serde(default)]
    pub gradient_start: Option<String>,
    #[serde(default)]
    pub gradient_end: Option<String>,
    #[serde(default, deserialize_with = "deserialize_metrics")]
    pub metrics: Vec<Metric>,
}

/// Headline figure shown on a banner (e.g. "10k+" / "Happy customers").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub label: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub value: String,
}

/// Contact-form submission. Read-only from the admin surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: String,
}

impl Inquiry {
    /// Sender's display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// A reference that the backend may or may not have populated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Id(String),
    Populated(ReferenceDoc),
}

/// Populated form of a [`Reference`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDoc {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Reference {
    /// The referenced id, regardless of how it was delivered.
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Populated(doc) => &doc.id,
        }
    }

    /// Display name when the backend populated the reference.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Populated(doc) => doc.name.as_deref(),
        }
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

fn envelope_ok(body: &serde_json::Value) -> bool {
    body.get("success").and_then(serde_json::Value::as_bool) == Some(true)
}

fn envelope_message(body: &serde_json::Value) -> Option<&str> {
    body.get("message").and_then(serde_json::Value::as_str)
}

/// Extract `body[key]` as a list. Anything other than `success: true` with an
/// array under `key` yields an empty list; elements that fail to decode are
/// skipped.
pub fn parse_collection<T: DeserializeOwned>(body: &serde_json::Value, key: &str) -> Vec<T> {
    if !envelope_ok(body) {
        return Vec::new();
    }
    let Some(items) = body.get(key).and_then(serde_json::Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match T::deserialize(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                leptos::logging::warn!("skipping malformed {key} entry: {e}");
                None
            }
        })
        .collect()
}

/// Extract `body[key]` as a single record.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the envelope is not successful and
/// [`ApiError::Malformed`] when the record is missing or does not decode.
pub fn parse_record<T: DeserializeOwned>(body: &serde_json::Value, key: &str) -> Result<T, ApiError> {
    if !envelope_ok(body) {
        return Err(ApiError::rejected(envelope_message(body)));
    }
    let value = body.get(key).ok_or(ApiError::Malformed)?;
    T::deserialize(value).map_err(|_| ApiError::Malformed)
}

/// Check a write acknowledgement envelope.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] unless the body carries `success: true`.
pub fn parse_ack(body: &serde_json::Value) -> Result<(), ApiError> {
    if envelope_ok(body) {
        Ok(())
    } else {
        Err(ApiError::rejected(envelope_message(body)))
    }
}

// =============================================================================
// LENIENT DECODERS
// =============================================================================

fn default_true() -> bool {
    true
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        Some(serde_json::Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    })
}

fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Some(serde_json::Value::String(s)) => split_list(&s),
        _ => Vec::new(),
    })
}

fn deserialize_metrics<'de, D>(deserializer: D) -> Result<Vec<Metric>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| Metric::deserialize(item).ok())
            .collect(),
        // Some backends store the multipart field verbatim.
        Some(serde_json::Value::String(s)) => serde_json::from_str(&s).unwrap_or_default(),
        _ => Vec::new(),
    })
}

/// Split comma-separated text into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
