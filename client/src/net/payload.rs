//! Multipart submission bodies, assembled independently of the browser.
//!
//! DESIGN
//! ======
//! Forms describe their scalar fields as `FieldValue`s and their images as
//! `ImageSet` slots. `build_payload` merges both into an ordered list of
//! parts; the hydrate-only API layer converts that list into a real
//! `FormData` at the last moment.
//!
//! Empty-field policy, identical for every resource:
//! - create omits a text field whose trimmed value is empty;
//! - update sends every text field, empty ones as `""`, so a cleared value
//!   is cleared on the backend too;
//! - a reference id (`FieldValue::Ref`) is only sent when one is chosen;
//! - flags and JSON fields are always sent.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use super::resource::{FormMode, ImageField};
use crate::state::images::ImageSet;

/// One scalar form field as produced by a draft.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(&'static str, String),
    /// Id of a linked record; never sent empty.
    Ref(&'static str, Option<String>),
    Flag(&'static str, bool),
    Json(&'static str, serde_json::Value),
}

/// Value of one multipart part.
#[derive(Clone, Debug, PartialEq)]
pub enum PartValue<F> {
    Text(String),
    File(F),
}

/// A named multipart part.
#[derive(Clone, Debug, PartialEq)]
pub struct Part<F> {
    pub name: String,
    pub value: PartValue<F>,
}

/// Ordered multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct FormPayload<F> {
    parts: Vec<Part<F>>,
}

impl<F> Default for FormPayload<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F> FormPayload<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text part unless it is blank.
    pub fn text(&mut self, name: &str, value: &str) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        self.push_text(name, trimmed.to_owned());
    }

    /// Append a text part even when blank.
    pub fn text_or_empty(&mut self, name: &str, value: &str) {
        self.push_text(name, value.trim().to_owned());
    }

    /// Append a boolean part (`"true"` / `"false"`).
    pub fn flag(&mut self, name: &str, value: bool) {
        self.push_text(name, value.to_string());
    }

    /// Append a JSON-encoded part.
    pub fn json(&mut self, name: &str, value: &serde_json::Value) {
        self.push_text(name, value.to_string());
    }

    /// Append a file part.
    pub fn file(&mut self, name: &str, file: F) {
        self.parts.push(Part { name: name.to_owned(), value: PartValue::File(file) });
    }

    /// Append a draft-provided field under the empty-field policy for `mode`.
    pub fn field(&mut self, field: &FieldValue, mode: &FormMode) {
        match field {
            FieldValue::Text(name, value) if mode.is_edit() => self.text_or_empty(name, value),
            FieldValue::Text(name, value) => self.text(name, value),
            FieldValue::Ref(name, value) => self.text(name, value.as_deref().unwrap_or_default()),
            FieldValue::Flag(name, value) => self.flag(name, *value),
            FieldValue::Json(name, value) => self.json(name, value),
        }
    }

    fn push_text(&mut self, name: &str, value: String) {
        self.parts.push(Part { name: name.to_owned(), value: PartValue::Text(value) });
    }

    pub fn parts(&self) -> &[Part<F>] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part<F>> {
        self.parts
    }

    /// First text value stored under `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::Text(v) if p.name == name => Some(v.as_str()),
            _ => None,
        })
    }

    /// Every file stored under `name`, in order.
    pub fn files(&self, name: &str) -> Vec<&F> {
        self.parts
            .iter()
            .filter_map(|p| match &p.value {
                PartValue::File(f) if p.name == name => Some(f),
                _ => None,
            })
            .collect()
    }

    /// Whether any part is named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|p| p.name == name)
    }

    /// Part names in order; handy for diagnostics.
    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Merge scalar fields and image slots into a submission body.
///
/// On update, each slot with an `existing_field` sends the JSON list of URLs
/// the user kept (possibly `[]`). New files go under the slot's field name
/// for `mode`, one part per file.
pub fn build_payload<F: Clone>(
    fields: &[FieldValue],
    slots: &[(ImageField, &ImageSet<F>)],
    mode: &FormMode,
) -> FormPayload<F> {
    let mut payload = FormPayload::new();
    for field in fields {
        payload.field(field, mode);
    }
    for (spec, images) in slots {
        if mode.is_edit() {
            if let Some(existing_field) = spec.existing_field {
                payload.json(existing_field, &serde_json::json!(images.existing()));
            }
        }
        let upload_field = spec.upload_field(mode);
        for file in images.pending_files() {
            payload.file(upload_field, file);
        }
    }
    payload
}
