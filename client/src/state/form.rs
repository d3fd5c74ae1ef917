//! Add/edit form state shared by every resource form.
//!
//! DESIGN
//! ======
//! `FormState<D>` records the form lifecycle around a resource-specific
//! draft `D`. Drafts know their own fields and validation; this module knows
//! the transitions:
//!
//! `loading -> ready -> submitting -> saved | ready + error`
//!
//! A failed submit never clears the draft. A failed edit-mode load parks the
//! form in `LoadFailed` until the user navigates or retries.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::error::ApiError;
use crate::net::payload::FieldValue;
use crate::net::resource::{FormMode, ImageField};
use crate::state::images::ImageSet;

/// A resource's editable fields, detached from the wire entity.
pub trait FormDraft: Clone + Default {
    /// Backend record this draft edits.
    type Entity;

    /// Pre-fill from a fetched record, normalizing references and numbers.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Persisted image URLs per image slot, in the resource's slot order.
    fn existing_images(entity: &Self::Entity) -> Vec<Vec<String>>;

    /// Scalar multipart fields in submission order.
    fn fields(&self) -> Vec<FieldValue>;

    /// Required-field check run before submission.
    ///
    /// # Errors
    ///
    /// Returns the message to show inline.
    fn validate(&self) -> Result<(), String>;
}

/// Form lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    Loading,
    #[default]
    Ready,
    Submitting,
    Saved,
    LoadFailed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState<D> {
    pub mode: FormMode,
    pub status: FormStatus,
    pub draft: D,
    pub error: Option<String>,
    generation: u64,
}

impl<D: FormDraft> FormState<D> {
    /// Blank form; edit mode starts in `Loading` until `finish_load`.
    pub fn new(mode: FormMode) -> Self {
        let status = if mode.is_edit() { FormStatus::Loading } else { FormStatus::Ready };
        Self { mode, status, draft: D::default(), error: None, generation: 0 }
    }

    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.status = FormStatus::Loading;
        self.error = None;
        self.generation
    }

    /// Apply a fetched record. Returns the existing images per slot when the
    /// result was accepted, `None` when stale or failed.
    pub fn finish_load(&mut self, ticket: u64, result: Result<D::Entity, ApiError>) -> Option<Vec<Vec<String>>> {
        if ticket != self.generation {
            return None;
        }
        match result {
            Ok(entity) => Some(self.seed(&entity)),
            Err(e) => {
                self.status = FormStatus::LoadFailed(e.to_string());
                None
            }
        }
    }

    /// Pre-fill from a record already in hand. Returns existing images per slot.
    pub fn seed(&mut self, entity: &D::Entity) -> Vec<Vec<String>> {
        self.draft = D::from_entity(entity);
        self.status = FormStatus::Ready;
        self.error = None;
        D::existing_images(entity)
    }

    /// Validate and enter `Submitting`. Returns `false` (and records why)
    /// when the form is not ready or fails validation.
    pub fn begin_submit<F>(&mut self, slots: &[(ImageField, &ImageSet<F>)]) -> bool {
        if self.status != FormStatus::Ready {
            return false;
        }
        let checked = self.draft.validate().and_then(|()| check_required_images(slots, &self.mode));
        if let Err(message) = checked {
            self.error = Some(message);
            return false;
        }
        self.error = None;
        self.status = FormStatus::Submitting;
        true
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.status = FormStatus::Saved,
            Err(e) => {
                self.status = FormStatus::Ready;
                self.error = Some(format!("Save failed: {e}"));
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }
}

/// Refuse a create while any required image slot is empty.
///
/// # Errors
///
/// Returns a message naming the first empty slot.
pub fn check_required_images<F>(slots: &[(ImageField, &ImageSet<F>)], mode: &FormMode) -> Result<(), String> {
    if mode.is_edit() {
        return Ok(());
    }
    match slots.iter().find(|(field, images)| field.required_on_create && images.is_empty()) {
        Some((field, _)) if field.single => Err(format!("{} is required", field.label)),
        Some(_) => Err("Add at least one image".to_owned()),
        None => Ok(()),
    }
}
