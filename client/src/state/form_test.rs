use super::*;
use crate::net::resource::{HOTELS, SERVICES};
use crate::state::drafts::{HotelDraft, ServiceDraft};
use crate::net::types::Hotel;
use serde_json::json;

fn hotel() -> Hotel {
    serde_json::from_value(json!({ "_id": "h1", "name": "Sea View", "images": ["https://cdn/1.jpg"] })).unwrap()
}

#[test]
fn create_form_starts_ready_edit_form_starts_loading() {
    assert_eq!(FormState::<HotelDraft>::new(FormMode::Create).status, FormStatus::Ready);
    assert_eq!(FormState::<HotelDraft>::new(FormMode::Edit("h1".to_owned())).status, FormStatus::Loading);
}

#[test]
fn load_prefills_draft_and_returns_slot_images() {
    let mut form = FormState::<HotelDraft>::new(FormMode::Edit("h1".to_owned()));
    let ticket = form.begin_load();
    let images = form.finish_load(ticket, Ok(hotel()));
    assert_eq!(images, Some(vec![vec!["https://cdn/1.jpg".to_owned()]]));
    assert_eq!(form.draft.name, "Sea View");
    assert_eq!(form.status, FormStatus::Ready);
}

#[test]
fn stale_load_is_ignored() {
    let mut form = FormState::<HotelDraft>::new(FormMode::Edit("h1".to_owned()));
    let old = form.begin_load();
    let _new = form.begin_load();
    assert_eq!(form.finish_load(old, Ok(hotel())), None);
    assert_eq!(form.status, FormStatus::Loading);
}

#[test]
fn failed_load_parks_form() {
    let mut form = FormState::<HotelDraft>::new(FormMode::Edit("h1".to_owned()));
    let ticket = form.begin_load();
    assert_eq!(form.finish_load(ticket, Err(ApiError::Malformed)), None);
    assert!(matches!(form.status, FormStatus::LoadFailed(_)));
    assert!(!form.begin_submit::<()>(&[]));
}

#[test]
fn invalid_draft_is_not_submitted() {
    let mut form = FormState::<HotelDraft>::new(FormMode::Create);
    let images = ImageSet::<()>::multi();
    assert!(!form.begin_submit(&[(HOTELS.image_fields[0], &images)]));
    assert_eq!(form.error.as_deref(), Some("Hotel name is required"));
    assert_eq!(form.status, FormStatus::Ready);
}

#[test]
fn service_create_requires_an_image() {
    let mut form = FormState::<ServiceDraft>::new(FormMode::Create);
    form.draft.name = "Deep Clean".to_owned();
    form.draft.price = Some(500.0);
    let mut images = ImageSet::multi();
    assert!(!form.begin_submit(&[(SERVICES.image_fields[0], &images)]));
    assert_eq!(form.error.as_deref(), Some("Add at least one image"));

    images.add_pending((), "blob:1".to_owned());
    assert!(form.begin_submit(&[(SERVICES.image_fields[0], &images)]));
    assert!(form.is_submitting());
}

#[test]
fn service_edit_does_not_require_new_images() {
    let mut form = FormState::<ServiceDraft>::new(FormMode::Edit("s1".to_owned()));
    form.status = FormStatus::Ready;
    form.draft.name = "Deep Clean".to_owned();
    form.draft.price = Some(500.0);
    let images = ImageSet::<()>::multi();
    assert!(form.begin_submit(&[(SERVICES.image_fields[0], &images)]));
}

#[test]
fn second_submit_is_refused_while_in_flight() {
    let mut form = FormState::<HotelDraft>::new(FormMode::Create);
    form.draft.name = "Sea View".to_owned();
    assert!(form.begin_submit::<()>(&[]));
    assert!(!form.begin_submit::<()>(&[]));
}

#[test]
fn failed_submit_keeps_draft_and_reports() {
    let mut form = FormState::<HotelDraft>::new(FormMode::Create);
    form.draft.name = "Sea View".to_owned();
    form.begin_submit::<()>(&[]);
    form.finish_submit(Err(ApiError::Rejected("Duplicate hotel".to_owned())));
    assert_eq!(form.status, FormStatus::Ready);
    assert_eq!(form.draft.name, "Sea View");
    assert_eq!(form.error.as_deref(), Some("Save failed: Duplicate hotel"));
}

#[test]
fn successful_submit_is_saved() {
    let mut form = FormState::<HotelDraft>::new(FormMode::Create);
    form.draft.name = "Sea View".to_owned();
    form.begin_submit::<()>(&[]);
    form.finish_submit(Ok(()));
    assert_eq!(form.status, FormStatus::Saved);
}
