use super::*;
use crate::net::resource::{HOTELS, PROVIDERS, SERVICES};

fn text_fields() -> Vec<FieldValue> {
    vec![
        FieldValue::Text("name", "CleanPro".to_owned()),
        FieldValue::Text("email", String::new()),
        FieldValue::Text("phone", "   ".to_owned()),
        FieldValue::Flag("isActive", true),
    ]
}

#[test]
fn blank_text_fields_are_omitted() {
    let payload: FormPayload<String> = build_payload(&text_fields(), &[], &FormMode::Create);
    assert_eq!(payload.names(), vec!["name", "isActive"]);
    assert_eq!(payload.text_value("name"), Some("CleanPro"));
    assert_eq!(payload.text_value("isActive"), Some("true"));
    assert!(!payload.contains("email"));
}

#[test]
fn update_sends_blank_text_fields_as_empty() {
    let payload: FormPayload<String> = build_payload(&text_fields(), &[], &FormMode::Edit("p1".to_owned()));
    assert_eq!(payload.names(), vec!["name", "email", "phone", "isActive"]);
    assert_eq!(payload.text_value("email"), Some(""));
    assert_eq!(payload.text_value("phone"), Some(""));
}

#[test]
fn unset_reference_is_omitted_in_both_modes() {
    let fields = [FieldValue::Ref("provider", None), FieldValue::Ref("owner", Some(" ".to_owned()))];
    for mode in [FormMode::Create, FormMode::Edit("s1".to_owned())] {
        let payload: FormPayload<String> = build_payload(&fields, &[], &mode);
        assert!(payload.names().is_empty());
    }
    let chosen = [FieldValue::Ref("provider", Some("p1".to_owned()))];
    let payload: FormPayload<String> = build_payload(&chosen, &[], &FormMode::Create);
    assert_eq!(payload.text_value("provider"), Some("p1"));
}

#[test]
fn text_values_are_trimmed() {
    let mut payload: FormPayload<String> = FormPayload::new();
    payload.text("city", "  Pune ");
    assert_eq!(payload.text_value("city"), Some("Pune"));
}

#[test]
fn provider_with_only_name_sends_name_and_flags() {
    let logo: ImageSet<String> = ImageSet::single();
    let gallery: ImageSet<String> = ImageSet::multi();
    let slots = [(PROVIDERS.image_fields[0], &logo), (PROVIDERS.image_fields[1], &gallery)];
    let payload = build_payload(&text_fields(), &slots, &FormMode::Create);
    assert_eq!(payload.names(), vec!["name", "isActive"]);
}

#[test]
fn create_does_not_send_existing_images() {
    let mut images = ImageSet::multi();
    images.add_pending("a.jpg".to_owned(), "blob:a".to_owned());
    let payload = build_payload(&[], &[(HOTELS.image_fields[0], &images)], &FormMode::Create);
    assert!(!payload.contains("existingImages"));
    assert_eq!(payload.files("images"), vec![&"a.jpg".to_owned()]);
}

#[test]
fn update_sends_kept_urls_and_remaining_pending_files() {
    let mut images = ImageSet::multi();
    images.set_existing(vec!["https://cdn/1.jpg".to_owned(), "https://cdn/2.jpg".to_owned()]);
    images.add_pending("new-1.jpg".to_owned(), "blob:1".to_owned());
    images.add_pending("new-2.jpg".to_owned(), "blob:2".to_owned());
    images.remove_existing(0);
    images.remove_pending(0);

    let mode = FormMode::Edit("s1".to_owned());
    let payload = build_payload(&[], &[(SERVICES.image_fields[0], &images)], &mode);

    let kept: Vec<String> = serde_json::from_str(payload.text_value("existingImages").unwrap()).unwrap();
    assert_eq!(kept, vec!["https://cdn/2.jpg".to_owned()]);
    assert_eq!(payload.files("newImages"), vec![&"new-2.jpg".to_owned()]);
    assert!(payload.files("images").is_empty());
}

#[test]
fn update_with_everything_removed_sends_empty_list() {
    let mut images: ImageSet<String> = ImageSet::multi();
    images.set_existing(vec!["https://cdn/1.jpg".to_owned()]);
    images.remove_existing(0);
    let payload = build_payload(&[], &[(HOTELS.image_fields[0], &images)], &FormMode::Edit("h".to_owned()));
    assert_eq!(payload.text_value("existingImages"), Some("[]"));
}

#[test]
fn single_slot_without_existing_field_only_sends_new_file() {
    let mut logo = ImageSet::single();
    logo.set_existing(vec!["https://cdn/logo.png".to_owned()]);
    logo.add_pending("logo.png".to_owned(), "blob:l".to_owned());
    let payload = build_payload(&[], &[(PROVIDERS.image_fields[0], &logo)], &FormMode::Edit("p".to_owned()));
    assert_eq!(payload.names(), vec!["logo"]);
}

#[test]
fn json_fields_are_always_sent() {
    let fields = [FieldValue::Json("metrics", serde_json::json!([]))];
    let payload: FormPayload<String> = build_payload(&fields, &[], &FormMode::Create);
    assert_eq!(payload.text_value("metrics"), Some("[]"));
}

#[test]
fn parts_preserve_order_and_repeat_file_names() {
    let mut images = ImageSet::multi();
    images.add_pending("a".to_owned(), "blob:a".to_owned());
    images.add_pending("b".to_owned(), "blob:b".to_owned());
    let fields = [FieldValue::Text("name", "Sea View".to_owned())];
    let payload = build_payload(&fields, &[(HOTELS.image_fields[0], &images)], &FormMode::Create);
    assert_eq!(payload.names(), vec!["name", "images", "images"]);
    assert_eq!(payload.into_parts().len(), 3);
}
