use super::*;
use crate::net::payload::{FormPayload, build_payload};
use crate::net::resource::FormMode;
use serde_json::json;

fn names(fields: &[FieldValue]) -> Vec<String> {
    let payload: FormPayload<()> = build_payload(fields, &[], &FormMode::Create);
    payload.names().into_iter().map(str::to_owned).collect()
}

fn update_payload(fields: &[FieldValue]) -> FormPayload<()> {
    build_payload(fields, &[], &FormMode::Edit("x1".to_owned()))
}

// =============================================================
// Service
// =============================================================

#[test]
fn service_prefill_normalizes_populated_provider() {
    let service: Service = serde_json::from_value(json!({
        "_id": "s1",
        "name": "Deep Clean",
        "price": "500",
        "provider": { "_id": "p1", "name": "CleanPro" }
    }))
    .unwrap();
    let draft = ServiceDraft::from_entity(&service);
    assert_eq!(draft.provider.as_deref(), Some("p1"));
    assert_eq!(draft.price, Some(500.0));
}

#[test]
fn service_prefill_keeps_bare_provider_id() {
    let service: Service =
        serde_json::from_value(json!({ "_id": "s1", "name": "Deep Clean", "provider": "p9" })).unwrap();
    assert_eq!(ServiceDraft::from_entity(&service).provider.as_deref(), Some("p9"));
}

#[test]
fn service_without_provider_omits_field() {
    let draft = ServiceDraft { name: "Deep Clean".to_owned(), price: Some(500.0), ..ServiceDraft::default() };
    assert_eq!(names(&draft.fields()), vec!["name", "price"]);
}

#[test]
fn service_update_clears_emptied_fields_but_not_provider() {
    let service: Service = serde_json::from_value(json!({
        "_id": "s1",
        "name": "Deep Clean",
        "price": 500,
        "description": "Kitchen and bath",
        "category": "Home"
    }))
    .unwrap();
    let mut draft = ServiceDraft::from_entity(&service);
    draft.description.clear();
    draft.category = "  ".to_owned();
    draft.duration = None;

    let payload = update_payload(&draft.fields());
    assert_eq!(payload.text_value("description"), Some(""));
    assert_eq!(payload.text_value("category"), Some(""));
    assert_eq!(payload.text_value("duration"), Some(""));
    assert!(!payload.contains("provider"));

    draft.provider = Some("p1".to_owned());
    assert_eq!(update_payload(&draft.fields()).text_value("provider"), Some("p1"));
}

#[test]
fn service_requires_name_and_price() {
    let mut draft = ServiceDraft { name: "Deep Clean".to_owned(), ..ServiceDraft::default() };
    assert!(draft.validate().is_err());
    draft.price = Some(0.0);
    assert!(draft.validate().is_ok());
}

// =============================================================
// Hotel
// =============================================================

#[test]
fn hotel_defaults_to_capacity_two() {
    let draft = HotelDraft::default();
    assert_eq!(draft.capacity, Some(2.0));
    assert!(!draft.outside_food_allowed);
}

#[test]
fn hotel_prefill_joins_amenities() {
    let hotel: Hotel = serde_json::from_value(json!({
        "_id": "h1",
        "name": "Sea View",
        "amenities": ["WiFi", "Pool"],
        "outsideFoodAllowed": "true"
    }))
    .unwrap();
    let draft = HotelDraft::from_entity(&hotel);
    assert_eq!(draft.amenities, "WiFi, Pool");
    assert!(draft.outside_food_allowed);
}

#[test]
fn hotel_always_sends_food_flag() {
    let draft = HotelDraft { name: "Sea View".to_owned(), capacity: None, ..HotelDraft::default() };
    assert_eq!(names(&draft.fields()), vec!["name", "outsideFoodAllowed"]);
}

#[test]
fn hotel_update_sends_cleared_description() {
    let hotel: Hotel = serde_json::from_value(json!({
        "_id": "h1",
        "name": "Sea View",
        "location": "Goa",
        "description": "Old text",
        "amenities": ["WiFi"]
    }))
    .unwrap();
    let mut draft = HotelDraft::from_entity(&hotel);
    draft.description.clear();
    draft.location.clear();
    draft.amenities.clear();

    let payload = update_payload(&draft.fields());
    assert_eq!(payload.text_value("description"), Some(""));
    assert_eq!(payload.text_value("location"), Some(""));
    assert_eq!(payload.text_value("amenities"), Some(""));
    assert_eq!(payload.text_value("name"), Some("Sea View"));
}

// =============================================================
// Provider
// =============================================================

#[test]
fn provider_with_only_name_sends_name_and_active_flag() {
    let draft = ProviderDraft { name: "CleanPro".to_owned(), ..ProviderDraft::default() };
    assert!(draft.validate().is_ok());
    assert_eq!(names(&draft.fields()), vec!["name", "isActive"]);
}

#[test]
fn provider_update_sends_every_text_field() {
    let draft = ProviderDraft { name: "CleanPro".to_owned(), ..ProviderDraft::default() };
    let payload = update_payload(&draft.fields());
    assert_eq!(
        payload.names(),
        vec![
            "name",
            "description",
            "email",
            "phone",
            "address",
            "city",
            "state",
            "pincode",
            "rating",
            "specialties",
            "isActive"
        ]
    );
    assert_eq!(payload.text_value("email"), Some(""));
}

#[test]
fn provider_requires_name() {
    assert!(ProviderDraft::default().validate().is_err());
}

#[test]
fn provider_existing_images_split_logo_and_gallery() {
    let provider: Provider = serde_json::from_value(json!({
        "_id": "p1",
        "name": "CleanPro",
        "logo": "https://cdn/logo.png",
        "images": ["https://cdn/1.jpg"],
        "specialties": "Sofa, Carpet"
    }))
    .unwrap();
    let slots = ProviderDraft::existing_images(&provider);
    assert_eq!(slots, vec![vec!["https://cdn/logo.png".to_owned()], vec!["https://cdn/1.jpg".to_owned()]]);
    assert_eq!(ProviderDraft::from_entity(&provider).specialties, "Sofa, Carpet");
}

// =============================================================
// Banners
// =============================================================

#[test]
fn home_banner_sends_metrics_as_json_text() {
    let mut draft = HomeBannerDraft { title: "Sparkle".to_owned(), ..HomeBannerDraft::default() };
    draft.add_metric();
    draft.set_metric_label(0, "Customers".to_owned());
    draft.set_metric_value(0, "10k+".to_owned());
    draft.add_metric();

    let payload: FormPayload<()> = build_payload(&draft.fields(), &[], &FormMode::Create);
    let metrics: Vec<Metric> = serde_json::from_str(payload.text_value("metrics").unwrap()).unwrap();
    assert_eq!(metrics, vec![Metric { label: "Customers".to_owned(), value: "10k+".to_owned() }]);
    assert_eq!(payload.text_value("gradientStart"), Some("#e0f2ff"));
}

#[test]
fn home_banner_remove_metric_out_of_range_is_noop() {
    let mut draft = HomeBannerDraft::default();
    draft.add_metric();
    draft.remove_metric(3);
    assert_eq!(draft.metrics.len(), 1);
    draft.remove_metric(0);
    assert!(draft.metrics.is_empty());
}

#[test]
fn home_banner_prefill_falls_back_to_default_gradient() {
    let banner = Banner { id: "b".to_owned(), title: "T".to_owned(), ..Banner::default() };
    let draft = HomeBannerDraft::from_entity(&banner);
    assert_eq!(draft.gradient_end, "#ffffff");
    assert_eq!(HomeBannerDraft::existing_images(&banner), vec![Vec::<String>::new()]);
}

#[test]
fn home_banner_update_sends_cleared_button() {
    let banner = Banner {
        id: "b".to_owned(),
        title: "Sparkle".to_owned(),
        button_text: Some("Book now".to_owned()),
        button_link: Some("/book".to_owned()),
        ..Banner::default()
    };
    let mut draft = HomeBannerDraft::from_entity(&banner);
    draft.button_text.clear();
    draft.button_link.clear();

    let payload = update_payload(&draft.fields());
    assert_eq!(payload.text_value("buttonText"), Some(""));
    assert_eq!(payload.text_value("buttonLink"), Some(""));
    assert_eq!(payload.text_value("metrics"), Some("[]"));
}

#[test]
fn cleaning_banner_update_sends_cleared_subtitle() {
    let draft = CleaningBannerDraft { title: "Fresh".to_owned(), subtitle: String::new() };
    let payload = update_payload(&draft.fields());
    assert_eq!(payload.names(), vec!["title", "subtitle"]);
    assert_eq!(payload.text_value("subtitle"), Some(""));
}

#[test]
fn cleaning_banner_sends_title_and_subtitle_only() {
    let draft = CleaningBannerDraft { title: "Fresh".to_owned(), subtitle: "Homes".to_owned() };
    assert_eq!(names(&draft.fields()), vec!["title", "subtitle"]);
    assert!(CleaningBannerDraft::default().validate().is_err());
}
