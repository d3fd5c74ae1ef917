use super::*;
use serde_json::json;

// =============================================================
// Collections
// =============================================================

#[test]
fn parse_collection_reads_services() {
    let body = json!({
        "success": true,
        "cleanings": [{ "_id": "1", "name": "Deep Clean", "price": 500 }]
    });
    let services: Vec<Service> = parse_collection(&body, "cleanings");
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].id, "1");
    assert_eq!(services[0].name, "Deep Clean");
    assert_eq!(services[0].price, Some(500.0));
    assert!(services[0].active);
    assert!(services[0].images.is_empty());
}

#[test]
fn parse_collection_empty_when_success_false() {
    let body = json!({ "success": false, "cleanings": [{ "_id": "1", "name": "x" }] });
    assert!(parse_collection::<Service>(&body, "cleanings").is_empty());
}

#[test]
fn parse_collection_empty_when_success_missing() {
    let body = json!({ "cleanings": [{ "_id": "1", "name": "x" }] });
    assert!(parse_collection::<Service>(&body, "cleanings").is_empty());
}

#[test]
fn parse_collection_empty_when_key_not_array() {
    let body = json!({ "success": true, "hotels": { "_id": "h1" } });
    assert!(parse_collection::<Hotel>(&body, "hotels").is_empty());
    let body = json!({ "success": true });
    assert!(parse_collection::<Hotel>(&body, "hotels").is_empty());
}

#[test]
fn parse_collection_empty_for_non_object_body() {
    assert!(parse_collection::<Hotel>(&json!("oops"), "hotels").is_empty());
    assert!(parse_collection::<Hotel>(&json!(null), "hotels").is_empty());
}

#[test]
fn parse_collection_skips_undecodable_entries() {
    let body = json!({
        "success": true,
        "providers": [{ "_id": "p1", "name": "CleanPro" }, { "name": "missing id" }, 7]
    });
    let providers: Vec<Provider> = parse_collection(&body, "providers");
    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].id, "p1");
}

// =============================================================
// Records and acks
// =============================================================

#[test]
fn parse_record_reads_single_item() {
    let body = json!({ "success": true, "hotel": { "_id": "h1", "name": "Sea View", "location": "Goa" } });
    let hotel: Hotel = parse_record(&body, "hotel").unwrap();
    assert_eq!(hotel.name, "Sea View");
    assert_eq!(hotel.location, "Goa");
}

#[test]
fn parse_record_rejected_carries_message() {
    let body = json!({ "success": false, "message": "Hotel not found" });
    assert_eq!(
        parse_record::<Hotel>(&body, "hotel"),
        Err(ApiError::Rejected("Hotel not found".to_owned()))
    );
}

#[test]
fn parse_record_missing_key_is_malformed() {
    let body = json!({ "success": true });
    assert_eq!(parse_record::<Hotel>(&body, "hotel"), Err(ApiError::Malformed));
}

#[test]
fn parse_ack_accepts_success_only() {
    assert_eq!(parse_ack(&json!({ "success": true })), Ok(()));
    assert!(matches!(parse_ack(&json!({ "success": "yes" })), Err(ApiError::Rejected(_))));
}

// =============================================================
// Lenient fields
// =============================================================

#[test]
fn service_provider_reference_as_id() {
    let service: Service = serde_json::from_value(json!({ "_id": "s1", "name": "Sofa", "provider": "p9" })).unwrap();
    assert_eq!(service.provider.as_ref().map(Reference::id), Some("p9"));
    assert_eq!(service.provider.as_ref().and_then(Reference::name), None);
}

#[test]
fn service_provider_reference_as_object() {
    let service: Service = serde_json::from_value(json!({
        "_id": "s1",
        "name": "Sofa",
        "provider": { "_id": "p9", "name": "CleanPro" }
    }))
    .unwrap();
    assert_eq!(service.provider.as_ref().map(Reference::id), Some("p9"));
    assert_eq!(service.provider.as_ref().and_then(Reference::name), Some("CleanPro"));
}

#[test]
fn numeric_fields_accept_strings_and_null() {
    let service: Service = serde_json::from_value(json!({
        "_id": "s1", "name": "A", "price": "749.5", "duration": null
    }))
    .unwrap();
    assert_eq!(service.price, Some(749.5));
    assert_eq!(service.duration, None);

    let hotel: Hotel = serde_json::from_value(json!({ "_id": "h", "name": "H", "price": "abc" })).unwrap();
    assert_eq!(hotel.price, None);
}

#[test]
fn list_fields_accept_comma_text() {
    let hotel: Hotel = serde_json::from_value(json!({
        "_id": "h", "name": "H", "amenities": "WiFi, Pool ,, Parking"
    }))
    .unwrap();
    assert_eq!(hotel.amenities, vec!["WiFi", "Pool", "Parking"]);

    let provider: Provider = serde_json::from_value(json!({
        "_id": "p", "name": "P", "specialties": ["Home", "Office"]
    }))
    .unwrap();
    assert_eq!(provider.specialties, vec!["Home", "Office"]);
}

#[test]
fn flags_accept_string_booleans() {
    let hotel: Hotel = serde_json::from_value(json!({
        "_id": "h", "name": "H", "outsideFoodAllowed": "true"
    }))
    .unwrap();
    assert!(hotel.outside_food_allowed);

    let provider: Provider = serde_json::from_value(json!({ "_id": "p", "name": "P", "isActive": "false" })).unwrap();
    assert!(!provider.is_active);
}

#[test]
fn banner_metrics_accept_json_string() {
    let banner: Banner = serde_json::from_value(json!({
        "_id": "b1",
        "title": "Welcome",
        "metrics": "[{\"label\":\"Customers\",\"value\":\"10k+\"}]"
    }))
    .unwrap();
    assert_eq!(banner.metrics, vec![Metric { label: "Customers".to_owned(), value: "10k+".to_owned() }]);
}

#[test]
fn banner_metrics_accept_numeric_values() {
    let banner: Banner = serde_json::from_value(json!({
        "_id": "b1",
        "title": "Welcome",
        "metrics": [{ "label": "Clients", "value": 500 }, { "label": "Rating", "value": 4.8 }]
    }))
    .unwrap();
    assert_eq!(
        banner.metrics,
        vec![
            Metric { label: "Clients".to_owned(), value: "500".to_owned() },
            Metric { label: "Rating".to_owned(), value: "4.8".to_owned() },
        ]
    );
}

#[test]
fn inquiry_full_name_joins_parts() {
    let inquiry: Inquiry = serde_json::from_value(json!({
        "_id": "c1", "firstName": "Asha", "lastName": "Rao", "email": "a@x.in",
        "message": "Hi", "createdAt": "2026-10-17T04:00:00.000Z"
    }))
    .unwrap();
    assert_eq!(inquiry.full_name(), "Asha Rao");
}

#[test]
fn split_list_trims_and_drops_empty() {
    assert_eq!(split_list(" a, b ,,c "), vec!["a", "b", "c"]);
    assert!(split_list("").is_empty());
}
