use super::*;

#[test]
fn coerce_number_accepts_trimmed_numbers() {
    assert_eq!(coerce_number(" 500 "), Some(500.0));
    assert_eq!(coerce_number("2.5"), Some(2.5));
}

#[test]
fn coerce_number_rejects_empty_and_garbage() {
    assert_eq!(coerce_number(""), None);
    assert_eq!(coerce_number("   "), None);
    assert_eq!(coerce_number("five"), None);
    assert_eq!(coerce_number("NaN"), None);
    assert_eq!(coerce_number("inf"), None);
}

#[test]
fn format_number_drops_trailing_zero_fraction() {
    assert_eq!(format_number(Some(500.0)), "500");
    assert_eq!(format_number(Some(1.5)), "1.5");
    assert_eq!(format_number(Some(-3.0)), "-3");
    assert_eq!(format_number(None), "");
}

#[test]
fn format_price_prefixes_rupee_sign() {
    assert_eq!(format_price(Some(500.0)), "₹500");
    assert_eq!(format_price(Some(99.5)), "₹99.5");
    assert_eq!(format_price(None), "-");
}

#[test]
fn format_rating_uses_one_decimal() {
    assert_eq!(format_rating(Some(4.0)), "4.0 ★");
    assert_eq!(format_rating(None), "No rating");
}

#[test]
fn capitalize_first_letter_only() {
    assert_eq!(capitalize("home banner"), "Home banner");
    assert_eq!(capitalize(""), "");
}
