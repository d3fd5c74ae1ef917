use super::*;

#[test]
fn formats_in_india_standard_time() {
    assert_eq!(format_timestamp("2024-05-01T10:20:30.000Z", 330), "1/5/2024, 3:50:30 pm");
}

#[test]
fn formats_morning_hours_with_am() {
    assert_eq!(format_timestamp("2024-12-31T00:05:09Z", 0), "31/12/2024, 12:05:09 am");
}

#[test]
fn negative_offsets_can_cross_midnight() {
    assert_eq!(format_timestamp("2024-01-01T02:00:00Z", -300), "31/12/2023, 9:00:00 pm");
}

#[test]
fn single_digit_parts_are_not_padded() {
    assert_eq!(format_timestamp("2024-01-01T15:04:05Z", 0), "1/1/2024, 3:04:05 pm");
}

#[test]
fn unparseable_input_is_returned_raw() {
    assert_eq!(format_timestamp("yesterday", 330), "yesterday");
    assert_eq!(format_timestamp("", 0), "");
}

#[test]
fn out_of_range_offset_falls_back_to_utc() {
    assert_eq!(format_timestamp("2024-05-01T10:20:30Z", 100_000), "1/5/2024, 10:20:30 am");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_offset_is_zero_off_browser() {
    assert_eq!(local_offset_minutes(), 0);
}
