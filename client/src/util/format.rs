//! Number and price display helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Parse a numeric input. Empty or non-numeric text is "no value".
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Render a number for an input or a multipart field; whole numbers drop the
/// fractional part. `None` renders empty.
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", n as i64),
        Some(n) => n.to_string(),
    }
}

/// Price in rupees, e.g. `₹500`.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        None => "-".to_owned(),
        some => format!("₹{}", format_number(some)),
    }
}

/// Star rating with one decimal, e.g. `4.5 ★`.
pub fn format_rating(value: Option<f64>) -> String {
    value.map_or_else(|| "No rating".to_owned(), |r| format!("{r:.1} ★"))
}

/// Upper-case the first character (`"hotel"` becomes `"Hotel"`).
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
