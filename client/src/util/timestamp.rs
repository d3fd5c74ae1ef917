//! Timestamp display for inquiry rows.
//!
//! Backend timestamps are RFC 3339 in UTC. They are shown in the browser's
//! local offset as `d/m/yyyy, h:mm:ss am`, the en-IN locale style (day,
//! month and hour unpadded).

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Format `raw` at `offset_minutes` east of UTC. Unparseable input is
/// returned unchanged.
pub fn format_timestamp(raw: &str, offset_minutes: i32) -> String {
    let Ok(parsed) = OffsetDateTime::parse(raw.trim(), &Rfc3339) else {
        return raw.to_owned();
    };
    let offset = UtcOffset::from_whole_seconds(offset_minutes.saturating_mul(60)).unwrap_or(UtcOffset::UTC);
    let layout = format_description!("[day padding:none]/[month padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period case:lower]");
    parsed
        .to_offset(offset)
        .format(layout)
        .unwrap_or_else(|_| raw.to_owned())
}

/// Browser's current offset east of UTC in minutes; `0` off-browser.
pub fn local_offset_minutes() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        // `getTimezoneOffset` counts minutes *behind* UTC.
        #[allow(clippy::cast_possible_truncation)]
        let behind = js_sys::Date::new_0().get_timezone_offset() as i32;
        -behind
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
