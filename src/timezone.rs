//! Converts the date of sale strings in the transaction data to calendar dates.

use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};
use time_tz::{OffsetDateTimeExt, TimeZone, Tz};

/// The timezone used to normalize sale dates when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Etc/UTC";

/// Get the timezone for a canonical timezone name, e.g. "Pacific/Auckland".
pub fn get_timezone(canonical_timezone: &str) -> Option<&'static Tz> {
    time_tz::timezones::get_by_name(canonical_timezone)
}

/// Get the calendar date that `date_of_sale` falls on in `timezone`.
///
/// Timestamps with an offset are converted to `timezone` first. Date-times
/// without an offset are read as wall-clock times in `timezone`, and plain
/// dates are used as they are.
///
/// Returns `None` if `date_of_sale` is in none of these formats.
pub fn calendar_date_in<T: TimeZone>(date_of_sale: &str, timezone: &T) -> Option<Date> {
    let date_of_sale = date_of_sale.trim();

    if let Ok(timestamp) = OffsetDateTime::parse(date_of_sale, &Rfc3339) {
        return Some(timestamp.to_timezone(timezone).date());
    }

    let local_date_time = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    if let Ok(date_time) = PrimitiveDateTime::parse(date_of_sale, local_date_time) {
        return Some(date_time.date());
    }

    Date::parse(date_of_sale, format_description!("[year]-[month]-[day]")).ok()
}
