//! `YYYYMMDD` date handling and "new" / "updated" status derivation.
//!
//! Dates are calendar days. Status windows are measured in whole days between
//! the record date and an injected `today`, so the cutoff falls on a day
//! boundary rather than 24 hours after some instant.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::pack::TranslationPack;
use crate::types::CalendarDate;

/// A pack counts as new / updated for this many days (inclusive).
pub const STATUS_WINDOW_DAYS: i64 = 7;

/// Display value for a missing or malformed date.
pub const UNKNOWN_DATE: &str = "Unknown Date";

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a zero-padded `YYYYMMDD` string into a calendar date.
///
/// Returns `None` for anything that is not exactly eight ASCII digits or that
/// names an impossible day (e.g. `20230230`).
pub fn parse_pack_date(raw: &str) -> Option<CalendarDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = raw[0..4].parse().ok()?;
    let month: u32 = raw[4..6].parse().ok()?;
    let day: u32 = raw[6..8].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Numeric sort key for a `YYYYMMDD` string.
///
/// The format is zero-padded and monotonic, so integer comparison orders
/// dates correctly. Malformed values map to `0` and sort oldest.
pub fn date_sort_key(raw: &str) -> u32 {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    raw.parse().unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Render a `YYYYMMDD` string as `2024年3月15日`.
///
/// Malformed input yields [`UNKNOWN_DATE`] instead of failing.
pub fn format_display_date(raw: &str) -> String {
    match parse_pack_date(raw) {
        Some(date) => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        None => UNKNOWN_DATE.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Badges shown on a pack card. Never both true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackStatus {
    pub is_new: bool,
    pub is_updated: bool,
}

/// Whether `raw` falls within the status window ending on `today`.
fn within_window(raw: &str, today: CalendarDate) -> bool {
    parse_pack_date(raw)
        .map(|date| (today - date).num_days() <= STATUS_WINDOW_DAYS)
        .unwrap_or(false)
}

/// Derive the new / updated badges for `pack` as of `today`.
///
/// "New" wins over "updated": a pack created inside the window is never also
/// reported as updated.
pub fn derive_status(pack: &TranslationPack, today: CalendarDate) -> PackStatus {
    let is_new = within_window(&pack.created_at, today);
    let is_updated = !is_new && within_window(&pack.updated_at, today);

    PackStatus { is_new, is_updated }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::fixtures::pack;

    fn day(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated(created: &str, updated: &str) -> TranslationPack {
        let mut p = pack(1);
        p.created_at = created.to_string();
        p.updated_at = updated.to_string();
        p
    }

    // -- parse_pack_date -----------------------------------------------------

    #[test]
    fn parses_valid_date() {
        assert_eq!(parse_pack_date("20240315"), Some(day(2024, 3, 15)));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(parse_pack_date(""), None);
        assert_eq!(parse_pack_date("abc"), None);
        assert_eq!(parse_pack_date("2024031"), None);
        assert_eq!(parse_pack_date("2024-3-15"), None);
        assert_eq!(parse_pack_date("20241315"), None);
        assert_eq!(parse_pack_date("20230230"), None);
        assert_eq!(parse_pack_date("２０２４０３１５"), None);
    }

    // -- date_sort_key -------------------------------------------------------

    #[test]
    fn sort_key_orders_like_dates() {
        assert!(date_sort_key("20240320") > date_sort_key("20240301"));
        assert!(date_sort_key("20240101") > date_sort_key("20231231"));
        assert_eq!(date_sort_key("garbage!"), 0);
        assert_eq!(date_sort_key(""), 0);
    }

    // -- format_display_date -------------------------------------------------

    #[test]
    fn formats_localized_date() {
        let shown = format_display_date("20240315");
        assert_eq!(shown, "2024年3月15日");
        assert!(shown.contains("2024"));
        assert!(shown.contains("3月"));
        assert!(shown.contains("15"));
    }

    #[test]
    fn strips_leading_zeros_from_day() {
        assert_eq!(format_display_date("20241105"), "2024年11月5日");
    }

    #[test]
    fn malformed_date_shows_sentinel() {
        assert_eq!(format_display_date(""), UNKNOWN_DATE);
        assert_eq!(format_display_date("abc"), UNKNOWN_DATE);
        assert_eq!(format_display_date("2024AB15"), UNKNOWN_DATE);
    }

    // -- derive_status -------------------------------------------------------

    #[test]
    fn fresh_pack_is_new_only() {
        let p = dated("20240101", "20240101");
        let status = derive_status(&p, day(2024, 1, 5));
        assert_eq!(
            status,
            PackStatus {
                is_new: true,
                is_updated: false
            }
        );
    }

    #[test]
    fn expired_windows_are_both_false() {
        let p = dated("20240101", "20240101");
        assert_eq!(derive_status(&p, day(2024, 1, 20)), PackStatus::default());
    }

    #[test]
    fn old_pack_recently_updated() {
        let p = dated("20230101", "20240110");
        let status = derive_status(&p, day(2024, 1, 12));
        assert!(!status.is_new);
        assert!(status.is_updated);
    }

    #[test]
    fn window_is_inclusive_of_seventh_day() {
        let p = dated("20240101", "20240101");
        assert!(derive_status(&p, day(2024, 1, 8)).is_new);
        assert!(!derive_status(&p, day(2024, 1, 9)).is_new);
    }

    #[test]
    fn malformed_dates_never_flag() {
        let p = dated("soon", "");
        assert_eq!(derive_status(&p, day(2024, 1, 1)), PackStatus::default());
    }

    #[test]
    fn new_and_updated_are_mutually_exclusive() {
        let p = dated("20240110", "20240112");
        let mut today = day(2024, 1, 1);
        while today <= day(2024, 2, 15) {
            let status = derive_status(&p, today);
            assert!(
                !(status.is_new && status.is_updated),
                "both flags set on {today}"
            );
            today = today.succ_opt().unwrap();
        }
    }

    #[test]
    fn status_serializes_camel_case() {
        let value = serde_json::to_value(PackStatus {
            is_new: true,
            is_updated: false,
        })
        .unwrap();
        assert_eq!(value["isNew"], true);
        assert_eq!(value["isUpdated"], false);
    }
}
