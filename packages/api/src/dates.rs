//! Date helpers for the assignment and access-request forms.
//!
//! The API stores timestamps as RFC 3339 strings but the date inputs want
//! plain `YYYY-MM-DD` values, and the edit pages display dates in the local
//! `DD/MM/YYYY` convention. Unparseable input falls through as-is rather
//! than erroring; the server is the authority on these strings.

use chrono::{DateTime, NaiveDate};

/// Truncate a stored timestamp to the `YYYY-MM-DD` form a date input wants.
pub fn date_input_value(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.date_naive().format("%Y-%m-%d").to_string();
    }
    raw.split('T').next().unwrap_or(raw).to_string()
}

/// Render a stored timestamp as `DD/MM/YYYY` for display.
pub fn display_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.date_naive().format("%d/%m/%Y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_truncate_to_input_values() {
        assert_eq!(date_input_value("2024-03-05T10:30:00Z"), "2024-03-05");
        assert_eq!(date_input_value("2024-03-05T10:30:00.123+02:00"), "2024-03-05");
    }

    #[test]
    fn non_rfc3339_input_splits_on_the_time_marker() {
        assert_eq!(date_input_value("2024-03-05T99:99"), "2024-03-05");
        assert_eq!(date_input_value("2024-03-05"), "2024-03-05");
    }

    #[test]
    fn display_dates_use_local_convention() {
        assert_eq!(display_date("2024-03-05T10:30:00Z"), "05/03/2024");
        assert_eq!(display_date("2024-03-05"), "05/03/2024");
    }

    #[test]
    fn unparseable_dates_fall_through() {
        assert_eq!(display_date("hace poco"), "hace poco");
        assert_eq!(date_input_value(""), "");
    }
}
