//! Fixed date/time layouts of the LIMS export.
//!
//! Receipt timestamps use `.` between hour and minute (`01/02/2023 10.30`);
//! sample dates carry no time (`01/02/2023`). Both are day-first.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::RowErrorKind;

/// `chrono` layout of the receipt timestamp.
pub const RECEIVED_AT_LAYOUT: &str = "%d/%m/%Y %H.%M";

/// `chrono` layout of the sample date.
pub const SAMPLE_DATE_LAYOUT: &str = "%d/%m/%Y";

pub fn parse_received_at(text: &str) -> Result<NaiveDateTime, RowErrorKind> {
    NaiveDateTime::parse_from_str(text, RECEIVED_AT_LAYOUT).map_err(|source| {
        RowErrorKind::DateTime {
            layout: RECEIVED_AT_LAYOUT,
            source,
        }
    })
}

pub fn parse_sample_date(text: &str) -> Result<NaiveDate, RowErrorKind> {
    NaiveDate::parse_from_str(text, SAMPLE_DATE_LAYOUT).map_err(|source| RowErrorKind::DateTime {
        layout: SAMPLE_DATE_LAYOUT,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_receipt_timestamp() {
        let parsed = parse_received_at("01/02/2023 10.30").unwrap();
        let expected = NaiveDate::from_ymd_opt(2023, 2, 1)
            .and_then(|date| date.and_hms_opt(10, 30, 0))
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn colon_separator_is_rejected() {
        let err = parse_received_at("01/02/2023 10:30").unwrap_err();
        assert!(matches!(
            err,
            RowErrorKind::DateTime {
                layout: RECEIVED_AT_LAYOUT,
                ..
            }
        ));
    }

    #[test]
    fn parses_sample_date() {
        assert_eq!(
            parse_sample_date("31/12/2022").unwrap(),
            NaiveDate::from_ymd_opt(2022, 12, 31).unwrap()
        );
        assert!(parse_sample_date("2022-12-31").is_err());
        assert!(parse_sample_date("31/02/2022").is_err());
    }
}
