//! Round-trip properties for the identifier types.

use insta::assert_snapshot;
use proptest::prelude::*;

use lims_model::{
    CaseNumber, IdentifierKind, InternalNumber, LegacyCaseNumber, SampleNumber, YearCaseNumber,
};

proptest! {
    #[test]
    fn sample_number_roundtrips(number in any::<u16>(), subnumber in any::<u16>()) {
        let value = SampleNumber::new(number, subnumber);
        let rendered = value.to_string();
        prop_assert_eq!(rendered.parse::<SampleNumber>().unwrap(), value);
        if subnumber == 0 {
            prop_assert!(!rendered.contains('.'));
        }
    }

    #[test]
    fn internal_number_roundtrips(raw in 0u32..=InternalNumber::MAX) {
        let value = InternalNumber::new(raw).unwrap();
        let rendered = value.to_string();
        prop_assert_eq!(rendered.len(), 10);
        prop_assert!(rendered.starts_with('V'));
        prop_assert_eq!(rendered.parse::<InternalNumber>().unwrap(), value);
    }

    #[test]
    fn legacy_case_number_roundtrips(
        numbers in 0u32..=99_999,
        letters in 0u32..=LegacyCaseNumber::MAX_LETTERS,
    ) {
        let value = CaseNumber::legacy(numbers, letters).unwrap();
        let rendered = value.to_string();
        prop_assert_eq!(rendered.len(), 16);
        prop_assert!(rendered.starts_with("SAG-"));
        prop_assert_eq!(rendered.parse::<CaseNumber>().unwrap(), value);
        prop_assert_eq!(rendered.to_lowercase().parse::<CaseNumber>().ok(), None);
        let lower_letters = format!("{}{}", &rendered[..10], rendered[10..].to_lowercase());
        prop_assert_eq!(lower_letters.parse::<CaseNumber>().unwrap(), value);
    }

    #[test]
    fn year_case_number_roundtrips(
        year in YearCaseNumber::MIN_YEAR..=YearCaseNumber::MAX_YEAR,
        numbers in 0u32..=99_999,
    ) {
        let value = CaseNumber::year(year, numbers).unwrap();
        let rendered = value.to_string();
        prop_assert_eq!(rendered.len(), 10);
        prop_assert_eq!(rendered.parse::<CaseNumber>().unwrap(), value);
    }

    #[test]
    fn try_parse_never_panics(text in "\\PC{0,20}") {
        let _ = SampleNumber::try_parse(&text);
        let _ = InternalNumber::try_parse(&text);
        let _ = CaseNumber::try_parse(&text);
    }
}

#[test]
fn non_canonical_input_renders_canonically() {
    let sample: SampleNumber = " 012.000 ".parse().unwrap();
    assert_eq!(sample.to_string(), "12");
    let case: CaseNumber = "SAG-00007-00abcd".parse().unwrap();
    assert_eq!(case.to_string(), "SAG-00007-00ABCD");
}

#[test]
fn wrong_length_internal_number_is_an_error() {
    let err = "V12345".parse::<InternalNumber>().unwrap_err();
    assert_eq!(err.kind, IdentifierKind::InternalNumber);
    assert_snapshot!(err.to_string(), @"invalid internal number 'V12345': expected 10 characters");
}

#[test]
fn case_number_error_message() {
    let err = "2023_00042".parse::<CaseNumber>().unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"invalid case number '2023_00042': expected SAG-NNNNN-XXXXXX or YYYY-NNNNN"
    );
}

#[test]
fn out_of_range_year_is_an_error() {
    let err = "1999-00001".parse::<CaseNumber>().unwrap_err();
    assert_eq!(err.reason, "year outside 2000-2100");
}
