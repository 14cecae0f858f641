//! Case numbers in the two encodings the LIMS has issued over time.
//!
//! - Legacy: `SAG-NNNNN-XXXXXX`, five digits and a six-character base-36 code.
//! - Year: `YYYY-NNNNN`, a four-digit year in `2000..=2100` and five digits.
//!
//! The encodings are told apart by shape (length and separator position)
//! only. Parsing always tries the legacy shape first.

use std::fmt;
use std::str::FromStr;

use crate::error::{FormatError, IdentifierKind, Result};
use crate::ids::{parse_digits, serde_as_canonical_string};

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const LEGACY_PREFIX: &str = "SAG-";
const LEGACY_LEN: usize = 16;
const LEGACY_SEPARATOR_AT: usize = 9;
const LETTERS_LEN: usize = 6;

const YEAR_LEN: usize = 10;
const YEAR_SEPARATOR_AT: usize = 4;

/// Largest value of the five-digit numeric part shared by both encodings.
pub const MAX_CASE_NUMBERS: u32 = 99_999;

/// Legacy case number: `SAG-` + five digits + `-` + six base-36 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegacyCaseNumber {
    numbers: u32,
    letters: u32,
}

impl LegacyCaseNumber {
    /// Base-36 value of `ZZZZZZ`.
    pub const MAX_LETTERS: u32 = 0x81bf_0fff;

    pub fn new(numbers: u32, letters: u32) -> Result<Self> {
        let error = |reason| {
            FormatError::new(
                IdentifierKind::CaseNumber,
                format!("{numbers}/{letters:#x}"),
                reason,
            )
        };
        if numbers > MAX_CASE_NUMBERS {
            return Err(error("numeric part exceeds 5 digits"));
        }
        if letters > Self::MAX_LETTERS {
            return Err(error("letter code exceeds ZZZZZZ"));
        }
        Ok(Self { numbers, letters })
    }

    pub const fn numbers(self) -> u32 {
        self.numbers
    }

    pub const fn letters(self) -> u32 {
        self.letters
    }

    /// The letter code as six uppercase base-36 characters.
    pub fn letter_code(self) -> String {
        let mut out = [b'0'; LETTERS_LEN];
        let mut rest = self.letters;
        for slot in out.iter_mut().rev() {
            *slot = BASE36_DIGITS[(rest % 36) as usize];
            rest /= 36;
        }
        out.iter().map(|&b| char::from(b)).collect()
    }

    fn matches_shape(text: &str) -> bool {
        text.len() == LEGACY_LEN
            && text.starts_with(LEGACY_PREFIX)
            && text.as_bytes()[LEGACY_SEPARATOR_AT] == b'-'
    }

    fn parse_shaped(text: &str) -> Result<Self> {
        let error = |reason| FormatError::new(IdentifierKind::CaseNumber, text, reason);
        if !text.is_ascii() {
            return Err(error("unexpected non-ASCII character"));
        }
        let numbers = parse_digits(&text[LEGACY_PREFIX.len()..LEGACY_SEPARATOR_AT])
            .ok_or_else(|| error("expected 5 digits after 'SAG-'"))?;
        let code = &text[LEGACY_SEPARATOR_AT + 1..];
        if !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(error("letter code must be 6 base-36 characters"));
        }
        let letters = u32::from_str_radix(code, 36)
            .map_err(|_| error("letter code must be 6 base-36 characters"))?;
        Self::new(numbers, letters).map_err(|inner| error(inner.reason))
    }
}

impl fmt::Display for LegacyCaseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{LEGACY_PREFIX}{:05}-{}",
            self.numbers,
            self.letter_code()
        )
    }
}

/// Year-based case number: four-digit year + `-` + five digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearCaseNumber {
    year: u16,
    numbers: u32,
}

impl YearCaseNumber {
    pub const MIN_YEAR: u16 = 2000;
    pub const MAX_YEAR: u16 = 2100;

    pub fn new(year: u16, numbers: u32) -> Result<Self> {
        let error = |reason| {
            FormatError::new(
                IdentifierKind::CaseNumber,
                format!("{year}-{numbers}"),
                reason,
            )
        };
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(error("year outside 2000-2100"));
        }
        if numbers > MAX_CASE_NUMBERS {
            return Err(error("numeric part exceeds 5 digits"));
        }
        Ok(Self { year, numbers })
    }

    pub const fn year(self) -> u16 {
        self.year
    }

    pub const fn numbers(self) -> u32 {
        self.numbers
    }

    fn matches_shape(text: &str) -> bool {
        text.len() == YEAR_LEN && text.as_bytes()[YEAR_SEPARATOR_AT] == b'-'
    }

    fn parse_shaped(text: &str) -> Result<Self> {
        let error = |reason| FormatError::new(IdentifierKind::CaseNumber, text, reason);
        if !text.is_ascii() {
            return Err(error("unexpected non-ASCII character"));
        }
        let year = parse_digits(&text[..YEAR_SEPARATOR_AT])
            .ok_or_else(|| error("expected a 4-digit year"))?;
        let numbers = parse_digits(&text[YEAR_SEPARATOR_AT + 1..])
            .ok_or_else(|| error("expected 5 digits after the year"))?;
        Self::new(year, numbers).map_err(|inner| error(inner.reason))
    }
}

impl fmt::Display for YearCaseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:05}", self.year, self.numbers)
    }
}

/// A case identifier in either of its historical encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CaseNumber {
    Legacy(LegacyCaseNumber),
    Year(YearCaseNumber),
}

impl CaseNumber {
    pub fn legacy(numbers: u32, letters: u32) -> Result<Self> {
        LegacyCaseNumber::new(numbers, letters).map(Self::Legacy)
    }

    pub fn year(year: u16, numbers: u32) -> Result<Self> {
        YearCaseNumber::new(year, numbers).map(Self::Year)
    }

    /// The five-digit numeric part, present in both encodings.
    pub const fn numbers(self) -> u32 {
        match self {
            Self::Legacy(legacy) => legacy.numbers(),
            Self::Year(year) => year.numbers(),
        }
    }

    /// Non-throwing parse: `None` for any text that `from_str` would reject.
    pub fn try_parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FromStr for CaseNumber {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self> {
        if LegacyCaseNumber::matches_shape(text) {
            return LegacyCaseNumber::parse_shaped(text).map(Self::Legacy);
        }
        if YearCaseNumber::matches_shape(text) {
            return YearCaseNumber::parse_shaped(text).map(Self::Year);
        }
        Err(FormatError::new(
            IdentifierKind::CaseNumber,
            text,
            "expected SAG-NNNNN-XXXXXX or YYYY-NNNNN",
        ))
    }
}

impl fmt::Display for CaseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy(legacy) => fmt::Display::fmt(legacy, f),
            Self::Year(year) => fmt::Display::fmt(year, f),
        }
    }
}

serde_as_canonical_string!(CaseNumber);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legacy_form() {
        let case: CaseNumber = "SAG-01234-890AKM".parse().unwrap();
        let CaseNumber::Legacy(legacy) = case else {
            panic!("expected legacy form, got {case:?}");
        };
        assert_eq!(legacy.numbers(), 1234);
        assert_eq!(legacy.letter_code(), "890AKM");
        assert_eq!(case.to_string(), "SAG-01234-890AKM");
    }

    #[test]
    fn legacy_letters_are_case_insensitive() {
        let upper: CaseNumber = "SAG-00001-ABCXYZ".parse().unwrap();
        let lower: CaseNumber = "SAG-00001-abcxyz".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.to_string(), "SAG-00001-ABCXYZ");
    }

    #[test]
    fn legacy_max_letters_is_zzzzzz() {
        let case = CaseNumber::legacy(99_999, LegacyCaseNumber::MAX_LETTERS).unwrap();
        assert_eq!(case.to_string(), "SAG-99999-ZZZZZZ");
        assert!(CaseNumber::legacy(100_000, 0).is_err());
        assert!(CaseNumber::legacy(0, LegacyCaseNumber::MAX_LETTERS + 1).is_err());
    }

    #[test]
    fn parses_year_form() {
        let case: CaseNumber = "2023-00042".parse().unwrap();
        assert_eq!(case, CaseNumber::year(2023, 42).unwrap());
        assert_eq!(case.to_string(), "2023-00042");
        assert_eq!(case.numbers(), 42);
    }

    #[test]
    fn year_form_bounds() {
        assert!(CaseNumber::try_parse("2000-00000").is_some());
        assert!(CaseNumber::try_parse("2100-99999").is_some());
        assert!(CaseNumber::try_parse("1999-00001").is_none());
        assert!(CaseNumber::try_parse("2101-00001").is_none());
    }

    #[test]
    fn rejects_unknown_shapes() {
        for text in [
            "",
            "SAG-1234-890AKM",
            "SAG-01234_890AKM",
            "XAG-01234-890AKM",
            "SAG-0123A-890AKM",
            "SAG-01234-890AK!",
            "SAG-01234-+890AK",
            "2023/00042",
            "2023-0042",
            "23-0000042",
            "2023-0004Z",
            "ÅÅÅ-00042",
        ] {
            assert!(CaseNumber::try_parse(text).is_none(), "{text} should be rejected");
        }
    }

    #[test]
    fn error_names_case_number() {
        let err = "nope".parse::<CaseNumber>().unwrap_err();
        assert_eq!(err.kind, IdentifierKind::CaseNumber);
        assert_eq!(err.input, "nope");
    }
}
