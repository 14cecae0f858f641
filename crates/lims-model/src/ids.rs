use std::fmt;
use std::str::FromStr;

use crate::error::{FormatError, IdentifierKind, Result};

/// Parses a non-empty run of ASCII digits.
///
/// `str::parse` alone would also accept a leading `+`, which none of the
/// LIMS identifier grammars allow.
pub(crate) fn parse_digits<T: FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// A sample number with an optional sub-sample index.
///
/// `subnumber == 0` means "no sub-sample" and renders without the dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SampleNumber {
    pub number: u16,
    pub subnumber: u16,
}

impl SampleNumber {
    pub const fn new(number: u16, subnumber: u16) -> Self {
        Self { number, subnumber }
    }

    /// Returns `true` when the sub-sample index is set.
    pub const fn has_subnumber(self) -> bool {
        self.subnumber != 0
    }

    /// Non-throwing parse: `None` for any text that `from_str` would reject.
    pub fn try_parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FromStr for SampleNumber {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let error = |reason| FormatError::new(IdentifierKind::SampleNumber, text, reason);
        let (number, subnumber) = match trimmed.split_once('.') {
            Some((number, subnumber)) => (number, Some(subnumber)),
            None => (trimmed, None),
        };
        let number =
            parse_digits(number).ok_or_else(|| error("sample index is not a 16-bit number"))?;
        let subnumber = match subnumber {
            Some(value) => parse_digits(value)
                .ok_or_else(|| error("sub-sample index is not a 16-bit number"))?,
            None => 0,
        };
        Ok(Self { number, subnumber })
    }
}

impl fmt::Display for SampleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_subnumber() {
            write!(f, "{}.{}", self.number, self.subnumber)
        } else {
            write!(f, "{}", self.number)
        }
    }
}

/// Internal LIMS number ("V-number"), rendered as `V` plus nine digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InternalNumber(u32);

impl InternalNumber {
    pub const MAX: u32 = 999_999_999;
    const PREFIX: u8 = b'V';
    const TEXT_LEN: usize = 10;

    pub fn new(value: u32) -> Result<Self> {
        if value > Self::MAX {
            return Err(FormatError::new(
                IdentifierKind::InternalNumber,
                value.to_string(),
                "value exceeds 9 digits",
            ));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Non-throwing parse: `None` for any text that `from_str` would reject.
    pub fn try_parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FromStr for InternalNumber {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self> {
        let error = |reason| FormatError::new(IdentifierKind::InternalNumber, text, reason);
        if text.len() != Self::TEXT_LEN {
            return Err(error("expected 10 characters"));
        }
        if text.as_bytes()[0] != Self::PREFIX {
            return Err(error("expected prefix 'V'"));
        }
        let value: u32 =
            parse_digits(&text[1..]).ok_or_else(|| error("expected 9 digits after 'V'"))?;
        Self::new(value).map_err(|_| error("value exceeds 9 digits"))
    }
}

impl fmt::Display for InternalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{:09}", self.0)
    }
}

macro_rules! serde_as_canonical_string {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use serde_as_canonical_string;

serde_as_canonical_string!(SampleNumber);
serde_as_canonical_string!(InternalNumber);
