use std::fmt;

use thiserror::Error;

/// The identifier family a [`FormatError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    SampleNumber,
    InternalNumber,
    CaseNumber,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SampleNumber => "sample number",
            Self::InternalNumber => "internal number",
            Self::CaseNumber => "case number",
        })
    }
}

/// Identifier text does not match its fixed grammar or exceeds a numeric bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{input}': {reason}")]
pub struct FormatError {
    pub kind: IdentifierKind,
    pub input: String,
    pub reason: &'static str,
}

impl FormatError {
    pub(crate) fn new(
        kind: IdentifierKind,
        input: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self {
            kind,
            input: input.into(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
