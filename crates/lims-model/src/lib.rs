//! Data model for LIMS sample exports.
//!
//! - [`SampleNumber`], [`InternalNumber`], [`CaseNumber`]: fixed-format
//!   identifiers with strict `FromStr`, non-throwing `try_parse`, and a
//!   canonical `Display`.
//! - [`VocabularyEntry`], [`Material`], [`Host`]: controlled-vocabulary values.
//! - [`Record`]: one typed export row.

#![deny(unsafe_code)]

pub mod case_number;
pub mod error;
pub mod ids;
pub mod record;
pub mod vocabulary;

pub use case_number::{CaseNumber, LegacyCaseNumber, MAX_CASE_NUMBERS, YearCaseNumber};
pub use error::{FormatError, IdentifierKind, Result};
pub use ids::{InternalNumber, SampleNumber};
pub use record::Record;
pub use vocabulary::{Host, Material, VocabularyEntry, VocabularyKind};
