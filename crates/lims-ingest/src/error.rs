//! Error types for LIMS export ingestion.

use std::path::PathBuf;

use thiserror::Error;

use lims_model::{FormatError, VocabularyKind};

/// Why a single cell could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowErrorKind {
    /// Identifier text does not match its grammar.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A mandatory cell is blank or its column is absent.
    #[error("value is required")]
    MissingValue,

    /// The cell names no entry of the vocabulary.
    #[error("unknown {vocabulary} category")]
    UnknownCategory { vocabulary: VocabularyKind },

    /// The cell does not match the fixed date/time layout.
    #[error("expected date/time in layout '{layout}': {source}")]
    DateTime {
        layout: &'static str,
        #[source]
        source: chrono::ParseError,
    },
}

/// A row whose cell failed identifier, category or date parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}, column '{column}': {kind}")]
pub struct RowError {
    /// Zero-based data row index (the header is not counted).
    pub row: usize,
    pub column: String,
    /// Raw cell text; `None` when the cell was missing.
    pub value: Option<String>,
    #[source]
    pub kind: RowErrorKind,
}

/// Errors that can occur while ingesting a LIMS export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV tokenizer rejected the file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Mapping Errors ===
    /// Required columns are absent; no row was processed.
    #[error(
        "missing required columns: {}; expected: {}",
        missing.join(", "),
        expected.join(", ")
    )]
    Schema {
        expected: Vec<String>,
        missing: Vec<String>,
    },

    /// A row failed to map.
    #[error(transparent)]
    Row(#[from] RowError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
