//! Ingestion of LIMS sample exports.
//!
//! A CSV export is read into a [`CsvTable`], its columns are checked
//! against [`REQUIRED_COLUMNS`], and every row is mapped to a
//! [`lims_model::Record`] with identifiers parsed, categories resolved
//! against the loaded vocabularies and timestamps parsed with fixed layouts.

#![deny(unsafe_code)]

pub mod columns;
pub mod csv;
pub mod datetime;
pub mod error;
pub mod mapper;
pub mod table;

use std::path::Path;

use lims_model::Record;
use lims_standards::Vocabularies;

pub use crate::columns::REQUIRED_COLUMNS;
pub use crate::csv::{
    IngestOptions, normalize_cell, normalize_header, read_csv_from_reader, read_csv_table,
};
pub use crate::datetime::{
    RECEIVED_AT_LAYOUT, SAMPLE_DATE_LAYOUT, parse_received_at, parse_sample_date,
};
pub use crate::error::{IngestError, Result, RowError, RowErrorKind};
pub use crate::mapper::{
    MapOptions, MappedRecords, RowErrorPolicy, RowMapper, map_records, map_records_with_options,
};
pub use crate::table::{ColumnLookup, CsvTable, SourceTable};

/// Reads a LIMS export from `path` and maps every row.
///
/// Convenience over [`read_csv_table`] followed by
/// [`map_records_with_options`] with the standard [`REQUIRED_COLUMNS`].
pub fn ingest_file(
    path: &Path,
    vocabularies: &Vocabularies,
    ingest: &IngestOptions,
    map: &MapOptions,
) -> Result<MappedRecords> {
    let table = read_csv_table(path, ingest)?;
    map_records_with_options(&table, &REQUIRED_COLUMNS, vocabularies, map)
}

/// Reads and maps a LIMS export, failing on the first bad row.
pub fn ingest_records(path: &Path, vocabularies: &Vocabularies) -> Result<Vec<Record>> {
    let mapped = ingest_file(
        path,
        vocabularies,
        &IngestOptions::default(),
        &MapOptions::default(),
    )?;
    Ok(mapped.records)
}
