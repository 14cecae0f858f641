//! CSV file reading into a [`CsvTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::table::CsvTable;

use super::header::{normalize_cell, normalize_header};

/// Tokenizer settings for LIMS exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter byte (`,` by default; Danish exports often use `;`).
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads a CSV file with a single header row.
pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<CsvTable> {
    let file = open_file(path)?;
    let table = read_csv_from_reader(file, path, options)?;
    tracing::debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read CSV table"
    );
    Ok(table)
}

/// Reads CSV data from any reader. `origin` is only used in error messages.
///
/// Headers and cells are trimmed, fully blank lines are skipped, and short
/// rows are padded with empty cells. A row with more fields than the header
/// is rejected, since it usually means a misquoted cell.
pub fn read_csv_from_reader<R: Read>(
    reader: R,
    origin: &Path,
    options: &IngestOptions,
) -> Result<CsvTable> {
    let parse_error = |e: csv::Error| IngestError::CsvParse {
        path: origin.to_path_buf(),
        message: e.to_string(),
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: origin.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if record.len() > headers.len() {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(IngestError::CsvParse {
                path: origin.to_path_buf(),
                message: format!(
                    "line {line}: {} fields, header has {}",
                    record.len(),
                    headers.len()
                ),
            });
        }
        let row = (0..headers.len())
            .map(|idx| normalize_cell(record.get(idx).unwrap_or("")))
            .collect();
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}
