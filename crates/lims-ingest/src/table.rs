//! Table access for the row mapper.

use std::collections::HashMap;

use crate::error::{IngestError, Result};

/// A materialised table of named string columns.
///
/// Implementations return `None` from [`SourceTable::cell`] for blank or
/// absent cells; the mapper treats both as "missing".
pub trait SourceTable {
    /// Column names in source order.
    fn columns(&self) -> &[String];

    fn row_count(&self) -> usize;

    /// Cell text at `row` for the column at `column` (index into [`columns`](Self::columns)).
    fn cell(&self, row: usize, column: usize) -> Option<&str>;
}

/// Table read from a CSV file; every row has one cell per header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable for CsvTable {
    fn columns(&self) -> &[String] {
        &self.headers
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// Name -> index lookup over a table's columns, built once per file.
#[derive(Debug, Clone, Default)]
pub struct ColumnLookup {
    indices: HashMap<String, usize>,
}

impl ColumnLookup {
    /// Builds the lookup. When a name repeats, the first column wins.
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        let mut indices = HashMap::with_capacity(columns.len());
        for (idx, name) in columns.iter().enumerate() {
            let name = name.as_ref();
            if indices.contains_key(name) {
                tracing::warn!(column = name, index = idx, "duplicate column name ignored");
                continue;
            }
            indices.insert(name.to_string(), idx);
        }
        Self { indices }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Checks that every `required` column is present.
    ///
    /// Fails with [`IngestError::Schema`] listing the full expected set and
    /// the missing names.
    pub fn require(&self, required: &[&str]) -> Result<()> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| !self.contains(name))
            .map(|name| (*name).to_string())
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(IngestError::Schema {
            expected: required.iter().map(|name| (*name).to_string()).collect(),
            missing,
        })
    }
}
