//! Row-to-record mapping.
//!
//! The mapper checks the required columns once, resolves every column it
//! reads to an index through a [`ColumnLookup`], and then maps each row
//! independently. Column order in the source is irrelevant and extra
//! columns are ignored.
//!
//! By default the first failing row aborts the whole file
//! ([`RowErrorPolicy::Abort`]). [`RowErrorPolicy::Collect`] keeps going and
//! returns the failing rows next to the mapped records. Schema errors abort
//! under either policy.

use std::str::FromStr;

use lims_model::{
    CaseNumber, FormatError, Host, InternalNumber, Material, Record, SampleNumber, VocabularyEntry,
    VocabularyKind,
};
use lims_standards::{Vocabularies, Vocabulary};

use crate::columns;
use crate::datetime::{parse_received_at, parse_sample_date};
use crate::error::{Result, RowError, RowErrorKind};
use crate::table::{ColumnLookup, SourceTable};

/// What to do when a row fails to map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowErrorPolicy {
    /// Stop at the first failing row and fail the file.
    #[default]
    Abort,
    /// Map every row; report failing rows alongside the records.
    Collect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    pub policy: RowErrorPolicy,
}

impl MapOptions {
    #[must_use]
    pub fn with_policy(mut self, policy: RowErrorPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Output of [`map_records_with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedRecords {
    /// Successfully mapped rows, in source order.
    pub records: Vec<Record>,
    /// Failing rows, in source order. Always empty under [`RowErrorPolicy::Abort`].
    pub errors: Vec<RowError>,
}

#[derive(Debug, Clone, Copy)]
struct ResolvedColumns {
    sample_number: Option<usize>,
    internal_number: Option<usize>,
    case_number: Option<usize>,
    material: Option<usize>,
    host: Option<usize>,
    received_at: Option<usize>,
    sample_date: Option<usize>,
}

impl ResolvedColumns {
    fn resolve(lookup: &ColumnLookup) -> Self {
        Self {
            sample_number: lookup.index_of(columns::SAMPLE_NUMBER),
            internal_number: lookup.index_of(columns::INTERNAL_NUMBER),
            case_number: lookup.index_of(columns::CASE_NUMBER),
            material: lookup.index_of(columns::MATERIAL),
            host: lookup.index_of(columns::HOST),
            received_at: lookup.index_of(columns::RECEIVED_AT),
            sample_date: lookup.index_of(columns::SAMPLE_DATE),
        }
    }
}

/// Maps rows of one table to [`Record`]s.
///
/// Construction performs the schema check and builds the column lookup;
/// [`RowMapper::map_row`] then only reads.
#[derive(Debug)]
pub struct RowMapper<'v> {
    columns: ResolvedColumns,
    vocabularies: &'v Vocabularies,
}

struct RowContext<'t, T: SourceTable + ?Sized> {
    table: &'t T,
    row: usize,
}

impl<T: SourceTable + ?Sized> RowContext<'_, T> {
    fn error(&self, column: &str, value: Option<&str>, kind: RowErrorKind) -> RowError {
        RowError {
            row: self.row,
            column: column.to_string(),
            value: value.map(str::to_string),
            kind,
        }
    }

    fn cell(&self, index: Option<usize>) -> Option<&str> {
        index.and_then(|idx| self.table.cell(self.row, idx))
    }

    fn required(
        &self,
        column: &str,
        index: Option<usize>,
    ) -> std::result::Result<&str, RowError> {
        self.cell(index)
            .ok_or_else(|| self.error(column, None, RowErrorKind::MissingValue))
    }

    fn identifier<V>(
        &self,
        column: &str,
        index: Option<usize>,
    ) -> std::result::Result<V, RowError>
    where
        V: FromStr<Err = FormatError>,
    {
        let text = self.required(column, index)?;
        text.parse()
            .map_err(|e: FormatError| self.error(column, Some(text), e.into()))
    }

    fn category(
        &self,
        column: &str,
        value: &str,
        vocabulary: &Vocabulary,
    ) -> std::result::Result<VocabularyEntry, RowError> {
        vocabulary.find_by_name(value).cloned().ok_or_else(|| {
            self.error(
                column,
                Some(value),
                RowErrorKind::UnknownCategory {
                    vocabulary: vocabulary.kind(),
                },
            )
        })
    }
}

impl<'v> RowMapper<'v> {
    /// Validates `required` against `columns` and builds the column lookup.
    pub fn new<S: AsRef<str>>(
        columns: &[S],
        required: &[&str],
        vocabularies: &'v Vocabularies,
    ) -> Result<Self> {
        let lookup = ColumnLookup::new(columns);
        lookup.require(required)?;
        let resolved = ResolvedColumns::resolve(&lookup);
        tracing::debug!(columns = columns.len(), "built column lookup");
        Ok(Self {
            columns: resolved,
            vocabularies,
        })
    }

    /// Maps a single row.
    pub fn map_row<T: SourceTable + ?Sized>(
        &self,
        table: &T,
        row: usize,
    ) -> std::result::Result<Record, RowError> {
        let ctx = RowContext { table, row };
        let cols = &self.columns;

        let sample_number: SampleNumber =
            ctx.identifier(columns::SAMPLE_NUMBER, cols.sample_number)?;
        let internal_number: InternalNumber =
            ctx.identifier(columns::INTERNAL_NUMBER, cols.internal_number)?;
        let case_number: CaseNumber = ctx.identifier(columns::CASE_NUMBER, cols.case_number)?;

        let material = match ctx.cell(cols.material) {
            Some(value) => Some(Material::new(ctx.category(
                columns::MATERIAL,
                value,
                self.vocabularies.get(VocabularyKind::Material),
            )?)),
            None => None,
        };

        let host_value = ctx.required(columns::HOST, cols.host)?;
        let host = Host::new(ctx.category(
            columns::HOST,
            host_value,
            self.vocabularies.get(VocabularyKind::Host),
        )?);

        let received_text = ctx.required(columns::RECEIVED_AT, cols.received_at)?;
        let received_at = parse_received_at(received_text)
            .map_err(|kind| ctx.error(columns::RECEIVED_AT, Some(received_text), kind))?;

        let sample_date = match ctx.cell(cols.sample_date) {
            Some(text) => Some(
                parse_sample_date(text)
                    .map_err(|kind| ctx.error(columns::SAMPLE_DATE, Some(text), kind))?,
            ),
            None => None,
        };

        tracing::trace!(row, sample_number = %sample_number, "mapped row");
        Ok(Record {
            sample_number,
            internal_number,
            case_number,
            sample_date,
            material,
            host,
            received_at,
        })
    }
}

/// Maps every row of `table`, aborting on the first failing row.
pub fn map_records<T: SourceTable + ?Sized>(
    table: &T,
    required: &[&str],
    vocabularies: &Vocabularies,
) -> Result<Vec<Record>> {
    map_records_with_options(table, required, vocabularies, &MapOptions::default())
        .map(|mapped| mapped.records)
}

/// Maps every row of `table` under the given row error policy.
pub fn map_records_with_options<T: SourceTable + ?Sized>(
    table: &T,
    required: &[&str],
    vocabularies: &Vocabularies,
    options: &MapOptions,
) -> Result<MappedRecords> {
    let mapper = RowMapper::new(table.columns(), required, vocabularies)?;
    let row_count = table.row_count();
    let mut mapped = MappedRecords {
        records: Vec::with_capacity(row_count),
        errors: Vec::new(),
    };
    for row in 0..row_count {
        match mapper.map_row(table, row) {
            Ok(record) => mapped.records.push(record),
            Err(error) => match options.policy {
                RowErrorPolicy::Abort => return Err(error.into()),
                RowErrorPolicy::Collect => {
                    tracing::debug!(row, column = %error.column, "row failed to map");
                    mapped.errors.push(error);
                }
            },
        }
    }
    tracing::info!(
        rows = row_count,
        records = mapped.records.len(),
        failed = mapped.errors.len(),
        "mapped LIMS export"
    );
    Ok(mapped)
}
