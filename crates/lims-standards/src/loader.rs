//! Name-list loading.
//!
//! A name list is a CSV file with a `Navn` column (native name) and an
//! optional `Engelsk navn` column (English name). Blank English cells mean
//! the translation is absent. Default lists for every [`VocabularyKind`] are
//! compiled into the crate; a directory holding `materials.csv` and
//! `hosts.csv` can replace them.

use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};

use lims_model::VocabularyKind;

use crate::error::{Result, VocabularyError};
use crate::vocabulary::{NamePair, Vocabularies, Vocabulary};

/// Environment variable for overriding the bundled name lists.
pub const VOCABULARY_ENV_VAR: &str = "LIMS_VOCABULARY_DIR";

/// Column holding the native name.
pub const NAME_COLUMN: &str = "Navn";

/// Column holding the English name.
pub const ENGLISH_NAME_COLUMN: &str = "Engelsk navn";

const BUNDLED_MATERIALS: &str = include_str!("../../../standards/vocabulary/materials.csv");
const BUNDLED_HOSTS: &str = include_str!("../../../standards/vocabulary/hosts.csv");

fn bundled_source(kind: VocabularyKind) -> &'static str {
    match kind {
        VocabularyKind::Material => BUNDLED_MATERIALS,
        VocabularyKind::Host => BUNDLED_HOSTS,
    }
}

fn bundled_path(kind: VocabularyKind) -> PathBuf {
    PathBuf::from(format!("<bundled>/{}.csv", kind.file_stem()))
}

/// Directory configured through [`VOCABULARY_ENV_VAR`], if any.
pub fn vocabulary_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(VOCABULARY_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Reads name pairs from CSV data.
///
/// `origin` is only used in error messages.
pub fn read_name_list<R: io::Read>(reader: R, origin: &Path) -> Result<Vec<NamePair>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| VocabularyError::csv(origin, &e))?
        .clone();
    let position = |column: &str| {
        headers
            .iter()
            .position(|header| header.trim_start_matches('\u{feff}') == column)
    };
    let name_idx = position(NAME_COLUMN).ok_or_else(|| VocabularyError::MissingColumn {
        column: NAME_COLUMN.to_string(),
        path: origin.to_path_buf(),
    })?;
    let english_idx = position(ENGLISH_NAME_COLUMN);

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| VocabularyError::csv(origin, &e))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let name = record.get(name_idx).unwrap_or_default();
        let english_name = english_idx
            .and_then(|idx| record.get(idx))
            .filter(|value| !value.is_empty());
        pairs.push(NamePair::new(name, english_name));
    }
    Ok(pairs)
}

/// Loads name pairs from a CSV file.
pub fn load_name_list(path: &Path) -> Result<Vec<NamePair>> {
    let file = std::fs::File::open(path).map_err(|e| VocabularyError::io(path, e))?;
    read_name_list(file, path)
}

/// Builds the bundled vocabulary for `kind`.
pub fn bundled_vocabulary(kind: VocabularyKind) -> Result<Vocabulary> {
    let pairs = read_name_list(bundled_source(kind).as_bytes(), &bundled_path(kind))?;
    Vocabulary::build(kind, pairs)
}

/// Builds the vocabulary for `kind` from `<dir>/<kind>.csv`.
pub fn load_vocabulary(dir: &Path, kind: VocabularyKind) -> Result<Vocabulary> {
    let path = dir.join(format!("{}.csv", kind.file_stem()));
    tracing::debug!(vocabulary = %kind, path = %path.display(), "loading name list");
    Vocabulary::build(kind, load_name_list(&path)?)
}

/// Builds all vocabularies from `dir`, or from the bundled lists when `None`.
pub fn load_vocabularies(dir: Option<&Path>) -> Result<Vocabularies> {
    let load = |kind| match dir {
        Some(dir) => load_vocabulary(dir, kind),
        None => bundled_vocabulary(kind),
    };
    Ok(Vocabularies {
        materials: load(VocabularyKind::Material)?,
        hosts: load(VocabularyKind::Host)?,
    })
}

/// Builds all vocabularies, honouring [`VOCABULARY_ENV_VAR`].
pub fn load_default_vocabularies() -> Result<Vocabularies> {
    load_vocabularies(vocabulary_dir_from_env().as_deref())
}
