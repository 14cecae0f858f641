use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use lims_ingest::{IngestOptions, MapOptions, MappedRecords, ingest_file};
use lims_model::{Record, VocabularyKind};
use lims_standards::{Vocabularies, Vocabulary, load_name_list, vocabulary_dir_from_env};

/// Vocabulary directory: the explicit flag wins over the environment.
pub fn resolve_vocabulary_dir(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(vocabulary_dir_from_env)
}

pub fn load_vocabularies(flag: Option<&Path>) -> Result<Vocabularies> {
    let dir = resolve_vocabulary_dir(flag);
    match &dir {
        Some(dir) => debug!(dir = %dir.display(), "using vocabulary directory"),
        None => debug!("using bundled vocabularies"),
    }
    lims_standards::load_vocabularies(dir.as_deref()).context("load vocabularies")
}

/// Converts a `--delimiter` argument to the byte the CSV reader expects.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{delimiter}'");
    }
    Ok(delimiter as u8)
}

pub fn run_ingest(
    path: &Path,
    vocabularies: &Vocabularies,
    ingest: &IngestOptions,
    map: &MapOptions,
) -> Result<MappedRecords> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let mapped = ingest_file(path, vocabularies, ingest, map)
        .with_context(|| format!("ingest {}", path.display()))?;
    info!(
        records = mapped.records.len(),
        failed = mapped.errors.len(),
        "ingest finished"
    );
    Ok(mapped)
}

pub fn run_vocabulary(kind: VocabularyKind, vocabularies: &Vocabularies) -> &Vocabulary {
    vocabularies.get(kind)
}

/// Builds a vocabulary from a single name list, surfacing conflicting repeats.
pub fn run_check_vocabulary(path: &Path, kind: VocabularyKind) -> Result<Vocabulary> {
    let pairs =
        load_name_list(path).with_context(|| format!("read name list {}", path.display()))?;
    let read = pairs.len();
    let vocabulary = Vocabulary::build(kind, pairs)
        .with_context(|| format!("build {kind} vocabulary from {}", path.display()))?;
    info!(
        vocabulary = %kind,
        names = read,
        entries = vocabulary.len(),
        "name list is consistent"
    );
    Ok(vocabulary)
}

pub fn records_to_json(records: &[Record]) -> Result<String> {
    serde_json::to_string_pretty(records).context("serialize records")
}
