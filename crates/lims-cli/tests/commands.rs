//! Integration tests for the command layer.

use std::fs;

use tempfile::TempDir;

use lims_cli::commands::{
    load_vocabularies, records_to_json, run_check_vocabulary, run_ingest, run_vocabulary,
};
use lims_cli::logging::{LogConfig, LogFormat};
use lims_cli::summary::{records_table, row_error_table, vocabulary_table};
use lims_ingest::{IngestOptions, MapOptions, RowErrorPolicy};
use lims_model::VocabularyKind;

const EXPORT: &str = "\
Prøve id;Internt nr.;Sags ID;Materiale;Dyreart;Modtagelsestidspunkt;Udtagelsesdato
12.1;V000012345;SAG-01234-890AKM;;Okse;01/02/2023 10.30;
4;V000000004;2023-00077;Serum;Svin;02/02/2023 09.15;30/01/2023
5;V000000005;2023-00078;Serum;Drage;02/02/2023 09.20;
";

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("export.csv"), EXPORT).unwrap();
    dir
}

fn semicolon() -> IngestOptions {
    IngestOptions::default().with_delimiter(b';')
}

#[test]
fn ingest_aborts_on_first_bad_row_by_default() {
    let dir = workspace();
    let vocabularies = load_vocabularies(None).unwrap();
    let err = run_ingest(
        &dir.path().join("export.csv"),
        &vocabularies,
        &semicolon(),
        &MapOptions::default(),
    )
    .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("row 2, column 'Dyreart'"), "{message}");
    assert!(message.contains("unknown host category"), "{message}");
}

#[test]
fn keep_going_reports_rows_and_renders_tables() {
    let dir = workspace();
    let vocabularies = load_vocabularies(None).unwrap();
    let map = MapOptions::default().with_policy(RowErrorPolicy::Collect);
    let mapped = run_ingest(
        &dir.path().join("export.csv"),
        &vocabularies,
        &semicolon(),
        &map,
    )
    .unwrap();

    assert_eq!(mapped.records.len(), 2);
    assert_eq!(mapped.errors.len(), 1);

    let records = records_table(&mapped.records).to_string();
    assert!(records.contains("SAG-01234-890AKM"));
    assert!(records.contains("V000000004"));
    assert!(records.contains("2023-01-30"));
    let errors = row_error_table(&mapped.errors).to_string();
    assert!(errors.contains("Drage"));
}

#[test]
fn records_serialize_with_canonical_identifiers() {
    let dir = workspace();
    let vocabularies = load_vocabularies(None).unwrap();
    let map = MapOptions::default().with_policy(RowErrorPolicy::Collect);
    let mapped = run_ingest(
        &dir.path().join("export.csv"),
        &vocabularies,
        &semicolon(),
        &map,
    )
    .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&records_to_json(&mapped.records).unwrap()).unwrap();
    assert_eq!(json[0]["sample_number"], "12.1");
    assert_eq!(json[0]["internal_number"], "V000012345");
    assert_eq!(json[0]["case_number"], "SAG-01234-890AKM");
    assert_eq!(json[1]["sample_number"], "4");
}

#[test]
fn vocabulary_directory_replaces_bundled_lists() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("materials.csv"),
        "Navn,Engelsk navn\nKnogle,Bone\n",
    )
    .unwrap();
    fs::write(dir.path().join("hosts.csv"), "Navn\nElg\n").unwrap();

    let vocabularies = load_vocabularies(Some(dir.path())).unwrap();
    let materials = run_vocabulary(VocabularyKind::Material, &vocabularies);
    assert_eq!(materials.len(), 1);
    let rendered = vocabulary_table(materials).to_string();
    assert!(rendered.contains("Knogle"));
    assert!(rendered.contains("Bone"));
}

#[test]
fn check_vocabulary_reports_conflicts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hosts.csv");
    fs::write(&path, "Navn,Engelsk navn\nOkse,Cattle\nOkse,Bovine\n").unwrap();

    let err = run_check_vocabulary(&path, VocabularyKind::Host).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("duplicate vocabulary symbol 'Okse'"), "{message}");
}

#[test]
fn check_vocabulary_accepts_harmless_repeats() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("materials.csv");
    fs::write(&path, "Navn,Engelsk navn\nAndet,\nAndet,Other\nBlod,Blood\n").unwrap();

    let vocabulary = run_check_vocabulary(&path, VocabularyKind::Material).unwrap();
    assert_eq!(vocabulary.len(), 2);
    assert_eq!(
        vocabulary.get("Andet").and_then(|e| e.english_name.as_deref()),
        Some("Other")
    );
}

#[test]
fn log_config_builders() {
    let config = LogConfig::default()
        .with_format(LogFormat::Json)
        .with_log_file(Some(std::path::PathBuf::from("lims.log")));
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.use_env_filter);
}
