//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use lims_model::VocabularyKind;

#[derive(Parser)]
#[command(
    name = "lims",
    version,
    about = "Ingest LIMS sample exports into typed records",
    long_about = "Read LIMS sample exports, parse their identifiers, resolve material and \
                  host categories against controlled vocabularies, and report the result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory holding materials.csv and hosts.csv name lists.
    ///
    /// Falls back to LIMS_VOCABULARY_DIR, then to the bundled lists.
    #[arg(long = "vocabulary-dir", value_name = "DIR", global = true)]
    pub vocabulary_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map a LIMS sample export to records.
    Ingest(IngestArgs),

    /// List the entries of a controlled vocabulary.
    Vocabulary(VocabularyArgs),

    /// Build a vocabulary from a name list and report conflicts.
    CheckVocabulary(CheckVocabularyArgs),
}

#[derive(Parser)]
pub struct IngestArgs {
    /// CSV export to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter (single ASCII character).
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Map every row and report failing rows instead of stopping at the first.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// How to print the mapped records.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: RecordFormatArg,
}

#[derive(Parser)]
pub struct VocabularyArgs {
    #[arg(value_enum)]
    pub kind: VocabularyKindArg,
}

#[derive(Parser)]
pub struct CheckVocabularyArgs {
    /// Name list CSV with a "Navn" and optional "Engelsk navn" column.
    #[arg(value_name = "NAME_LIST")]
    pub file: PathBuf,

    /// Vocabulary the list belongs to.
    #[arg(long = "kind", value_enum, default_value = "materials")]
    pub kind: VocabularyKindArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VocabularyKindArg {
    Materials,
    Hosts,
}

impl From<VocabularyKindArg> for VocabularyKind {
    fn from(arg: VocabularyKindArg) -> Self {
        match arg {
            VocabularyKindArg::Materials => Self::Material,
            VocabularyKindArg::Hosts => Self::Host,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
