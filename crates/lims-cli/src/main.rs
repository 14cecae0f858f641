//! `lims` command-line tool.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use lims_cli::commands::{
    delimiter_byte, load_vocabularies, records_to_json, run_check_vocabulary, run_ingest,
    run_vocabulary,
};
use lims_cli::logging::{LogConfig, LogFormat, init_logging};
use lims_cli::summary::{print_ingest_summary, print_vocabulary, vocabulary_table};
use lims_ingest::{IngestOptions, MapOptions, RowErrorPolicy};

mod cli;

use crate::cli::{Cli, Command, IngestArgs, LogFormatArg, LogLevelArg, RecordFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let vocabulary_dir = cli.vocabulary_dir.as_deref();
    match &cli.command {
        Command::Ingest(args) => {
            let vocabularies = load_vocabularies(vocabulary_dir)?;
            let (ingest, map) = ingest_options(args)?;
            let mapped = run_ingest(&args.file, &vocabularies, &ingest, &map)?;
            match args.format {
                RecordFormatArg::Table => print_ingest_summary(&mapped),
                RecordFormatArg::Json => {
                    println!("{}", records_to_json(&mapped.records)?);
                    for error in &mapped.errors {
                        eprintln!("- {error}");
                    }
                }
            }
            Ok(if mapped.errors.is_empty() { 0 } else { 1 })
        }
        Command::Vocabulary(args) => {
            let vocabularies = load_vocabularies(vocabulary_dir)?;
            print_vocabulary(run_vocabulary(args.kind.into(), &vocabularies));
            Ok(0)
        }
        Command::CheckVocabulary(args) => {
            let vocabulary = run_check_vocabulary(&args.file, args.kind.into())?;
            println!("{}", vocabulary_table(&vocabulary));
            println!("{} entries, no conflicts", vocabulary.len());
            Ok(0)
        }
    }
}

fn ingest_options(args: &IngestArgs) -> Result<(IngestOptions, MapOptions)> {
    let ingest = IngestOptions::default().with_delimiter(delimiter_byte(args.delimiter)?);
    let policy = if args.keep_going {
        RowErrorPolicy::Collect
    } else {
        RowErrorPolicy::Abort
    };
    Ok((ingest, MapOptions::default().with_policy(policy)))
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
