use std::path::PathBuf;

use crate::vocabulary::NamePair;

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("duplicate vocabulary symbol '{symbol}': {existing} conflicts with {incoming}")]
    DuplicateSymbol {
        symbol: String,
        existing: NamePair,
        incoming: NamePair,
    },

    #[error("vocabulary name '{name}' contains no letters or digits")]
    EmptySymbol { name: String },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
}

impl VocabularyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VocabularyError>;
