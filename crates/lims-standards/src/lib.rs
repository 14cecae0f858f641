//! Controlled vocabularies for LIMS exports.
//!
//! Name lists supplied by the LIMS are turned into deduplicated, sorted
//! vocabularies: each native name gets a symbolic key (see
//! [`derive_symbol`]), harmless repeats are merged, and conflicting repeats
//! fail with [`VocabularyError::DuplicateSymbol`].

#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod symbol;
pub mod vocabulary;

pub use crate::error::{Result, VocabularyError};
pub use crate::loader::{
    ENGLISH_NAME_COLUMN, NAME_COLUMN, VOCABULARY_ENV_VAR, bundled_vocabulary,
    load_default_vocabularies, load_name_list, load_vocabularies, load_vocabulary,
    read_name_list, vocabulary_dir_from_env,
};
pub use crate::symbol::{SYMBOL_SEPARATOR, derive_symbol, is_valid_symbol};
pub use crate::vocabulary::{NamePair, Vocabularies, Vocabulary, build_entries};
