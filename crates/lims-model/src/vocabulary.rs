//! Controlled-vocabulary entries and the category types built from them.
//!
//! An entry pairs a symbolic key with the native (Danish) name used by the
//! LIMS and, when the source provides one, an English name. Entries are
//! produced by the vocabulary builder in `lims-standards`; this module only
//! carries the values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of a controlled vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Normalised key derived from `name` (letters and digits joined by `_`).
    pub symbol: String,

    /// Name as written in the LIMS export.
    pub name: String,

    /// English name, when the source list carries one.
    pub english_name: Option<String>,
}

impl VocabularyEntry {
    /// English name when present, otherwise the native name.
    pub fn display_name(&self) -> &str {
        self.english_name.as_deref().unwrap_or(&self.name)
    }
}

/// The controlled vocabularies the row mapper resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyKind {
    Material,
    Host,
}

impl VocabularyKind {
    pub const ALL: [Self; 2] = [Self::Material, Self::Host];

    /// File stem of the name list backing this vocabulary.
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Material => "materials",
            Self::Host => "hosts",
        }
    }
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Material => "material",
            Self::Host => "host",
        })
    }
}

macro_rules! category {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(VocabularyEntry);

        impl $name {
            pub fn new(entry: VocabularyEntry) -> Self {
                Self(entry)
            }

            pub fn entry(&self) -> &VocabularyEntry {
                &self.0
            }

            pub fn symbol(&self) -> &str {
                &self.0.symbol
            }

            pub fn name(&self) -> &str {
                &self.0.name
            }

            pub fn english_name(&self) -> Option<&str> {
                self.0.english_name.as_deref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0.name)
            }
        }
    };
}

category!(
    /// Sample material category (blood, serum, tissue, ...).
    Material
);

category!(
    /// Host animal category the sample was taken from.
    Host
);
