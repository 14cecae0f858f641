//! Deduplicating vocabulary builder.
//!
//! The LIMS name lists repeat entries: the same native name can appear with
//! and without an English translation. Repeats that agree are merged; two
//! pairs that derive the same symbol but disagree are rejected.
//!
//! ## Merge rules for pairs sharing a symbol
//!
//! | native names | English names             | result                       |
//! |--------------|---------------------------|------------------------------|
//! | identical    | identical                 | merged                       |
//! | identical    | one absent                | merged, English name kept    |
//! | identical    | both present, different   | `DuplicateSymbol`            |
//! | different    | any                       | `DuplicateSymbol`            |

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use lims_model::{VocabularyEntry, VocabularyKind};

use crate::error::{Result, VocabularyError};
use crate::symbol::derive_symbol;

/// A (native name, optional English name) pair from a source name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub name: String,
    pub english_name: Option<String>,
}

impl NamePair {
    pub fn new(name: impl Into<String>, english_name: Option<&str>) -> Self {
        Self {
            name: name.into(),
            english_name: english_name.map(str::to_string),
        }
    }

    fn is_compatible(&self, other: &Self) -> bool {
        self.name == other.name
            && match (&self.english_name, &other.english_name) {
                (Some(left), Some(right)) => left == right,
                _ => true,
            }
    }
}

impl fmt::Display for NamePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.english_name {
            Some(english) => write!(f, "'{}' ({english})", self.name),
            None => write!(f, "'{}'", self.name),
        }
    }
}

/// Builds the sorted, deduplicated entry list for a set of name pairs.
///
/// Input order does not matter; the output is ordered by symbol.
pub fn build_entries<I>(pairs: I) -> Result<Vec<VocabularyEntry>>
where
    I: IntoIterator<Item = NamePair>,
{
    let mut by_symbol: BTreeMap<String, NamePair> = BTreeMap::new();
    for pair in pairs {
        let symbol = derive_symbol(&pair.name);
        if symbol.is_empty() {
            return Err(VocabularyError::EmptySymbol { name: pair.name });
        }
        match by_symbol.entry(symbol) {
            Entry::Vacant(slot) => {
                slot.insert(pair);
            }
            Entry::Occupied(mut slot) => {
                if !slot.get().is_compatible(&pair) {
                    let (symbol, existing) = slot.remove_entry();
                    return Err(VocabularyError::DuplicateSymbol {
                        symbol,
                        existing,
                        incoming: pair,
                    });
                }
                tracing::debug!(
                    symbol = %slot.key(),
                    name = %pair.name,
                    "merged repeated vocabulary name"
                );
                if slot.get().english_name.is_none() {
                    slot.insert(pair);
                }
            }
        }
    }
    Ok(by_symbol
        .into_iter()
        .map(|(symbol, pair)| VocabularyEntry {
            symbol,
            name: pair.name,
            english_name: pair.english_name,
        })
        .collect())
}

/// A built controlled vocabulary with lookup by symbol and by native name.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    kind: VocabularyKind,
    entries: Vec<VocabularyEntry>,
    by_name: BTreeMap<String, usize>,
}

impl Vocabulary {
    /// Builds a vocabulary from source name pairs.
    pub fn build<I>(kind: VocabularyKind, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = NamePair>,
    {
        let entries = build_entries(pairs)?;
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.name.clone(), idx))
            .collect();
        tracing::debug!(vocabulary = %kind, entries = entries.len(), "built vocabulary");
        Ok(Self {
            kind,
            entries,
            by_name,
        })
    }

    pub fn kind(&self) -> VocabularyKind {
        self.kind
    }

    /// Entries ordered by symbol.
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its symbolic key.
    pub fn get(&self, symbol: &str) -> Option<&VocabularyEntry> {
        self.entries
            .binary_search_by(|entry| entry.symbol.as_str().cmp(symbol))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Looks up an entry by its exact native name.
    pub fn find_by_name(&self, name: &str) -> Option<&VocabularyEntry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }
}

/// The vocabularies the row mapper needs, one per [`VocabularyKind`].
#[derive(Debug, Clone)]
pub struct Vocabularies {
    pub materials: Vocabulary,
    pub hosts: Vocabulary,
}

impl Vocabularies {
    pub fn get(&self, kind: VocabularyKind) -> &Vocabulary {
        match kind {
            VocabularyKind::Material => &self.materials,
            VocabularyKind::Host => &self.hosts,
        }
    }
}
