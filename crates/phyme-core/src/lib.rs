//! Phonetic core of the phyme rhyming engine: phones and their taxonomy,
//! permutation rules, the reversed-pronunciation rhyme trie and syllable
//! extraction over a loaded pronunciation lexicon.

pub mod context;
pub mod lexicon;
pub mod permutation;
pub mod phone;
pub mod settings;
pub mod syllable;
pub mod taxonomy;
#[cfg(any(test, feature = "test-util"))]
#[doc(hidden)]
pub mod testutil;
pub mod trie;

pub use context::PhoneticContext;
pub use permutation::Permutation;
pub use phone::{MetaPhone, PermutedPhone, Phone, PhoneKind, PhoneUnit, QueryPhone};
pub use syllable::Syllable;
pub use taxonomy::PhoneTaxonomy;
pub use trie::{NodeId, NodeRef, RhymeTrie};

/// Query-time failures surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("word {0:?} is not in the loaded pronunciation dictionary")]
    UnknownPronunciation(String),

    /// The classification tables do not cover a phone that appears in the
    /// pronunciations. Data-consistency fault; never defaulted.
    #[error("phone {0:?} is missing from the phone classification tables")]
    MissingTaxonomyEntry(String),
}
