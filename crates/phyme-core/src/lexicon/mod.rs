//! Lexicon tables consumed by the rhyme engine.
//!
//! `PronunciationTable` maps words to phone sequences, `PhoneClasses` maps
//! phones to articulation families. `Lexicon` bundles both and can be stored
//! as a binary snapshot (PHYX).

mod classes;
mod lexicon_io;
mod pronunciation;

pub use classes::{PhoneClasses, CMU_PHONES, VOWEL_FAMILY};
pub use pronunciation::PronunciationTable;

use std::io;

use serde::{Deserialize, Serialize};

/// Error type for lexicon text parsing, JSON tables and binary snapshots.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected PHYX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Pronunciations plus phone classification, loaded together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    pub pronunciations: PronunciationTable,
    pub classes: PhoneClasses,
}

impl Lexicon {
    pub fn new(pronunciations: PronunciationTable, classes: PhoneClasses) -> Self {
        Self {
            pronunciations,
            classes,
        }
    }

    /// Returns (word_count, phone_count, family_count).
    pub fn stats(&self) -> (usize, usize, usize) {
        (
            self.pronunciations.len(),
            self.classes.phones().count(),
            self.classes.families().count(),
        )
    }
}
