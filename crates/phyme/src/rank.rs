//! Ordering of rhyme results.
//!
//! [`CooccurrenceRanker`] ranks candidates by how often they were paired with
//! the query word, then by overall frequency, then lexically. Its three tables
//! share an opaque string key per word:
//!
//! - `word_keys`: word → key
//! - `keyed_counts`: key → frequency rank (lower is more frequent)
//! - `keyed_pairs`: key → keys of paired words, least to most significant

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RankerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Orders the words of one result group for a query word.
pub trait WordRanker: Send + Sync {
    fn sort_words(&self, context: &str, words: Vec<String>) -> Vec<String>;
}

/// Drop a trailing alternate-pronunciation marker: `read(1)` → `read`.
pub fn strip_pronunciation_marker(word: &str) -> &str {
    let Some((stem, marker)) = word
        .strip_suffix(')')
        .and_then(|rest| rest.rsplit_once('('))
    else {
        return word;
    };
    if marker.is_empty() || !marker.bytes().all(|b| b.is_ascii_digit()) {
        return word;
    }
    stem
}

fn lexical_key(word: &str) -> String {
    word.replace('\'', "")
}

/// Lexical order ignoring apostrophes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalRanker;

impl WordRanker for LexicalRanker {
    fn sort_words(&self, _context: &str, mut words: Vec<String>) -> Vec<String> {
        words.sort_by_cached_key(|w| lexical_key(w));
        words
    }
}

/// Tiers compare in declaration order: every paired word sorts before every
/// counted word, which sorts before every unknown word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Pair(usize),
    Count(u64),
    Lexical(String),
}

#[derive(Debug, Clone, Default)]
pub struct CooccurrenceRanker {
    word_keys: HashMap<String, String>,
    key_words: HashMap<String, String>,
    keyed_counts: HashMap<String, u64>,
    keyed_pairs: HashMap<String, Vec<String>>,
}

impl CooccurrenceRanker {
    pub fn new(
        word_keys: HashMap<String, String>,
        keyed_counts: HashMap<String, u64>,
        keyed_pairs: HashMap<String, Vec<String>>,
    ) -> Self {
        let key_words = word_keys
            .iter()
            .map(|(word, key)| (key.clone(), word.clone()))
            .collect();
        Self {
            word_keys,
            key_words,
            keyed_counts,
            keyed_pairs,
        }
    }

    pub fn from_json(
        word_keys: &str,
        keyed_counts: &str,
        keyed_pairs: &str,
    ) -> Result<Self, RankerError> {
        Ok(Self::new(
            serde_json::from_str(word_keys)?,
            serde_json::from_str(keyed_counts)?,
            serde_json::from_str(keyed_pairs)?,
        ))
    }

    /// Load `word_keys.json`, `keyed_counts.json` and `keyed_pairs.json`
    /// from `dir`.
    pub fn load(dir: &Path) -> Result<Self, RankerError> {
        let read = |name: &str| fs::read_to_string(dir.join(name));
        let ranker = Self::from_json(
            &read("word_keys.json")?,
            &read("keyed_counts.json")?,
            &read("keyed_pairs.json")?,
        )?;
        debug!(
            words = ranker.word_keys.len(),
            counted = ranker.keyed_counts.len(),
            paired = ranker.keyed_pairs.len(),
            "loaded ranking tables"
        );
        Ok(ranker)
    }

    fn key(&self, word: &str) -> Option<&str> {
        self.word_keys
            .get(strip_pronunciation_marker(word))
            .map(String::as_str)
    }

    pub fn count_rank(&self, word: &str) -> Option<u64> {
        self.key(word)
            .and_then(|key| self.keyed_counts.get(key))
            .copied()
    }

    /// Words paired with `word`, mapped to their pair rank (0 is the most
    /// significant pair).
    pub fn paired_words(&self, word: &str) -> HashMap<&str, usize> {
        let Some(pairs) = self.key(word).and_then(|key| self.keyed_pairs.get(key)) else {
            return HashMap::new();
        };
        pairs
            .iter()
            .rev()
            .enumerate()
            .filter_map(|(rank, key)| self.key_words.get(key).map(|w| (w.as_str(), rank)))
            .collect()
    }

    fn sort_key(&self, word: &str, pairs: &HashMap<&str, usize>) -> SortKey {
        let bare = strip_pronunciation_marker(word);
        if let Some(&rank) = pairs.get(bare) {
            return SortKey::Pair(rank);
        }
        match self.count_rank(word) {
            Some(count) => SortKey::Count(count),
            None => SortKey::Lexical(lexical_key(word)),
        }
    }
}

impl WordRanker for CooccurrenceRanker {
    fn sort_words(&self, context: &str, mut words: Vec<String>) -> Vec<String> {
        let pairs = self.paired_words(context);
        words.sort_by_cached_key(|w| (self.sort_key(w, &pairs), lexical_key(w)));
        words
    }
}
