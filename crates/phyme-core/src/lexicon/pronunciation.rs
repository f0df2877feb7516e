use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::LexiconError;

/// word → phone labels. Words are stored upper-cased; lookups are
/// case-insensitive. Alternate pronunciations keep their `(n)` suffix
/// (`READ(1)`), so each one is an independent entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PronunciationTable {
    entries: HashMap<String, Vec<String>>,
}

impl PronunciationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str, phones: Vec<String>) {
        self.entries.insert(word.to_uppercase(), phones);
    }

    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(&word.to_uppercase()).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(word, phones)| (word.as_str(), phones.as_slice()))
    }

    /// Parse CMU pronouncing dictionary text: `WORD  PH1 PH2 ...` per line,
    /// `;;;` comment lines and blank lines skipped.
    pub fn parse_cmudict(text: &str) -> Result<Self, LexiconError> {
        let mut table = Self::new();
        let mut skipped = 0u64;

        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with(";;;") {
                skipped += 1;
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                skipped += 1;
                continue;
            };
            let phones: Vec<String> = fields.map(str::to_string).collect();
            if phones.is_empty() {
                return Err(LexiconError::Parse(format!(
                    "line {}: no phones for {word}",
                    lineno + 1
                )));
            }
            table.insert(word, phones);
        }

        tracing::debug!(words = table.len(), skipped, "parsed pronunciation table");
        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let entries: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (word, phones) in entries {
            if phones.is_empty() {
                return Err(LexiconError::Parse(format!("no phones for {word}")));
            }
            table.insert(&word, phones);
        }
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String, LexiconError> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}
