use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::LexiconError;

pub const VOWEL_FAMILY: &str = "vowel";

/// The 39 ARPAbet phones of the CMU pronouncing dictionary and their
/// manner-of-articulation class (`cmudict-0.7b.phones`).
pub const CMU_PHONES: &[(&str, &str)] = &[
    ("AA", "vowel"),
    ("AE", "vowel"),
    ("AH", "vowel"),
    ("AO", "vowel"),
    ("AW", "vowel"),
    ("AY", "vowel"),
    ("B", "stop"),
    ("CH", "affricate"),
    ("D", "stop"),
    ("DH", "fricative"),
    ("EH", "vowel"),
    ("ER", "vowel"),
    ("EY", "vowel"),
    ("F", "fricative"),
    ("G", "stop"),
    ("HH", "aspirate"),
    ("IH", "vowel"),
    ("IY", "vowel"),
    ("JH", "affricate"),
    ("K", "stop"),
    ("L", "liquid"),
    ("M", "nasal"),
    ("N", "nasal"),
    ("NG", "nasal"),
    ("OW", "vowel"),
    ("OY", "vowel"),
    ("P", "stop"),
    ("R", "liquid"),
    ("S", "fricative"),
    ("SH", "fricative"),
    ("T", "stop"),
    ("TH", "fricative"),
    ("UH", "vowel"),
    ("UW", "vowel"),
    ("V", "fricative"),
    ("W", "semivowel"),
    ("Y", "semivowel"),
    ("Z", "fricative"),
    ("ZH", "fricative"),
];

/// phone → family and family → phones.
///
/// Every vowel is also registered with the stress suffixes `0`, `1` and `2`
/// (`AY` → `AY0`, `AY1`, `AY2`) since dictionary pronunciations always carry
/// a stress digit on vowels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhoneClasses {
    phone_family: BTreeMap<String, String>,
    family_phones: BTreeMap<String, BTreeSet<String>>,
}

impl PhoneClasses {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard CMU phone set with `merges` applied.
    pub fn cmu_default(merges: &BTreeMap<String, String>) -> Self {
        let mut classes = Self::new();
        for &(phone, family) in CMU_PHONES {
            classes.insert(phone, family, merges);
        }
        classes
    }

    /// Register `phone` under `family`, after renaming the family through
    /// `merges`.
    pub fn insert(&mut self, phone: &str, family: &str, merges: &BTreeMap<String, String>) {
        let family = merges.get(family).map(String::as_str).unwrap_or(family);
        let members = self.family_phones.entry(family.to_string()).or_default();
        if family == VOWEL_FAMILY {
            for stress in 0..3 {
                let stressed = format!("{phone}{stress}");
                self.phone_family
                    .insert(stressed.clone(), family.to_string());
                members.insert(stressed);
            }
        }
        self.phone_family
            .insert(phone.to_string(), family.to_string());
        members.insert(phone.to_string());
    }

    /// Parse the two-column `PHONE<ws>family` format.
    pub fn parse_phones(
        text: &str,
        merges: &BTreeMap<String, String>,
    ) -> Result<Self, LexiconError> {
        let mut classes = Self::new();
        for (lineno, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [phone, family] = fields.as_slice() else {
                return Err(LexiconError::Parse(format!(
                    "line {}: expected `PHONE family`, got {line:?}",
                    lineno + 1
                )));
            };
            classes.insert(phone, family, merges);
        }
        Ok(classes)
    }

    pub fn family_of(&self, phone: &str) -> Option<&str> {
        self.phone_family.get(phone).map(String::as_str)
    }

    pub fn members(&self, family: &str) -> Option<&BTreeSet<String>> {
        self.family_phones.get(family)
    }

    /// All `(phone, family)` pairs, stress variants included.
    pub fn phones(&self) -> impl Iterator<Item = (&str, &str)> {
        self.phone_family
            .iter()
            .map(|(p, f)| (p.as_str(), f.as_str()))
    }

    pub fn families(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.family_phones.iter().map(|(f, p)| (f.as_str(), p))
    }

    pub fn is_empty(&self) -> bool {
        self.phone_family.is_empty()
    }

    /// Load from the JSON forms of both tables (phone → family,
    /// family → [phones]).
    pub fn from_json(phone_family: &str, family_phones: &str) -> Result<Self, LexiconError> {
        Ok(Self {
            phone_family: serde_json::from_str(phone_family)?,
            family_phones: serde_json::from_str(family_phones)?,
        })
    }

    /// Returns (phone_family_json, family_phones_json).
    pub fn to_json(&self) -> Result<(String, String), LexiconError> {
        Ok((
            serde_json::to_string(&self.phone_family)?,
            serde_json::to_string(&self.family_phones)?,
        ))
    }
}
