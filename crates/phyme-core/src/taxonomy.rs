//! Phone taxonomy: vowel/consonant, voicing and articulation family for
//! every phone in the loaded classification tables. Built once and read-only
//! afterwards.

use std::collections::HashMap;

use tracing::error;

use crate::lexicon::{PhoneClasses, VOWEL_FAMILY};
use crate::phone::{MetaPhone, Phone, PhoneKind};
use crate::settings::PhoneSettings;
use crate::QueryError;

#[derive(Debug, Default)]
struct VoicedSplit {
    voiced: Vec<Phone>,
    unvoiced: Vec<Phone>,
}

impl VoicedSplit {
    fn get(&self, voiced: bool) -> &[Phone] {
        if voiced {
            &self.voiced
        } else {
            &self.unvoiced
        }
    }
}

#[derive(Debug)]
pub struct PhoneTaxonomy {
    phones: HashMap<String, Phone>,
    families: HashMap<String, Vec<Phone>>,
    voiced_families: HashMap<String, VoicedSplit>,
    vowels: Vec<Phone>,
    consonants: Vec<Phone>,
}

pub(crate) fn missing(label: &str) -> QueryError {
    error!(phone = label, "phone missing from taxonomy");
    QueryError::MissingTaxonomyEntry(label.to_string())
}

impl PhoneTaxonomy {
    pub fn new(classes: &PhoneClasses, settings: &PhoneSettings) -> Self {
        let mut phones = HashMap::new();
        let mut vowels = Vec::new();
        let mut consonants = Vec::new();

        for (label, family) in classes.phones() {
            let is_vowel = family == VOWEL_FAMILY;
            let kind = if is_vowel {
                PhoneKind::Vowel
            } else {
                PhoneKind::Consonant
            };
            let voiced = is_vowel || settings.voiced_consonants.iter().any(|v| v == label);
            let phone = Phone::new(label, kind, voiced, Some(family));
            if is_vowel {
                vowels.push(phone.clone());
            } else {
                consonants.push(phone.clone());
            }
            phones.insert(label.to_string(), phone);
        }

        let mut families = HashMap::new();
        let mut voiced_families = HashMap::new();
        for (family, members) in classes.families() {
            let members: Vec<Phone> = members
                .iter()
                .filter_map(|label| phones.get(label.as_str()).cloned())
                .collect();
            let mut split = VoicedSplit::default();
            for phone in &members {
                if phone.is_voiced() {
                    split.voiced.push(phone.clone());
                } else {
                    split.unvoiced.push(phone.clone());
                }
            }
            voiced_families.insert(family.to_string(), split);
            families.insert(family.to_string(), members);
        }

        Self {
            phones,
            families,
            voiced_families,
            vowels,
            consonants,
        }
    }

    pub fn get(&self, label: &str) -> Option<&Phone> {
        self.phones.get(label)
    }

    /// Classified phone for `label`.
    pub fn phone(&self, label: &str) -> Result<Phone, QueryError> {
        self.get(label).cloned().ok_or_else(|| missing(label))
    }

    /// Classified phone for `label`, marked as a short vowel.
    pub fn short_vowel(&self, label: &str) -> Result<Phone, QueryError> {
        self.phone(label).map(Phone::into_short_vowel)
    }

    /// Equivalence class of `base` and `replacements`, every member a short
    /// vowel.
    pub fn meta_short_vowel(
        &self,
        base: &str,
        replacements: &[&str],
    ) -> Result<MetaPhone, QueryError> {
        let others = replacements
            .iter()
            .map(|label| self.short_vowel(label))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MetaPhone::short_vowel(self.short_vowel(base)?, others))
    }

    pub fn is_vowel(&self, label: &str) -> bool {
        self.get(label).is_some_and(Phone::is_vowel)
    }

    pub fn is_consonant(&self, label: &str) -> bool {
        !self.is_vowel(label)
    }

    pub fn is_voiced(&self, label: &str) -> bool {
        self.get(label).is_some_and(Phone::is_voiced)
    }

    /// Every phone in `phone`'s family, any voicing.
    pub fn family_members(&self, phone: &Phone) -> Result<&[Phone], QueryError> {
        phone
            .family()
            .and_then(|f| self.families.get(f))
            .map(Vec::as_slice)
            .ok_or_else(|| missing(phone.label()))
    }

    /// Phones in `phone`'s family sharing its voicing.
    pub fn family_voiced_members(&self, phone: &Phone) -> Result<&[Phone], QueryError> {
        phone
            .family()
            .and_then(|f| self.voiced_families.get(f))
            .map(|split| split.get(phone.is_voiced()))
            .ok_or_else(|| missing(phone.label()))
    }

    /// All vowel labels, stress variants included.
    pub fn vowels(&self) -> &[Phone] {
        &self.vowels
    }

    pub fn consonants(&self) -> &[Phone] {
        &self.consonants
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}
