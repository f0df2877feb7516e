//! Syllable extraction over dictionary pronunciations.
//!
//! A syllable runs from one vowel onset up to the next; consonants before
//! the first vowel belong to the first syllable (DOG → [[D, AO1, G]]).
//! Glides mapped to short vowels never start a syllable.

use crate::context::PhoneticContext;
use crate::phone::PhoneUnit;
use crate::QueryError;

pub type Syllable = Vec<PhoneUnit>;

/// Split phones into syllables at each vowel onset.
pub fn extract_syllables(phones: impl IntoIterator<Item = PhoneUnit>) -> Vec<Syllable> {
    let mut syllables = Vec::new();
    let mut syllable = Syllable::new();
    let mut seen_vowel = false;
    for phone in phones {
        if phone.is_vowel() {
            if seen_vowel && !syllable.is_empty() {
                syllables.push(std::mem::take(&mut syllable));
            }
            seen_vowel = true;
        }
        syllable.push(phone);
    }
    if !syllable.is_empty() {
        syllables.push(syllable);
    }
    syllables
}

/// Drop consonants ahead of the first vowel. A syllable without a vowel is
/// left untouched.
pub fn strip_leading_consonants(syllable: &mut Syllable) {
    if let Some(i) = syllable.iter().position(PhoneUnit::is_vowel) {
        syllable.drain(..i);
    }
}

impl PhoneticContext {
    /// Map a dictionary label to a query unit. Configured glides become an
    /// equivalence class of the glide and its vowel, both short vowels.
    pub fn phone_mapper(&self, label: &str) -> Result<PhoneUnit, QueryError> {
        let taxonomy = self.taxonomy();
        if let Some(target) = self.settings().phones.glide_target(label) {
            return Ok(taxonomy.meta_short_vowel(label, &[target])?.into());
        }
        Ok(taxonomy.phone(label)?.into())
    }

    pub fn get_phones(&self, word: &str) -> Result<Vec<PhoneUnit>, QueryError> {
        let labels = self
            .lexicon()
            .pronunciations
            .get(word)
            .filter(|phones| !phones.is_empty())
            .ok_or_else(|| QueryError::UnknownPronunciation(word.to_string()))?;
        labels.iter().map(|l| self.phone_mapper(l)).collect()
    }

    /// Whether the syllable's vowel carries a stress marker.
    pub fn is_stressed(&self, syllable: &[PhoneUnit]) -> bool {
        syllable
            .iter()
            .find(|unit| unit.is_vowel())
            .and_then(|vowel| vowel.base().stress())
            .is_some_and(|c| self.settings().phones.is_stress_marker(c))
    }

    /// The last stressed syllable plus any unstressed syllable after it.
    pub fn get_last_stressed(&self, mut syllables: Vec<Syllable>) -> Vec<Syllable> {
        let len = syllables.len();
        if len <= 1 {
            return syllables;
        }
        let keep = if self.is_stressed(&syllables[len - 1]) {
            1
        } else {
            2
        };
        syllables.split_off(len - keep)
    }

    /// Syllables used as a rhyme query for `word`: the last stressed
    /// syllable group when `num_syllables` is `None`, otherwise the last
    /// `n` syllables (all of them for `Some(0)` or an `n` past the start).
    /// Leading consonants of the first selected syllable are removed.
    pub fn get_last_syllables(
        &self,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<Vec<Syllable>, QueryError> {
        let syllables = extract_syllables(self.get_phones(word)?);
        let mut selected = match num_syllables {
            None => self.get_last_stressed(syllables),
            Some(0) => syllables,
            Some(n) => {
                let mut syllables = syllables;
                let start = syllables.len().saturating_sub(n);
                syllables.split_off(start)
            }
        };
        if let Some(first) = selected.first_mut() {
            strip_leading_consonants(first);
        }
        Ok(selected)
    }

    pub fn count_syllables(&self, word: &str) -> Result<usize, QueryError> {
        Ok(extract_syllables(self.get_phones(word)?).len())
    }
}
