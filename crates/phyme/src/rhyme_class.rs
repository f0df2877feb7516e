use std::fmt;
use std::str::FromStr;

use phyme_core::{Permutation, PhoneUnit, QueryPhone, Syllable};

/// The eight rhyme-matching modes. Each decides which phones of the query
/// get a [`Permutation`] and whether the query must end in a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RhymeClass {
    /// Same ending, phone for phone (DOG → COG).
    Perfect,
    /// Consonants swapped within their articulation family and voicing
    /// (DOG → FOB).
    Family,
    /// Consonants swapped within their articulation family (DOG → HAWK).
    Partner,
    /// Extra consonants allowed before each phone (DO → DUDE).
    Additive,
    /// Consonants may be dropped (DUDE → DO).
    Subtractive,
    /// Any vowel, same consonants (DOG → BEG).
    Consonant,
    /// Same vowels, consonants ignored (DOG → JAUNT).
    Assonance,
    /// Any consonant, same vowels (FACTOR → FASTER).
    Substitution,
}

impl RhymeClass {
    pub const ALL: [RhymeClass; 8] = [
        Self::Perfect,
        Self::Family,
        Self::Partner,
        Self::Additive,
        Self::Subtractive,
        Self::Consonant,
        Self::Assonance,
        Self::Substitution,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Family => "family",
            Self::Partner => "partner",
            Self::Additive => "additive",
            Self::Subtractive => "subtractive",
            Self::Consonant => "consonant",
            Self::Assonance => "assonance",
            Self::Substitution => "substitution",
        }
    }

    /// Classes that only make sense when the first selected syllable closes
    /// on a consonant. Other queries yield no rhymes.
    pub fn requires_consonant_ending(self) -> bool {
        matches!(
            self,
            Self::Family | Self::Partner | Self::Subtractive | Self::Substitution
        )
    }

    /// Whether `syllables` pass this class's guard.
    pub fn accepts(self, syllables: &[Syllable]) -> bool {
        !self.requires_consonant_ending()
            || syllables
                .first()
                .and_then(|first| first.last())
                .is_some_and(PhoneUnit::is_consonant)
    }

    /// Tag the flattened query phones, in word order.
    pub fn decorate(self, phones: Vec<PhoneUnit>) -> Vec<QueryPhone> {
        match self {
            Self::Perfect => phones.into_iter().map(QueryPhone::Plain).collect(),
            Self::Family => Permutation::Family.decorate(phones, PhoneUnit::is_consonant),
            Self::Partner => Permutation::Partner.decorate(phones, PhoneUnit::is_consonant),
            Self::Additive => Permutation::Additive.decorate(phones, |_| true),
            Self::Subtractive => {
                Permutation::Subtractive.decorate(phones, PhoneUnit::is_consonant)
            }
            Self::Consonant => Permutation::Consonant.decorate(phones, PhoneUnit::is_vowel),
            Self::Assonance => Permutation::Additive.decorate(
                phones.into_iter().filter(PhoneUnit::is_vowel),
                |_| true,
            ),
            Self::Substitution => {
                Permutation::Substitution.decorate(phones, PhoneUnit::is_consonant)
            }
        }
    }
}

impl fmt::Display for RhymeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rhyme class: {0:?}")]
pub struct UnknownRhymeClass(pub String);

impl FromStr for RhymeClass {
    type Err = UnknownRhymeClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRhymeClass(s.to_string()))
    }
}
