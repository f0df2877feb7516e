use std::fmt;

use crate::phone::{PermutedPhone, Phone, PhoneUnit, QueryPhone};
use crate::taxonomy::PhoneTaxonomy;
use crate::QueryError;

/// Rewrite rule applied to one query position during trie search.
///
/// `Additive` and `Subtractive` match their phone literally; their real
/// effect (inserting consonants before the phone, skipping the phone) is
/// applied by the trie walk itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permutation {
    Additive,
    Subtractive,
    /// Consonants of the same articulation family, any voicing.
    Partner,
    /// Consonants of the same articulation family and voicing.
    Family,
    /// Any vowel.
    Consonant,
    /// Any consonant.
    Substitution,
}

impl Permutation {
    pub const ALL: [Permutation; 6] = [
        Self::Additive,
        Self::Subtractive,
        Self::Partner,
        Self::Family,
        Self::Consonant,
        Self::Substitution,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Additive => "ADDITIVE",
            Self::Subtractive => "SUBTRACTIVE",
            Self::Partner => "PARTNER",
            Self::Family => "FAMILY",
            Self::Consonant => "CONSONANT",
            Self::Substitution => "SUBSTITUTION",
        }
    }

    /// Candidate phones to try as children at the current trie position.
    pub fn apply<'a>(
        self,
        unit: &'a PhoneUnit,
        taxonomy: &'a PhoneTaxonomy,
    ) -> Result<&'a [Phone], QueryError> {
        match self {
            Self::Additive | Self::Subtractive => Ok(unit.candidates()),
            Self::Partner => taxonomy.family_members(unit.base()),
            Self::Family => taxonomy.family_voiced_members(unit.base()),
            Self::Consonant => Ok(taxonomy.vowels()),
            Self::Substitution => Ok(taxonomy.consonants()),
        }
    }

    /// Tag every unit satisfying `test` with this permutation; the rest stay
    /// literal.
    pub fn decorate<I>(self, units: I, test: impl Fn(&PhoneUnit) -> bool) -> Vec<QueryPhone>
    where
        I: IntoIterator<Item = PhoneUnit>,
    {
        units
            .into_iter()
            .map(|unit| {
                if test(&unit) {
                    QueryPhone::Permuted(PermutedPhone::new(unit, self))
                } else {
                    QueryPhone::Plain(unit)
                }
            })
            .collect()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
