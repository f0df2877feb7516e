//! Phonetic units.
//!
//! A [`Phone`] is a classified ARPAbet label. A [`MetaPhone`] is an
//! equivalence class of phones that may all stand at the same position
//! (a glide standing in for its vowel). [`PhoneUnit`] is the closed union of
//! the two, and [`QueryPhone`] decorates a unit with an optional
//! [`Permutation`] for trie search.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::permutation::Permutation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneKind {
    Vowel,
    Consonant,
    /// Neither vowel nor consonant: glides that must not add a syllable.
    ShortVowel,
}

/// A single phone. Equality and hashing use the label only, so a `Phone`
/// can be looked up in maps by `&str`.
#[derive(Debug, Clone)]
pub struct Phone {
    label: Arc<str>,
    kind: PhoneKind,
    voiced: bool,
    family: Option<Arc<str>>,
}

impl Phone {
    pub fn new(label: &str, kind: PhoneKind, voiced: bool, family: Option<&str>) -> Self {
        Self {
            label: Arc::from(label),
            kind,
            voiced,
            family: family.map(Arc::from),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> PhoneKind {
        self.kind
    }

    pub fn is_vowel(&self) -> bool {
        self.kind == PhoneKind::Vowel
    }

    pub fn is_consonant(&self) -> bool {
        self.kind == PhoneKind::Consonant
    }

    pub fn is_voiced(&self) -> bool {
        self.voiced
    }

    /// Articulation family. Meaningful for consonants.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Trailing stress digit of a vowel label (`AY1` → `'1'`).
    pub fn stress(&self) -> Option<char> {
        self.label.chars().last().filter(char::is_ascii_digit)
    }

    /// Same label and attributes, reclassified as a short vowel.
    pub fn into_short_vowel(mut self) -> Self {
        self.kind = PhoneKind::ShortVowel;
        self
    }
}

impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Phone {}

impl Hash for Phone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must match `str`'s hash for `Borrow<str>` lookups.
        self.label.hash(state)
    }
}

impl Borrow<str> for Phone {
    fn borrow(&self) -> &str {
        &self.label
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// An equivalence class of phones anchored on a base phone.
///
/// Two units match when their replacement sets intersect. `kind` follows the
/// base phone unless built with [`MetaPhone::vowel`] or
/// [`MetaPhone::short_vowel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaPhone {
    base: Phone,
    replacements: Vec<Phone>,
    kind: PhoneKind,
}

impl MetaPhone {
    pub fn new(base: Phone, others: impl IntoIterator<Item = Phone>) -> Self {
        let kind = base.kind();
        Self::with_kind(base, others, kind)
    }

    /// Classified as a vowel regardless of its members (diphthongs, semivowels).
    pub fn vowel(base: Phone, others: impl IntoIterator<Item = Phone>) -> Self {
        Self::with_kind(base, others, PhoneKind::Vowel)
    }

    /// Classified as neither vowel nor consonant.
    pub fn short_vowel(base: Phone, others: impl IntoIterator<Item = Phone>) -> Self {
        Self::with_kind(base, others, PhoneKind::ShortVowel)
    }

    fn with_kind(base: Phone, others: impl IntoIterator<Item = Phone>, kind: PhoneKind) -> Self {
        let mut replacements = vec![base.clone()];
        for phone in others {
            if !replacements.contains(&phone) {
                replacements.push(phone);
            }
        }
        Self {
            base,
            replacements,
            kind,
        }
    }

    pub fn base(&self) -> &Phone {
        &self.base
    }

    /// Never empty; the base phone comes first.
    pub fn replacements(&self) -> &[Phone] {
        &self.replacements
    }

    pub fn kind(&self) -> PhoneKind {
        self.kind
    }

    pub fn is_voiced(&self) -> bool {
        self.replacements.iter().any(Phone::is_voiced)
    }

    pub fn matches(&self, phone: &Phone) -> bool {
        self.replacements.contains(phone)
    }

    pub fn overlaps(&self, other: &MetaPhone) -> bool {
        self.replacements.iter().any(|p| other.matches(p))
    }
}

/// A phone position in a query: one literal phone or an equivalence class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneUnit {
    Literal(Phone),
    EquivalenceClass(MetaPhone),
}

impl PhoneUnit {
    /// The literal phone, or the base of an equivalence class.
    pub fn base(&self) -> &Phone {
        match self {
            Self::Literal(p) => p,
            Self::EquivalenceClass(m) => m.base(),
        }
    }

    pub fn label(&self) -> &str {
        self.base().label()
    }

    pub fn kind(&self) -> PhoneKind {
        match self {
            Self::Literal(p) => p.kind(),
            Self::EquivalenceClass(m) => m.kind(),
        }
    }

    pub fn is_vowel(&self) -> bool {
        self.kind() == PhoneKind::Vowel
    }

    pub fn is_consonant(&self) -> bool {
        self.kind() == PhoneKind::Consonant
    }

    pub fn is_voiced(&self) -> bool {
        match self {
            Self::Literal(p) => p.is_voiced(),
            Self::EquivalenceClass(m) => m.is_voiced(),
        }
    }

    /// Phones this unit matches literally.
    pub fn candidates(&self) -> &[Phone] {
        match self {
            Self::Literal(p) => std::slice::from_ref(p),
            Self::EquivalenceClass(m) => m.replacements(),
        }
    }

    pub fn matches(&self, phone: &Phone) -> bool {
        match self {
            Self::Literal(p) => p == phone,
            Self::EquivalenceClass(m) => m.matches(phone),
        }
    }

    /// Unit-to-unit equivalence: literal labels equal, or the candidate sets
    /// intersect when either side is a class.
    pub fn matches_unit(&self, other: &PhoneUnit) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Literal(p), Self::EquivalenceClass(m))
            | (Self::EquivalenceClass(m), Self::Literal(p)) => m.matches(p),
            (Self::EquivalenceClass(a), Self::EquivalenceClass(b)) => a.overlaps(b),
        }
    }
}

impl From<Phone> for PhoneUnit {
    fn from(phone: Phone) -> Self {
        Self::Literal(phone)
    }
}

impl From<MetaPhone> for PhoneUnit {
    fn from(meta: MetaPhone) -> Self {
        Self::EquivalenceClass(meta)
    }
}

impl fmt::Display for PhoneUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(p) => write!(f, "{p}"),
            Self::EquivalenceClass(m) => write!(f, "\"{}\"", m.base()),
        }
    }
}

/// "At this trie position, apply `permutation` instead of matching `unit`
/// literally."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutedPhone {
    pub unit: PhoneUnit,
    pub permutation: Permutation,
}

impl PermutedPhone {
    pub fn new(unit: impl Into<PhoneUnit>, permutation: Permutation) -> Self {
        Self {
            unit: unit.into(),
            permutation,
        }
    }
}

/// One element of a decorated query sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPhone {
    Plain(PhoneUnit),
    Permuted(PermutedPhone),
}

impl QueryPhone {
    pub fn unit(&self) -> &PhoneUnit {
        match self {
            Self::Plain(u) => u,
            Self::Permuted(p) => &p.unit,
        }
    }

    pub fn permutation(&self) -> Option<Permutation> {
        match self {
            Self::Plain(_) => None,
            Self::Permuted(p) => Some(p.permutation),
        }
    }
}

impl From<Phone> for QueryPhone {
    fn from(phone: Phone) -> Self {
        Self::Plain(PhoneUnit::Literal(phone))
    }
}

impl From<PhoneUnit> for QueryPhone {
    fn from(unit: PhoneUnit) -> Self {
        Self::Plain(unit)
    }
}

impl From<PermutedPhone> for QueryPhone {
    fn from(p: PermutedPhone) -> Self {
        Self::Permuted(p)
    }
}
