//! Rhyming dictionary for songwriting.
//!
//! [`Phyme`] owns the phonetic context and the rhyme trie built from it and
//! answers rhyme queries: pick the tail syllables of a word, tag them for one
//! of the [`RhymeClass`]es, search the trie and return the matching words
//! grouped by syllable count, each group ordered by a [`WordRanker`].

mod rank;
mod rhyme_class;
pub mod trace_init;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, debug_span};

pub use phyme_core::lexicon::{Lexicon, LexiconError, PhoneClasses, PronunciationTable};
pub use phyme_core::settings::{parse_settings_toml, Settings, SettingsError};
pub use phyme_core::{
    NodeRef, Permutation, PermutedPhone, Phone, PhoneUnit, PhoneticContext, QueryError,
    QueryPhone, RhymeTrie,
};
pub use rank::{
    strip_pronunciation_marker, CooccurrenceRanker, LexicalRanker, RankerError, WordRanker,
};
pub use rhyme_class::{RhymeClass, UnknownRhymeClass};

/// syllable count → ranked words.
pub type RhymeGroups = BTreeMap<usize, Vec<String>>;

/// Rhyme query engine. Built once; every query takes `&self`.
pub struct Phyme {
    ctx: PhoneticContext,
    trie: RhymeTrie,
    ranker: Arc<dyn WordRanker>,
}

impl Phyme {
    /// Build the rhyme trie for `ctx`, ranking results lexically.
    pub fn new(ctx: PhoneticContext) -> Result<Self, QueryError> {
        Self::with_ranker(ctx, Arc::new(LexicalRanker))
    }

    pub fn with_ranker(
        ctx: PhoneticContext,
        ranker: Arc<dyn WordRanker>,
    ) -> Result<Self, QueryError> {
        let trie = RhymeTrie::build(&ctx)?;
        Ok(Self { ctx, trie, ranker })
    }

    pub fn from_lexicon(lexicon: Lexicon, settings: Settings) -> Result<Self, QueryError> {
        Self::new(PhoneticContext::new(lexicon, settings))
    }

    pub fn context(&self) -> &PhoneticContext {
        &self.ctx
    }

    pub fn trie(&self) -> &RhymeTrie {
        &self.trie
    }

    /// Rhymes of `word` under `class`.
    ///
    /// `num_syllables` selects how much of the word's ending must rhyme:
    /// `None` for the last stressed syllable and what follows it, `Some(n)`
    /// for the last `n` syllables, `Some(0)` for the whole word. Classes that
    /// need a consonant ending return an empty map when the first selected
    /// syllable ends in a vowel.
    pub fn get_rhymes(
        &self,
        word: &str,
        class: RhymeClass,
        num_syllables: Option<usize>,
    ) -> Result<RhymeGroups, QueryError> {
        let _span = debug_span!("get_rhymes", %class, word, ?num_syllables).entered();
        let syllables = self.ctx.get_last_syllables(word, num_syllables)?;
        if !class.accepts(&syllables) {
            debug!("query does not end in a consonant");
            return Ok(RhymeGroups::new());
        }
        let phones = class.decorate(syllables.into_iter().flatten().collect());
        self.sorted_search(phones, word)
    }

    pub fn get_perfect_rhymes(
        &self,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<RhymeGroups, QueryError> {
        self.get_rhymes(word, RhymeClass::Perfect, num_syllables)
    }

    /// Same vowels and stress, consonants from the same articulation family
    /// and voicing (DOG → FOB).
    pub fn get_family_rhymes(
        &self,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<RhymeGroups, QueryError> {
        self.get_rhymes(word, RhymeClass::Family, num_syllables)
    }

    /// Same vowels and stress, consonants from the same articulation family
    /// with either voicing (DOG → HAWK).
    pub fn get_partner_rhymes(
        &self,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<RhymeGroups, QueryError> {
        self.get_rhymes(word, RhymeClass::Partner, num_syllables)
    }

    /// Extra consonants inserted (MATTER → MASTER).
    pub fn get_additive_rhymes(
        &self,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<RhymeGroups, QueryError> {
        self.get_rhymes(word, RhymeClass::Additive, num_syllables)
    }

    /// Consonants dropped (MASTER → MATTER).
    pub fn get_subtractive_rhymes(
        &self,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<RhymeGroups, QueryError> {
        self.get_rhymes(word, RhymeClass::Subtractive, num_syllables)
    }

    /// Same consonants and stress, any vowels (DOG → BEG).
    pub fn get_consonant_rhymes(
        &self,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<RhymeGroups, QueryError> {
        self.get_rhymes(word, RhymeClass::Consonant, num_syllables)
    }

    /// Same vowels and stress, any consonants around them (JAUNT → DOG).
    pub fn get_assonance_rhymes(
        &self,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<RhymeGroups, QueryError> {
        self.get_rhymes(word, RhymeClass::Assonance, num_syllables)
    }

    /// Same vowels and stress, consonants replaced (FASTER → FACTOR).
    pub fn get_substitution_rhymes(
        &self,
        word: &str,
        num_syllables: Option<usize>,
    ) -> Result<RhymeGroups, QueryError> {
        self.get_rhymes(word, RhymeClass::Substitution, num_syllables)
    }

    /// Words ending in `vowel`, with any consonants after it. A vowel given
    /// without a stress digit gets the configured default (`AO` → `AO1`).
    pub fn get_by_vowel(&self, vowel: &str) -> Result<RhymeGroups, QueryError> {
        let mut label = vowel.to_uppercase();
        if !label.ends_with(|c: char| c.is_ascii_digit()) {
            label.push_str(&self.ctx.settings().phones.default_stress);
        }
        let _span = debug_span!("get_by_vowel", vowel = %label).entered();
        let phone = self.ctx.taxonomy().phone(&label)?;
        let query = vec![PermutedPhone::new(phone, Permutation::Additive).into()];
        self.sorted_search(query, vowel)
    }

    /// Words whose pronunciation ends exactly with `phones` (in word order),
    /// grouped by syllable count. Empty when no word has that ending.
    pub fn search<P: AsRef<str>>(&self, phones: &[P]) -> Result<RhymeGroups, QueryError> {
        let reversed: Vec<&str> = phones.iter().rev().map(AsRef::as_ref).collect();
        let Some(node) = self.trie.search(&reversed) else {
            return Ok(RhymeGroups::new());
        };
        self.rank_groups(node.sub_words().map(str::to_string), "")
    }

    pub fn count_syllables(&self, word: &str) -> Result<usize, QueryError> {
        self.ctx.count_syllables(word)
    }

    /// Search with `phones` in word order, then group, rank and drop the
    /// query word.
    fn sorted_search(
        &self,
        mut phones: Vec<QueryPhone>,
        keyword: &str,
    ) -> Result<RhymeGroups, QueryError> {
        phones.reverse();
        let nodes = self.trie.matching_nodes(&phones, self.ctx.taxonomy())?;
        let words: BTreeSet<String> = nodes
            .iter()
            .flat_map(|node| node.sub_words())
            .map(str::to_string)
            .collect();
        let mut groups = self.rank_groups(words, keyword)?;
        if self.ctx.settings().query.exclude_query_word {
            let keyword = keyword.to_lowercase();
            groups.retain(|_, words| {
                words.retain(|w| *w != keyword);
                !words.is_empty()
            });
        }
        debug!(
            nodes = nodes.len(),
            words = groups.values().map(Vec::len).sum::<usize>(),
            "rhymes found"
        );
        Ok(groups)
    }

    fn rank_groups(
        &self,
        words: impl IntoIterator<Item = String>,
        context: &str,
    ) -> Result<RhymeGroups, QueryError> {
        let mut groups = RhymeGroups::new();
        for word in words {
            let count = self.ctx.count_syllables(&word)?;
            groups.entry(count).or_default().push(word);
        }
        for words in groups.values_mut() {
            *words = self.ranker.sort_words(context, std::mem::take(words));
        }
        Ok(groups)
    }
}
