//! Property tests over generated lexicons and the fixture dictionary.

use proptest::prelude::*;

use phyme_core::lexicon::{Lexicon, PhoneClasses, PronunciationTable};
use phyme_core::settings::Settings;
use phyme_core::PhoneUnit;

use super::test_phyme;
use crate::{Phyme, RhymeClass};

const CONSONANTS: &[&str] = &["B", "D", "F", "G", "K", "L", "M", "N", "P", "R", "S", "T", "V", "Z"];
const VOWELS: &[&str] = &["AA1", "AE1", "EH1", "IY1", "OW1", "UW1"];

fn two_word_phyme(long: &[&str], short: &[&str]) -> Phyme {
    let settings = Settings::default();
    let mut pronunciations = PronunciationTable::new();
    pronunciations.insert("LONGER", long.iter().map(|p| p.to_string()).collect());
    pronunciations.insert("SHORTER", short.iter().map(|p| p.to_string()).collect());
    let classes = PhoneClasses::cmu_default(&settings.phones.family_merges);
    Phyme::from_lexicon(Lexicon::new(pronunciations, classes), settings).unwrap()
}

fn fixture_words(phyme: &Phyme) -> Vec<String> {
    let mut words: Vec<String> = phyme
        .context()
        .lexicon()
        .pronunciations
        .iter()
        .map(|(word, _)| word.to_lowercase())
        .collect();
    words.sort();
    words
}

/// Whether `word`'s pronunciation ends with `query`, position by position.
fn ends_with(phyme: &Phyme, word: &str, query: &[PhoneUnit]) -> bool {
    let phones = phyme.context().get_phones(word).unwrap();
    phones.len() >= query.len()
        && phones[phones.len() - query.len()..]
            .iter()
            .zip(query)
            .all(|(have, want)| have.matches_unit(want))
}

proptest! {
    #[test]
    fn additive_undoes_subtractive(
        onset in prop::sample::select(CONSONANTS),
        vowel in prop::sample::select(VOWELS),
        coda in prop::sample::select(CONSONANTS),
    ) {
        let phyme = two_word_phyme(&[onset, vowel, coda], &[onset, vowel]);
        let dropped = phyme.get_subtractive_rhymes("longer", None).unwrap();
        prop_assert!(dropped.values().flatten().any(|w| w == "shorter"));
        let added = phyme.get_additive_rhymes("shorter", None).unwrap();
        prop_assert!(added.values().flatten().any(|w| w == "longer"));
    }

    #[test]
    fn perfect_rhymes_share_the_ending(index in 0usize..32, syllables in prop::option::of(0usize..5)) {
        let phyme = test_phyme();
        let words = fixture_words(&phyme);
        let word = &words[index % words.len()];
        let query: Vec<PhoneUnit> = phyme
            .context()
            .get_last_syllables(word, syllables)
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        let rhymes = phyme.get_perfect_rhymes(word, syllables).unwrap();
        for (&count, group) in &rhymes {
            for rhyme in group {
                prop_assert!(ends_with(&phyme, rhyme, &query), "{} does not rhyme with {}", rhyme, word);
                prop_assert_eq!(phyme.count_syllables(rhyme).unwrap(), count);
            }
        }
    }
}

#[test]
fn query_word_never_rhymes_with_itself() {
    let phyme = test_phyme();
    for word in fixture_words(&phyme) {
        for class in RhymeClass::ALL {
            let rhymes = phyme.get_rhymes(&word, class, None).unwrap();
            assert!(
                !rhymes.values().flatten().any(|w| *w == word),
                "{word} in its own {class} rhymes"
            );
            assert!(rhymes.values().all(|group| !group.is_empty()));
        }
    }
}

#[test]
fn every_word_round_trips_through_the_trie() {
    let phyme = test_phyme();
    for (word, labels) in phyme.context().lexicon().pronunciations.iter() {
        let reversed: Vec<&str> = labels.iter().rev().map(String::as_str).collect();
        let node = phyme.trie().search(&reversed).unwrap();
        let lower = word.to_lowercase();
        assert!(node.words().any(|w| w == lower), "{word} not at its node");
    }
}
