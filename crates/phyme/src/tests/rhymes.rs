use phyme_core::settings::Settings;

use super::{flat, test_context, test_phyme};
use crate::{Phyme, QueryError, RhymeClass, RhymeGroups};

#[test]
fn test_perfect_dog() {
    let phyme = test_phyme();
    let rhymes = phyme.get_perfect_rhymes("dog", None).unwrap();
    assert_eq!(rhymes, RhymeGroups::from([(1, vec!["cog".to_string(), "frog".to_string()])]));
}

#[test]
fn test_perfect_is_case_insensitive() {
    let phyme = test_phyme();
    assert_eq!(
        phyme.get_perfect_rhymes("DOG", None).unwrap(),
        phyme.get_perfect_rhymes("dog", None).unwrap()
    );
}

#[test]
fn test_perfect_groups_by_syllables() {
    let phyme = test_phyme();
    let rhymes = phyme.get_perfect_rhymes("say", None).unwrap();
    assert_eq!(rhymes[&1], ["way"]);
    assert_eq!(rhymes[&2], ["today"]);
}

#[test]
fn test_perfect_by_syllable_count() {
    let phyme = test_phyme();
    let three = phyme.get_perfect_rhymes("toxicology", Some(3)).unwrap();
    assert!(flat(&three).contains(&"zoology"));
    let four = phyme.get_perfect_rhymes("toxicology", Some(4)).unwrap();
    assert!(!flat(&four).contains(&"zoology"));
    let whole = phyme.get_perfect_rhymes("toxicology", Some(0)).unwrap();
    assert!(whole.is_empty());
}

#[test]
fn test_perfect_glide_equivalence() {
    let phyme = test_phyme();
    let rhymes = phyme.get_perfect_rhymes("maya", None).unwrap();
    // the glide Y stands in for IY0 but does not add a syllable
    assert_eq!(rhymes[&2], ["playa"]);
    assert_eq!(rhymes[&3], ["paia"]);
}

#[test]
fn test_family_dog() {
    let phyme = test_phyme();
    let words = phyme.get_family_rhymes("dog", None).unwrap();
    let words = flat(&words);
    assert!(words.contains(&"fob"));
    assert!(words.contains(&"cog"));
    assert!(!words.contains(&"hawk"));
}

#[test]
fn test_family_multi_syllable() {
    let phyme = test_phyme();
    let rhymes = phyme.get_family_rhymes("constantinople", None).unwrap();
    assert_eq!(rhymes[&2], ["opal", "vocal"]);
}

#[test]
fn test_partner_dog() {
    let phyme = test_phyme();
    let words = phyme.get_partner_rhymes("dog", None).unwrap();
    let words = flat(&words);
    assert!(words.contains(&"hawk"));
    assert!(words.contains(&"fob"));
}

#[test]
fn test_additive_do() {
    let phyme = test_phyme();
    let words = phyme.get_additive_rhymes("do", None).unwrap();
    let words = flat(&words);
    assert!(words.contains(&"dude"));
    assert!(words.contains(&"bloom"));
    assert!(words.contains(&"blue"));
    assert!(!words.contains(&"do"));
}

#[test]
fn test_additive_matter() {
    let phyme = test_phyme();
    let words = phyme.get_additive_rhymes("matter", None).unwrap();
    assert!(flat(&words).contains(&"master"));
}

#[test]
fn test_subtractive() {
    let phyme = test_phyme();
    let dude = phyme.get_subtractive_rhymes("dude", None).unwrap();
    assert!(flat(&dude).contains(&"do"));
    let bloom = phyme.get_subtractive_rhymes("bloom", None).unwrap();
    assert!(flat(&bloom).contains(&"blue"));
    let master = phyme.get_subtractive_rhymes("master", None).unwrap();
    assert!(flat(&master).contains(&"matter"));
}

#[test]
fn test_consonant_dog() {
    let phyme = test_phyme();
    let words = phyme.get_consonant_rhymes("dog", None).unwrap();
    let words = flat(&words);
    assert!(words.contains(&"beg"));
    assert!(words.contains(&"bog"));
    assert!(!words.contains(&"dock"));
}

#[test]
fn test_assonance_dog() {
    let phyme = test_phyme();
    let words = phyme.get_assonance_rhymes("dog", None).unwrap();
    let words = flat(&words);
    assert!(words.contains(&"jaunt"));
    assert!(words.contains(&"hawk"));
    assert!(!words.contains(&"bog"));
}

#[test]
fn test_substitution_factor() {
    let phyme = test_phyme();
    let words = phyme.get_substitution_rhymes("factor", None).unwrap();
    let words = flat(&words);
    assert!(words.contains(&"faster"));
    assert!(!words.contains(&"matter"));
}

#[test]
fn test_guard_on_vowel_ending() {
    let phyme = test_phyme();
    for word in ["do", "blue", "a", "say"] {
        for class in RhymeClass::ALL {
            let rhymes = phyme.get_rhymes(word, class, None).unwrap();
            if class.requires_consonant_ending() {
                assert!(rhymes.is_empty(), "{class} rhymes for {word}: {rhymes:?}");
            }
        }
    }
}

#[test]
fn test_unknown_word() {
    let phyme = test_phyme();
    for class in RhymeClass::ALL {
        assert_eq!(
            phyme.get_rhymes("qwertyuiop", class, None).unwrap_err(),
            QueryError::UnknownPronunciation("qwertyuiop".to_string())
        );
    }
    assert!(phyme.count_syllables("qwertyuiop").is_err());
}

#[test]
fn test_query_word_kept_when_configured() {
    let mut settings = Settings::default();
    settings.query.exclude_query_word = false;
    let phyme = Phyme::new(test_context(settings)).unwrap();
    let words = phyme.get_perfect_rhymes("dog", None).unwrap();
    assert_eq!(words[&1], ["cog", "dog", "frog"]);
}

#[test]
fn test_get_by_vowel() {
    let phyme = test_phyme();
    let bare = phyme.get_by_vowel("ao").unwrap();
    let words = flat(&bare);
    for word in ["dog", "cog", "hawk", "fob", "jaunt"] {
        assert!(words.contains(&word), "{word} missing from {words:?}");
    }
    assert!(!words.contains(&"bog"));
    assert_eq!(phyme.get_by_vowel("AO1").unwrap(), bare);
    // unstressed variant is a different phone
    assert!(phyme.get_by_vowel("AO0").unwrap().is_empty());
}

#[test]
fn test_get_by_vowel_unknown() {
    let phyme = test_phyme();
    assert_eq!(
        phyme.get_by_vowel("qq").unwrap_err(),
        QueryError::MissingTaxonomyEntry("QQ1".to_string())
    );
}

#[test]
fn test_exact_search() {
    let phyme = test_phyme();
    let rhymes = phyme.search(&["AO1", "G"]).unwrap();
    assert_eq!(rhymes[&1], ["cog", "dog", "frog"]);
    let suffix = phyme.search(&["L"]).unwrap();
    assert_eq!(suffix[&2], ["opal", "vocal"]);
    assert_eq!(suffix[&5], ["constantinople"]);
    assert!(phyme.search(&["ZH", "ZH"]).unwrap().is_empty());
}

#[test]
fn test_count_syllables() {
    let phyme = test_phyme();
    assert_eq!(phyme.count_syllables("dog").unwrap(), 1);
    assert_eq!(phyme.count_syllables("way").unwrap(), 1);
    assert_eq!(phyme.count_syllables("antidisestablishmentarianism").unwrap(), 12);
}

#[test]
fn test_alternate_pronunciations_are_words() {
    let phyme = test_phyme();
    let words = phyme.get_perfect_rhymes("bed", None);
    assert!(words.is_err());
    let rhymes = phyme.search(&["EH1", "D"]).unwrap();
    assert_eq!(rhymes[&1], ["read(1)"]);
}

#[test]
fn test_word_without_phones_is_not_indexed() {
    let mut lexicon = test_context(Settings::default()).lexicon().clone();
    lexicon.pronunciations.insert("X", Vec::new());
    let phyme = Phyme::from_lexicon(lexicon, Settings::default()).unwrap();

    // a vowel-less query matches at the root: every indexed word
    let dropped = phyme.get_subtractive_rhymes("hmm", None).unwrap();
    assert!(flat(&dropped).contains(&"dog"));
    assert!(!flat(&dropped).contains(&"x"));
    let vowels = phyme.get_assonance_rhymes("hmm", None).unwrap();
    assert!(!flat(&vowels).contains(&"x"));
    let empty: [&str; 0] = [];
    assert!(!flat(&phyme.search(&empty).unwrap()).contains(&"x"));

    assert_eq!(
        phyme.count_syllables("x").unwrap_err(),
        QueryError::UnknownPronunciation("x".to_string())
    );
}
