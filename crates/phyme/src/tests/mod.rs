mod properties;
mod rhymes;

use std::sync::Arc;

use phyme_core::settings::Settings;
use phyme_core::testutil::{lexicon_from_cmudict, FIXTURE_CMUDICT};
use phyme_core::PhoneticContext;

use super::{Phyme, WordRanker};

/// Words the rhyme-class scenarios need on top of the core fixture.
const EXTRA_CMUDICT: &str = "\
CONSTANTINOPLE  K AA2 N S T AE2 N T IH0 N OW1 P AH0 L
FACTOR  F AE1 K T ER0
FASTER  F AE1 S T ER0
OPAL  OW1 P AH0 L
SAY  S EY1
TODAY  T AH0 D EY1
VOCAL  V OW1 K AH0 L
WAY  W EY1
";

pub(crate) fn test_context(settings: Settings) -> PhoneticContext {
    let text = format!("{FIXTURE_CMUDICT}{EXTRA_CMUDICT}");
    PhoneticContext::new(lexicon_from_cmudict(&text, &settings), settings)
}

pub(crate) fn test_phyme() -> Phyme {
    Phyme::new(test_context(Settings::default())).unwrap()
}

pub(crate) fn test_phyme_with(ranker: Arc<dyn WordRanker>) -> Phyme {
    Phyme::with_ranker(test_context(Settings::default()), ranker).unwrap()
}

/// All words of a result, any syllable count.
pub(crate) fn flat(groups: &crate::RhymeGroups) -> Vec<&str> {
    groups.values().flatten().map(String::as_str).collect()
}
