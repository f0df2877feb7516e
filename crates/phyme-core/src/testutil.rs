//! Shared test fixtures: a small CMU-format dictionary over the standard
//! phone set. Built for this crate's tests and, with the `test-util`
//! feature, for crates layered on top of it.

use crate::context::PhoneticContext;
use crate::lexicon::{Lexicon, PhoneClasses, PronunciationTable};
use crate::settings::Settings;

pub const FIXTURE_CMUDICT: &str = "\
;;; test fixture in cmudict-0.7b format
A  AH0
ANTIDISESTABLISHMENTARIANISM  AE2 N T IY0 D IH0 S IH0 S T AE1 B L IH0 SH M AH0 N T EH1 R IY0 AH0 N IH2 Z AH0 M
BEG  B EH1 G
BEGIN  B IH0 G IH1 N
BLOOM  B L UW1 M
BLUE  B L UW1
BOG  B AA1 G
COG  K AO1 G
DO  D UW1
DOCK  D AA1 K
DOG  D AO1 G
DUDE  D UW1 D
FOB  F AO1 B
FROG  F R AO1 G
HAWK  HH AO1 K
HMM  HH M
JAUNT  JH AO1 N T
KLEVEN  K L EH1 V AH0 N
LEVEN  L EH1 V AH0 N
MASTER  M AE1 S T ER0
MATTER  M AE1 T ER0
MAYA  M AY1 Y AH0
PAIA  P AY1 IY0 AH0
PLAYA  P L AY1 Y AH0
READ  R IY1 D
READ(1)  R EH1 D
TOXICOLOGY  T AA2 K S IH0 K AA1 L AH0 JH IY0
ZOOLOGY  Z OW0 AA1 L AH0 JH IY0
";

pub fn test_lexicon(settings: &Settings) -> Lexicon {
    lexicon_from_cmudict(FIXTURE_CMUDICT, settings)
}

/// Lexicon over `text` with the standard phone classes.
pub fn lexicon_from_cmudict(text: &str, settings: &Settings) -> Lexicon {
    let pronunciations = PronunciationTable::parse_cmudict(text).expect("fixture must parse");
    let classes = PhoneClasses::cmu_default(&settings.phones.family_merges);
    Lexicon::new(pronunciations, classes)
}

pub fn test_context() -> PhoneticContext {
    let settings = Settings::default();
    PhoneticContext::new(test_lexicon(&settings), settings)
}
