use crate::lexicon::Lexicon;
use crate::settings::Settings;
use crate::taxonomy::PhoneTaxonomy;

/// Immutable phonetic context: the loaded tables, the taxonomy derived from
/// them and the settings they were built with. Constructed once and shared
/// by reference with the trie and the query facade.
#[derive(Debug)]
pub struct PhoneticContext {
    lexicon: Lexicon,
    taxonomy: PhoneTaxonomy,
    settings: Settings,
}

impl PhoneticContext {
    pub fn new(lexicon: Lexicon, settings: Settings) -> Self {
        let taxonomy = PhoneTaxonomy::new(&lexicon.classes, &settings.phones);
        tracing::debug!(
            words = lexicon.pronunciations.len(),
            phones = taxonomy.len(),
            "phonetic context ready"
        );
        Self {
            lexicon,
            taxonomy,
            settings,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn taxonomy(&self) -> &PhoneTaxonomy {
        &self.taxonomy
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
