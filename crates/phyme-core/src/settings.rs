//! Settings loaded from TOML.
//!
//! - `parse_settings_toml(toml)` parses and validates a full settings document
//! - `Settings::default()` parses the embedded `default_settings.toml`
//! - Settings are plain values handed to the lexicon and the query facade;
//!   there is no process-wide instance.

use std::collections::BTreeMap;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub phones: PhoneSettings,
    pub query: QuerySettings,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneSettings {
    pub voiced_consonants: Vec<String>,
    pub stress_markers: Vec<String>,
    pub default_stress: String,
    /// family → family it is folded into.
    #[serde(default)]
    pub family_merges: BTreeMap<String, String>,
    /// glide → vowel it may stand in for.
    #[serde(default)]
    pub glides: BTreeMap<String, String>,
}

impl PhoneSettings {
    pub fn is_stress_marker(&self, c: char) -> bool {
        self.stress_markers
            .iter()
            .any(|m| m.len() == 1 && m.starts_with(c))
    }

    pub fn glide_target(&self, label: &str) -> Option<&str> {
        self.glides.get(label).map(String::as_str)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuerySettings {
    pub exclude_query_word: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn is_single_digit(s: &str) -> bool {
    s.len() == 1 && s.bytes().all(|b| b.is_ascii_digit())
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! invalid {
        ($field:expr, $reason:expr) => {
            return Err(SettingsError::InvalidValue {
                field: $field.to_string(),
                reason: $reason.to_string(),
            })
        };
    }

    if s.phones.voiced_consonants.is_empty() {
        invalid!("phones.voiced_consonants", "must not be empty");
    }
    if s.phones.stress_markers.is_empty() {
        invalid!("phones.stress_markers", "must not be empty");
    }
    if let Some(bad) = s.phones.stress_markers.iter().find(|m| !is_single_digit(m)) {
        invalid!(
            "phones.stress_markers",
            format!("{bad:?} is not a single digit")
        );
    }
    if !is_single_digit(&s.phones.default_stress) {
        invalid!("phones.default_stress", "must be a single digit");
    }
    if !s.phones.stress_markers.contains(&s.phones.default_stress) {
        invalid!("phones.default_stress", "must be one of phones.stress_markers");
    }
    for (glide, target) in &s.phones.glides {
        if target.is_empty() {
            invalid!(format!("phones.glides.{glide}"), "must not be empty");
        }
    }
    for (from, to) in &s.phones.family_merges {
        if to.is_empty() {
            invalid!(format!("phones.family_merges.{from}"), "must not be empty");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.phones.voiced_consonants.len(), 13);
        assert!(s.phones.voiced_consonants.iter().any(|p| p == "JH"));
        assert!(!s.phones.voiced_consonants.iter().any(|p| p == "CH"));
        assert_eq!(s.phones.stress_markers, vec!["1", "2"]);
        assert_eq!(s.phones.default_stress, "1");
        assert_eq!(s.phones.family_merges["affricate"], "fricative");
        assert_eq!(s.phones.glide_target("Y"), Some("IY0"));
        assert_eq!(s.phones.glide_target("W"), Some("UW0"));
        assert_eq!(s.phones.glide_target("R"), None);
        assert!(s.query.exclude_query_word);
    }

    #[test]
    fn stress_marker_lookup() {
        let s = Settings::default();
        assert!(s.phones.is_stress_marker('1'));
        assert!(s.phones.is_stress_marker('2'));
        assert!(!s.phones.is_stress_marker('0'));
    }

    #[test]
    fn glides_and_merges_are_optional() {
        let toml = r#"
[phones]
voiced_consonants = ["B"]
stress_markers = ["1"]
default_stress = "1"

[query]
exclude_query_word = false
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.phones.glides.is_empty());
        assert!(s.phones.family_merges.is_empty());
        assert!(!s.query.exclude_query_word);
    }

    #[test]
    fn error_default_stress_not_a_marker() {
        let toml = r#"
[phones]
voiced_consonants = ["B"]
stress_markers = ["1", "2"]
default_stress = "0"

[query]
exclude_query_word = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("phones.default_stress"));
    }

    #[test]
    fn error_multi_char_stress_marker() {
        let toml = r#"
[phones]
voiced_consonants = ["B"]
stress_markers = ["12"]
default_stress = "1"

[query]
exclude_query_word = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("phones.stress_markers"));
    }

    #[test]
    fn error_empty_voiced() {
        let toml = r#"
[phones]
voiced_consonants = []
stress_markers = ["1"]
default_stress = "1"

[query]
exclude_query_word = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("phones.voiced_consonants"));
    }

    #[test]
    fn error_empty_glide_target() {
        let toml = r#"
[phones]
voiced_consonants = ["B"]
stress_markers = ["1"]
default_stress = "1"

[phones.glides]
Y = ""

[query]
exclude_query_word = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("phones.glides.Y"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[phones]
voiced_consonants = ["B"]
stress_markers = ["1"]
default_stress = "1"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
