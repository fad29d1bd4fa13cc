//! Translation file loading

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::observability::{Logger, Severity};

/// Language used when a request carries none, or an invalid one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Loads per-language translation files from a languages directory.
pub struct TranslationLoader {
    languages_dir: PathBuf,
}

impl TranslationLoader {
    /// Creates a loader over the given languages directory.
    pub fn new(languages_dir: impl Into<PathBuf>) -> Self {
        Self {
            languages_dir: languages_dir.into(),
        }
    }

    /// Returns the languages directory path.
    pub fn languages_dir(&self) -> &Path {
        &self.languages_dir
    }

    /// Loads the translations for a language code.
    ///
    /// Missing file, malformed JSON, or a rejected language code all
    /// yield an empty mapping; the failure is logged, not raised.
    pub fn load(&self, lang: &str) -> Translations {
        if !is_valid_language_code(lang) {
            Logger::log(
                Severity::Warn,
                "translation_language_rejected",
                &[("lang", lang)],
            );
            return Translations::empty();
        }

        let path = self.languages_dir.join(format!("{}.json", lang));

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                Logger::log(
                    Severity::Warn,
                    "translation_file_unreadable",
                    &[
                        ("error", &e.to_string()),
                        ("lang", lang),
                        ("path", &path.display().to_string()),
                    ],
                );
                return Translations::empty();
            }
        };

        match serde_json::from_str::<HashMap<String, String>>(&content) {
            Ok(strings) => Translations { strings },
            Err(e) => {
                Logger::log(
                    Severity::Warn,
                    "translation_file_malformed",
                    &[
                        ("error", &e.to_string()),
                        ("lang", lang),
                        ("path", &path.display().to_string()),
                    ],
                );
                Translations::empty()
            }
        }
    }
}

/// Language codes are path components; only plain tags pass.
fn is_valid_language_code(lang: &str) -> bool {
    !lang.is_empty()
        && lang.len() <= 16
        && lang
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A resolved set of translation strings for one language.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    strings: HashMap<String, String>,
}

impl Translations {
    /// An empty mapping; every lookup falls back to the raw key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolves a string key, falling back to the key itself when the
    /// language has no entry for it.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Number of loaded strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when no strings are loaded.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
