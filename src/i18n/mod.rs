//! # Internationalization
//!
//! Translation-string lookup for the presentation layer. One JSON file
//! per language code maps string keys to localized strings. A missing
//! or malformed file degrades to an empty mapping (the caller then
//! sees raw keys), never a crash. The resolved language travels as an
//! explicit per-request value; there is no ambient session state.

mod loader;

pub use loader::{TranslationLoader, Translations, DEFAULT_LANGUAGE};
