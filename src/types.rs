// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for flagfinder

use serde::{Deserialize, Serialize};

/// Languages a country table can be published in.
///
/// Each variant maps to an ISO 639-1 two-letter code, which is also the file
/// stem of the table in a data directory (`de.json`, `en.json`, ...). Only
/// English and German ship with bundled tables; the others resolve once a
/// data directory provides them.
///
/// ## Adding a new language
///
/// 1. Add a variant here
/// 2. Add arms to `code()` and `from_code()`
/// 3. Append it to `all()` (its position sets the scan order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "it")]
    Italian,
}

impl Language {
    pub const ENGLISH: Language = Language::English;
    pub const GERMAN: Language = Language::German;

    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Leading/trailing whitespace and case are ignored, so `" DE "` parses.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "de" => Some(Language::German),
            "fr" => Some(Language::French),
            "es" => Some(Language::Spanish),
            "it" => Some(Language::Italian),
            _ => None,
        }
    }

    /// All declared languages. This is also the order in which loaded tables
    /// are scanned during name resolution and suggestion.
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::German,
            Language::French,
            Language::Spanish,
            Language::Italian,
        ]
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A successfully resolved country, built fresh for every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCountry {
    /// Display name in the requested language.
    pub name: String,
    /// Lowercase, language-independent country code.
    pub code: String,
    /// Flag image URL.
    pub url: String,
}
