// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for lookups and table loading

use crate::types::Language;
use std::path::PathBuf;

pub type Result<T, E = FlagError> = std::result::Result<T, E>;

/// Failures surfaced by the lookup operations. Every variant is distinct so
/// callers can match on the kind instead of parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    /// Identifier contains a digit. Raised before any lookup.
    #[error("country identifier must be a non-numeric string: {identifier:?}")]
    InvalidIdentifier { identifier: String },

    /// Neither a code nor a display name matched. `identifier` is kept as the
    /// caller supplied it, untrimmed.
    #[error("Invalid country: {identifier}{}", render_suggestion(.suggestion))]
    CountryNotFound {
        identifier: String,
        suggestion: Option<String>,
    },

    #[error("no country table loaded for language {0}")]
    UnknownLanguage(Language),

    #[error("country table for language {0} is empty")]
    EmptyTable(Language),

    /// The code matched through another language's table but the requested
    /// language has no entry for it.
    #[error("country code {code} has no {language} display name")]
    Untranslated { code: String, language: Language },

    #[error("random source unavailable: {0}")]
    Entropy(String),
}

impl FlagError {
    /// Suggestion sentence carried by `CountryNotFound`, if any.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            FlagError::CountryNotFound { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }
}

fn render_suggestion(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(text) => format!(". {text}"),
        None => String::new(),
    }
}

/// A single language table that could not be loaded. These are logged and
/// collected, never returned from lookups.
#[derive(Debug, thiserror::Error)]
pub enum TableLoadError {
    #[error("reading country table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing country table for {language}: {source}")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },

    #[error("country table for {language} is not a JSON object")]
    NotAnObject { language: Language },

    #[error("country table for {language} maps {code} to a non-string value")]
    NonStringName { language: Language, code: String },

    #[error("country table {path} does not name a supported language")]
    UnknownLanguage { path: PathBuf },
}

impl TableLoadError {
    /// Language the failed table was meant for, when it could be determined.
    pub fn language(&self) -> Option<Language> {
        match self {
            TableLoadError::Parse { language, .. }
            | TableLoadError::NotAnObject { language }
            | TableLoadError::NonStringName { language, .. } => Some(*language),
            TableLoadError::Io { path, .. } | TableLoadError::UnknownLanguage { path } => path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(Language::from_code),
        }
    }
}
