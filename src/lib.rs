// SPDX-License-Identifier: PMPL-1.0-or-later

//! flagfinder: country codes and localized names to flag records.
//!
//! Give it `"de"`, `"Germany"` or `" deutschland "` and it answers with the
//! country's code, its display name in the language you asked for, and the URL
//! of its flag image. When nothing matches, the error carries a "did you mean"
//! list built from every display name that contains the input.
//!
//! PIPELINE:
//! 1. **Validate + normalize**: digits are rejected, then the input is trimmed
//!    and lowercased.
//! 2. **Resolve**: the requested language's codes first, then an exact name
//!    scan over every loaded language.
//! 3. **Suggest**: on failure, substring matches over all display names.
//!
//! Tables are loaded once and never mutated. Build a [`FlagService`] and pass
//! it around, or use the free functions below, which share one process-wide
//! service configured from `FLAGFINDER_*` environment variables.
//!
//! ```
//! use flagfinder::{FlagService, Language};
//!
//! let flags = FlagService::bundled();
//! let germany = flags.get_flag("Deutschland", Language::ENGLISH).unwrap();
//! assert_eq!(germany.code, "de");
//! assert_eq!(germany.name, "Germany");
//! assert!(germany.url.ends_with("/de.webp"));
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod random;
pub mod resolve;
pub mod service;
pub mod suggest;
pub mod tables;
pub mod types;
pub mod url;

pub use config::FlagConfig;
pub use error::{FlagError, Result, TableLoadError};
pub use service::{global, FlagService};
pub use types::{Language, ResolvedCountry};

/// Resolve `identifier` with the process-wide service.
pub fn get_flag(identifier: &str, language: Language) -> Result<ResolvedCountry> {
    global().get_flag(identifier, language)
}

/// Flag URL for `identifier` with the process-wide service.
pub fn get_flag_url(identifier: &str) -> Result<String> {
    global().get_flag_url(identifier)
}

/// Random country from `language`'s table with the process-wide service.
pub fn get_random_flag(language: Language) -> Result<ResolvedCountry> {
    global().get_random_flag(language)
}
