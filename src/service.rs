// SPDX-License-Identifier: PMPL-1.0-or-later

//! The lookup service: loaded tables plus configuration, built once.
//!
//! A [`FlagService`] is immutable after construction and can be shared freely
//! between threads. Most callers build one explicitly; the crate-level free
//! functions use a single process-wide instance created on first use.

use crate::config::FlagConfig;
use crate::error::Result;
use crate::random::{random_flag, IndexSource, OsIndexSource};
use crate::resolve::Resolver;
use crate::suggest::suggest;
use crate::tables::{load_bundled, load_dir, CountryTables, LoadOutcome};
use crate::types::{Language, ResolvedCountry};
use std::sync::OnceLock;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct FlagService {
    config: FlagConfig,
    tables: CountryTables,
}

impl FlagService {
    /// Wrap already-built tables. Used for synthetic tables in tests and by
    /// embedders with their own data source.
    pub fn new(config: FlagConfig, tables: CountryTables) -> Self {
        Self { config, tables }
    }

    /// Load tables as `config` directs: its data directory when set, the
    /// bundled tables otherwise. Tables that fail are skipped.
    pub fn from_config(config: FlagConfig) -> anyhow::Result<Self> {
        let outcome = match &config.data_dir {
            Some(dir) => load_dir(dir)?,
            None => load_bundled(),
        };
        Ok(Self::from_outcome(config, outcome))
    }

    /// Default configuration over the bundled tables.
    pub fn bundled() -> Self {
        Self::from_outcome(FlagConfig::default(), load_bundled())
    }

    fn from_outcome(config: FlagConfig, outcome: LoadOutcome) -> Self {
        if !outcome.failures.is_empty() {
            warn!(
                skipped = outcome.failures.len(),
                "some country tables could not be loaded"
            );
        }
        Self::new(config, outcome.into_tables())
    }

    pub fn config(&self) -> &FlagConfig {
        &self.config
    }

    pub fn tables(&self) -> &CountryTables {
        &self.tables
    }

    /// Languages with a loaded table, in scan order.
    pub fn languages(&self) -> Vec<Language> {
        self.tables.languages()
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.tables, &self.config.base_url)
    }

    /// Resolve a code or display name, naming the result in `language`.
    pub fn get_flag(&self, identifier: &str, language: Language) -> Result<ResolvedCountry> {
        self.resolver().resolve(identifier, language)
    }

    /// [`get_flag`](Self::get_flag) in the configured default language.
    pub fn get_flag_default(&self, identifier: &str) -> Result<ResolvedCountry> {
        self.get_flag(identifier, self.config.default_language)
    }

    /// Resolve a code or display name to its flag URL only.
    pub fn get_flag_url(&self, identifier: &str) -> Result<String> {
        self.resolver().resolve_url(identifier)
    }

    pub fn get_random_flag(&self, language: Language) -> Result<ResolvedCountry> {
        self.get_random_flag_with(language, &mut OsIndexSource)
    }

    pub fn get_random_flag_with<S>(&self, language: Language, source: &mut S) -> Result<ResolvedCountry>
    where
        S: IndexSource + ?Sized,
    {
        random_flag(&self.tables, language, &self.config.base_url, source)
    }

    /// "Did you mean" sentence for `identifier`, if any name contains it.
    pub fn suggest(&self, identifier: &str) -> Option<String> {
        suggest(&self.tables, identifier)
    }
}

static GLOBAL: OnceLock<FlagService> = OnceLock::new();

/// Process-wide service, initialized once from the environment.
///
/// A bad environment (unparseable language, unreadable data directory) falls
/// back to the bundled tables with default settings and is logged.
pub fn global() -> &'static FlagService {
    GLOBAL.get_or_init(|| {
        let service = FlagConfig::from_env()
            .and_then(FlagService::from_config)
            .unwrap_or_else(|err| {
                warn!(error = %format!("{err:#}"), "falling back to bundled country tables");
                FlagService::bundled()
            });
        info!(
            languages = ?service.languages(),
            "country tables ready"
        );
        service
    })
}
