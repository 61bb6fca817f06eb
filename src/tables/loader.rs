// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country table loading.
//!
//! Each language is loaded on its own: a table that cannot be read or parsed
//! is recorded as a [`TableLoadError`], logged, and left out, while the
//! remaining languages load normally.

use super::{CountryTable, CountryTables};
use crate::error::TableLoadError;
use crate::types::Language;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const BUNDLED: &[(Language, &str)] = &[
    (Language::English, include_str!("../../data/countries/en.json")),
    (Language::German, include_str!("../../data/countries/de.json")),
];

/// Tables that loaded plus the per-language failures that were skipped.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub tables: CountryTables,
    pub failures: Vec<TableLoadError>,
}

impl LoadOutcome {
    fn collect(results: Vec<Result<CountryTable, TableLoadError>>) -> Self {
        let mut loaded = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(table) => {
                    if table.is_empty() {
                        warn!(language = %table.language(), "country table has no entries");
                    }
                    debug!(language = %table.language(), entries = table.len(), "country table loaded");
                    loaded.push(table);
                }
                Err(err) => {
                    warn!(error = %err, "skipping country table");
                    failures.push(err);
                }
            }
        }

        let tables = CountryTables::new(loaded);
        for gap in tables.consistency_gaps() {
            warn!(
                language = %gap.language,
                missing = gap.missing.len(),
                codes = %gap.missing.join(","),
                "country table lacks codes present in other languages"
            );
        }
        Self { tables, failures }
    }

    pub fn into_tables(self) -> CountryTables {
        self.tables
    }
}

/// Parse one language's JSON object of `code -> display name`.
///
/// Entry order in the source is kept. The whole table is rejected if the
/// document is not an object or any name is not a string.
pub fn parse_table(language: Language, raw: &str) -> Result<CountryTable, TableLoadError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|source| TableLoadError::Parse { language, source })?;
    let Value::Object(map) = value else {
        return Err(TableLoadError::NotAnObject { language });
    };

    let mut entries = Vec::with_capacity(map.len());
    for (code, name) in map {
        match name {
            Value::String(name) => entries.push((code, name)),
            _ => return Err(TableLoadError::NonStringName { language, code }),
        }
    }
    Ok(CountryTable::from_entries(language, entries))
}

/// Load the tables compiled into the crate.
pub fn load_bundled() -> LoadOutcome {
    let results = BUNDLED
        .iter()
        .map(|(language, raw)| parse_table(*language, raw))
        .collect();
    LoadOutcome::collect(results)
}

/// Load every `<language-code>.json` file in `dir`.
///
/// Only an unreadable directory is an error. Individual files that fail,
/// directory entries that cannot be read, and files whose stem is not a
/// supported language code end up in [`LoadOutcome::failures`].
pub fn load_dir(dir: &Path) -> Result<LoadOutcome> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading country table directory {}", dir.display()))?
        .map(|entry| entry.map(|entry| entry.path()));
    Ok(LoadOutcome::collect(load_entries(dir, entries)))
}

/// Load the `.json` paths among `entries`, in path order. An entry that could
/// not be read becomes an `Io` failure against `dir`.
fn load_entries<I>(dir: &Path, entries: I) -> Vec<Result<CountryTable, TableLoadError>>
where
    I: IntoIterator<Item = std::io::Result<PathBuf>>,
{
    let mut failures = Vec::new();
    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if is_json(&path) => paths.push(path),
            Ok(_) => {}
            Err(source) => failures.push(Err(TableLoadError::Io {
                path: dir.to_path_buf(),
                source,
            })),
        }
    }
    paths.sort();

    paths
        .iter()
        .map(|path| load_file(path))
        .chain(failures)
        .collect()
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn load_file(path: &Path) -> Result<CountryTable, TableLoadError> {
    let language = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(Language::from_code)
        .ok_or_else(|| TableLoadError::UnknownLanguage {
            path: path.to_path_buf(),
        })?;
    let raw = fs::read_to_string(path).map_err(|source| TableLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(language, &raw)
}
