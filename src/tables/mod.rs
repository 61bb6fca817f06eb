// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory country tables.
//!
//! A [`CountryTable`] maps lowercase country codes to display names for one
//! language, keeping the source order of its entries. [`CountryTables`] is the
//! immutable set of all loaded languages, ordered by [`Language::all`]. Both
//! are built once and only read afterwards.
//!
//! Each table also carries a reverse index from lowercased display name to the
//! first entry with that name, so exact-name resolution does not rescan the
//! table. Substring matching for suggestions still walks the entries.

pub mod loader;

pub use loader::{load_bundled, load_dir, parse_table, LoadOutcome};

use crate::types::Language;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Display names for one language, keyed by country code.
#[derive(Debug, Clone)]
pub struct CountryTable {
    language: Language,
    entries: Vec<(String, String)>,
    by_code: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl CountryTable {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            entries: Vec::new(),
            by_code: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Build a table from `(code, name)` pairs in iteration order.
    ///
    /// Codes are lowercased. A code that repeats after lowercasing keeps its
    /// first name.
    pub fn from_entries<I, C, N>(language: Language, entries: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: Into<String>,
    {
        let mut table = Self::new(language);
        for (code, name) in entries {
            table.push(code.as_ref(), name.into());
        }
        table
    }

    fn push(&mut self, code: &str, name: String) {
        let code = code.trim().to_lowercase();
        if self.by_code.contains_key(&code) {
            warn!(language = %self.language, code = %code, "duplicate country code ignored");
            return;
        }
        let index = self.entries.len();
        self.by_code.insert(code.clone(), index);
        self.by_name.entry(name.to_lowercase()).or_insert(index);
        self.entries.push((code, name));
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Stored `(code, name)` entry for an already-lowercase code.
    pub fn lookup(&self, code: &str) -> Option<(&str, &str)> {
        self.by_code.get(code).and_then(|&index| self.entry(index))
    }

    /// Display name for an already-lowercase code.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(code)
            .map(|&index| self.entries[index].1.as_str())
    }

    /// Code of the first entry whose lowercased name equals `key` exactly.
    pub fn code_for_name(&self, key: &str) -> Option<&str> {
        self.by_name
            .get(key)
            .map(|&index| self.entries[index].0.as_str())
    }

    /// Entry at `index` in source order.
    pub fn entry(&self, index: usize) -> Option<(&str, &str)> {
        self.entries
            .get(index)
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    /// `(code, name)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(_, name)| name.as_str())
    }
}

/// Codes that some loaded table has but `language`'s table lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyGap {
    pub language: Language,
    pub missing: Vec<String>,
}

/// The loaded table set, one table per language, in [`Language::all`] order.
#[derive(Debug, Clone, Default)]
pub struct CountryTables {
    tables: Vec<CountryTable>,
}

impl CountryTables {
    /// Collect tables into a set. When two tables share a language the later
    /// one replaces the earlier.
    pub fn new<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = CountryTable>,
    {
        let mut collected: Vec<CountryTable> = Vec::new();
        for table in tables {
            if let Some(existing) = collected
                .iter_mut()
                .find(|t| t.language() == table.language())
            {
                warn!(language = %table.language(), "duplicate country table replaced");
                *existing = table;
            } else {
                collected.push(table);
            }
        }
        collected.sort_by_key(|table| table.language());
        Self { tables: collected }
    }

    pub fn get(&self, language: Language) -> Option<&CountryTable> {
        self.tables.iter().find(|table| table.language() == language)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryTable> {
        self.tables.iter()
    }

    pub fn languages(&self) -> Vec<Language> {
        self.tables.iter().map(CountryTable::language).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Per-language list of codes present elsewhere but missing here.
    ///
    /// Tables are expected to share one code set; this reports where they do
    /// not. Languages with no gaps are omitted.
    pub fn consistency_gaps(&self) -> Vec<ConsistencyGap> {
        let mut seen = HashSet::new();
        let mut all_codes: Vec<&str> = Vec::new();
        for table in &self.tables {
            for code in table.codes() {
                if seen.insert(code) {
                    all_codes.push(code);
                }
            }
        }

        self.tables
            .iter()
            .filter_map(|table| {
                let missing: Vec<String> = all_codes
                    .iter()
                    .filter(|code| !table.contains_code(code))
                    .map(|code| code.to_string())
                    .collect();
                (!missing.is_empty()).then(|| ConsistencyGap {
                    language: table.language(),
                    missing,
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a CountryTables {
    type Item = &'a CountryTable;
    type IntoIter = std::slice::Iter<'a, CountryTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}
