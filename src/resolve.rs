// SPDX-License-Identifier: PMPL-1.0-or-later

//! Identifier resolution.
//!
//! An identifier resolves in two steps:
//!
//! 1. **Direct code**: the normalized key is a code in the table being asked
//!    about. This wins over any name match, even one in that same table.
//! 2. **Name scan**: every loaded table, in language order, is checked for a
//!    display name whose lowercase form equals the key exactly. The first
//!    table with a hit decides the code; within a table the first entry wins.
//!
//! The resolved record always takes its display name from the requested
//! language, whichever table produced the match.

use crate::error::{FlagError, Result};
use crate::normalize::lookup_key;
use crate::suggest::suggest;
use crate::tables::{CountryTable, CountryTables};
use crate::types::{Language, ResolvedCountry};
use crate::url::flag_url;
use tracing::debug;

/// How a code was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Code,
    Name(Language),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeMatch<'a> {
    pub code: &'a str,
    pub kind: MatchKind,
}

/// Find the code for an already-normalized key.
///
/// `direct` is the table consulted for the code fast path; `None` skips
/// straight to the name scan.
pub fn find_code<'a>(
    tables: &'a CountryTables,
    direct: Option<&'a CountryTable>,
    key: &str,
) -> Option<CodeMatch<'a>> {
    if let Some(table) = direct {
        if let Some((code, _)) = table.lookup(key) {
            return Some(CodeMatch {
                code,
                kind: MatchKind::Code,
            });
        }
    }

    tables.iter().find_map(|table| {
        table.code_for_name(key).map(|code| CodeMatch {
            code,
            kind: MatchKind::Name(table.language()),
        })
    })
}

/// Resolves identifiers against one table set and one flag host.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    tables: &'a CountryTables,
    base_url: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(tables: &'a CountryTables, base_url: &'a str) -> Self {
        Self { tables, base_url }
    }

    /// Resolve `identifier` to a full record named in `language`.
    pub fn resolve(&self, identifier: &str, language: Language) -> Result<ResolvedCountry> {
        let key = lookup_key(identifier)?;
        let table = self
            .tables
            .get(language)
            .ok_or(FlagError::UnknownLanguage(language))?;

        let found = self.find_or_fail(identifier, Some(table), &key)?;
        let name = table.name(found.code).ok_or_else(|| FlagError::Untranslated {
            code: found.code.to_string(),
            language,
        })?;

        Ok(ResolvedCountry {
            name: name.to_string(),
            code: found.code.to_string(),
            url: flag_url(self.base_url, found.code),
        })
    }

    /// Resolve `identifier` to just its flag URL.
    ///
    /// The code fast path consults the English table when it is loaded;
    /// otherwise only the name scan runs.
    pub fn resolve_url(&self, identifier: &str) -> Result<String> {
        let key = lookup_key(identifier)?;
        let direct = self.tables.get(Language::ENGLISH);
        let found = self.find_or_fail(identifier, direct, &key)?;
        Ok(flag_url(self.base_url, found.code))
    }

    fn find_or_fail(
        &self,
        identifier: &str,
        direct: Option<&'a CountryTable>,
        key: &str,
    ) -> Result<CodeMatch<'a>> {
        match find_code(self.tables, direct, key) {
            Some(found) => {
                debug!(identifier, code = found.code, kind = ?found.kind, "country resolved");
                Ok(found)
            }
            None => {
                debug!(identifier, "country not found");
                Err(FlagError::CountryNotFound {
                    identifier: identifier.to_string(),
                    suggestion: suggest(self.tables, identifier),
                })
            }
        }
    }
}
