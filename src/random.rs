// SPDX-License-Identifier: PMPL-1.0-or-later

//! Uniform random selection of a country from one language's table.

use crate::error::{FlagError, Result};
use crate::tables::CountryTables;
use crate::types::{Language, ResolvedCountry};
use crate::url::flag_url;

/// Source of uniformly distributed indices.
pub trait IndexSource {
    /// Return an index in `[0, upper)`. Callers guarantee `upper > 0`.
    fn index_below(&mut self, upper: usize) -> Result<usize>;
}

/// Operating-system entropy via `getrandom`, unseeded.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsIndexSource;

impl IndexSource for OsIndexSource {
    fn index_below(&mut self, upper: usize) -> Result<usize> {
        let upper = upper as u64;
        // Largest multiple of `upper` representable; draws at or above it are
        // discarded so no residue is favoured.
        let limit = u64::MAX - u64::MAX % upper;
        loop {
            let mut bytes = [0u8; 8];
            getrandom::getrandom(&mut bytes).map_err(|e| FlagError::Entropy(e.to_string()))?;
            let draw = u64::from_le_bytes(bytes);
            if draw < limit {
                return Ok((draw % upper) as usize);
            }
        }
    }
}

/// Pick a random entry of `language`'s table and build its record.
pub fn random_flag<S>(
    tables: &CountryTables,
    language: Language,
    base_url: &str,
    source: &mut S,
) -> Result<ResolvedCountry>
where
    S: IndexSource + ?Sized,
{
    let table = tables
        .get(language)
        .ok_or(FlagError::UnknownLanguage(language))?;
    if table.is_empty() {
        return Err(FlagError::EmptyTable(language));
    }

    let index = source.index_below(table.len())?;
    let (code, name) = table
        .entry(index)
        .ok_or(FlagError::EmptyTable(language))?;
    Ok(ResolvedCountry {
        name: name.to_string(),
        code: code.to_string(),
        url: flag_url(base_url, code),
    })
}
