// SPDX-License-Identifier: PMPL-1.0-or-later

//! "Did you mean" suggestions for identifiers that did not resolve.
//!
//! Broader than resolution: a display name qualifies when its lowercase form
//! merely contains the normalized identifier. Every loaded language is
//! searched and names are listed as found, duplicates included.

use crate::normalize::normalize;
use crate::tables::CountryTables;

/// Display names across all languages containing `key` (already normalized),
/// in language order then table order.
pub fn candidates<'a>(tables: &'a CountryTables, key: &str) -> Vec<&'a str> {
    tables
        .iter()
        .flat_map(|table| table.names())
        .filter(|name| name.to_lowercase().contains(key))
        .collect()
}

/// Suggestion sentence for a raw identifier, or `None` when nothing is close.
pub fn suggest(tables: &CountryTables, identifier: &str) -> Option<String> {
    let key = normalize(identifier);
    let names = candidates(tables, &key);
    if names.is_empty() {
        None
    } else {
        Some(format!("Did you mean {}?", names.join(", ")))
    }
}
