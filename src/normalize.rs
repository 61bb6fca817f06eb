// SPDX-License-Identifier: PMPL-1.0-or-later

//! Identifier normalization and validation.
//!
//! Lookup keys are the trimmed, lowercased form of whatever the caller typed.
//! Nothing else is folded: accents stay, and casing is plain Unicode
//! lowercase without locale rules.

use crate::error::{FlagError, Result};

/// Reduce a raw identifier to its lookup key.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Reject identifiers that can never name a country: any ASCII digit
/// disqualifies the input (`"fr4"`).
///
/// Blank input passes; it normalizes to the empty key, which matches no code
/// or name and so fails later as not found.
pub fn validate_identifier(raw: &str) -> Result<()> {
    if raw.chars().any(|c| c.is_ascii_digit()) {
        return Err(FlagError::InvalidIdentifier {
            identifier: raw.to_string(),
        });
    }
    Ok(())
}

/// Validate then normalize in one step.
pub fn lookup_key(raw: &str) -> Result<String> {
    validate_identifier(raw)?;
    Ok(normalize(raw))
}
