// SPDX-License-Identifier: PMPL-1.0-or-later

//! Flag image URLs.
//!
//! URLs are assembled purely syntactically: base, code, `.webp`. Nothing is
//! escaped and nothing is fetched.

/// Image host used when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.welt-flaggen.de/data/flags/h160/";

pub const FLAG_EXTENSION: &str = ".webp";

pub fn flag_url(base_url: &str, code: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + code.len() + FLAG_EXTENSION.len());
    url.push_str(base_url);
    url.push_str(code);
    url.push_str(FLAG_EXTENSION);
    url
}
