// SPDX-License-Identifier: PMPL-1.0-or-later

//! Service configuration: flag host, default language and table source.

use crate::types::Language;
use crate::url::DEFAULT_BASE_URL;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const BASE_URL_ENV: &str = "FLAGFINDER_BASE_URL";
pub const LANGUAGE_ENV: &str = "FLAGFINDER_LANGUAGE";
pub const DATA_DIR_ENV: &str = "FLAGFINDER_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagConfig {
    /// Prefix every flag URL starts with.
    pub base_url: String,
    /// Language used by calls that do not name one.
    pub default_language: Language,
    /// Directory of `<language>.json` tables. `None` uses the bundled tables.
    pub data_dir: Option<PathBuf>,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_language: Language::default(),
            data_dir: None,
        }
    }
}

impl FlagConfig {
    /// Read a JSON or YAML config file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading flagfinder config {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display())),
            _ => Err(anyhow!(
                "unsupported config extension for {}",
                path.display()
            )),
        }
    }

    /// Defaults overlaid with `FLAGFINDER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup; empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(base_url) = get(BASE_URL_ENV) {
            self.base_url = base_url;
        }
        if let Some(code) = get(LANGUAGE_ENV) {
            self.default_language = Language::from_code(&code)
                .ok_or_else(|| anyhow!("{LANGUAGE_ENV}: unsupported language code {code:?}"))?;
        }
        if let Some(dir) = get(DATA_DIR_ENV) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        Ok(self)
    }
}
