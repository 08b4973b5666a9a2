use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// Influence categories as they appear in the page's descriptors. A couple
/// of terms keep their trailing separator because the bare word also shows
/// up in descriptors that are not influence income.
pub const INFLUENCE_DESCRIPTORS: &[&str] = &[
    "Trasporti",
    "Finanza-",
    "Giustizia",
    "Polizia",
    "Occulto",
    "Burocrazia",
    "Malavita",
    "Politica",
    "Media-",
    "Industria",
    "Strada",
    "Università",
    "Alta Società",
];

pub const PASSIVE_DESCRIPTORS: &[&str] = &["passive"];

/// Descriptor substrings used to slice the monthly series. Immutable for
/// the duration of a report build; constructed from the built-in lists or a
/// JSON config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default = "default_influence")]
    pub influence: Vec<String>,
    #[serde(default = "default_passive")]
    pub passive: Vec<String>,
}

fn default_influence() -> Vec<String> {
    INFLUENCE_DESCRIPTORS.iter().map(|s| s.to_string()).collect()
}

fn default_passive() -> Vec<String> {
    PASSIVE_DESCRIPTORS.iter().map(|s| s.to_string()).collect()
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            influence: default_influence(),
            passive: default_passive(),
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("vcp-ledger")
}

pub fn default_config_path() -> PathBuf {
    config_dir().join("categories.json")
}

fn read_categories(path: &Path) -> Result<Categories> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| LedgerError::Config(format!("{}: {e}", path.display())))
}

/// Load the category config: an explicit path must exist and parse; with no
/// path, the file in the config dir is used when present, else the built-in
/// defaults. A malformed file is always an error rather than a silent
/// fallback, since wrong terms would misclassify every month.
pub fn load_categories(path: Option<&str>) -> Result<Categories> {
    match path {
        Some(p) => read_categories(&PathBuf::from(p)),
        None => {
            let p = default_config_path();
            if p.exists() {
                read_categories(&p)
            } else {
                Ok(Categories::default())
            }
        }
    }
}

/// Write the built-in defaults to the config dir as a starting point for
/// local edits. Returns the written path.
pub fn write_default_config() -> Result<PathBuf> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let path = default_config_path();
    let json = serde_json::to_string_pretty(&Categories::default())
        .map_err(|e| LedgerError::Config(e.to_string()))?;
    std::fs::write(&path, format!("{json}\n"))?;
    Ok(path)
}
