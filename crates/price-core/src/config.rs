//! Run configuration: where to look, what to match, where to write

use crate::error::{Error, Result};
use crate::headers::Synonyms;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default file mask for price lists
pub const DEFAULT_MASK: &str = "price*.csv";

/// Default HTML export destination
pub const DEFAULT_OUTPUT: &str = "output.html";

/// Everything a load needs, passed explicitly instead of held globally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceConfig {
    /// Directory tree to search for price files
    pub root: PathBuf,
    /// Shell-style mask matched against file names
    pub file_mask: String,
    /// Accepted header names per role
    pub synonyms: Synonyms,
    /// HTML export destination
    pub output: PathBuf,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            file_mask: DEFAULT_MASK.to_string(),
            synonyms: Synonyms::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl PriceConfig {
    /// Default configuration rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from JSON; absent fields keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
