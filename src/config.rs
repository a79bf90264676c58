use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ChaosError, Result};
use crate::tags::TagScope;

/// Engine settings that are not scoring weights.
///
/// Weights live in `constants` and the archetype table; this only selects
/// behaviour that differs between call sites.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Teams scanned for tags when scoring a ticket
    pub tag_scope: TagScope,
}

impl EngineConfig {
    pub fn new(tag_scope: TagScope) -> Self {
        EngineConfig { tag_scope }
    }

    /// Parse a config document, e.g. `{"tagScope": "both_teams"}`.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(ChaosError::ConfigParse)
    }

    /// Read a config document from disk.
    pub fn read_from_file(filepath: impl AsRef<Path>) -> Result<Self> {
        let path = filepath.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ChaosError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            tag_scope = ?config.tag_scope,
            "loaded engine config"
        );
        Ok(config)
    }
}
