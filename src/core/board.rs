//! Board configuration manifests.
//!
//! Boards ship as JSON manifests describing the target hardware. The
//! extraction operations only ever read a handful of leaves (notably
//! `build.mcu`), so the manifest is kept as a raw JSON tree with
//! dotted-path lookup rather than a typed schema.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A parsed board manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardConfig(Value);

impl BoardConfig {
    pub fn new(value: Value) -> Self {
        BoardConfig(value)
    }

    /// Read a board manifest from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board manifest {}", path.display()))?;
        let value: Value = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse board manifest {}", path.display()))?;
        Ok(BoardConfig(value))
    }

    /// Look up a value by dotted path, e.g. `build.mcu`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.0;
        for key in path.split('.') {
            current = current.as_object()?.get(key)?;
        }
        Some(current)
    }

    /// Look up a string value by dotted path.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }
}
