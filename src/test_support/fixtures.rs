//! Builders for in-memory environment snapshots used across unit tests.

use std::path::Path;

use serde_json::Value;

use crate::core::board::BoardConfig;
use crate::core::env::{EnvSnapshot, Var};
use crate::core::pkg::{InstalledPackage, LibBuilder, PackageKind};
use crate::core::tool::DebugToolSettings;

/// Fluent builder for [`EnvSnapshot`] values.
#[derive(Default)]
pub struct EnvFixture {
    snapshot: EnvSnapshot,
}

impl EnvFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platform(mut self, name: &str) -> Self {
        self.snapshot.platform = Some(name.to_string());
        self
    }

    pub fn var(mut self, name: &str, value: impl Into<Var>) -> Self {
        self.snapshot.vars.insert(name.to_string(), value.into());
        self
    }

    /// Set the environment's `PATH` view.
    pub fn search_path(mut self, path: &str) -> Self {
        self.snapshot
            .environment
            .insert("PATH".to_string(), path.to_string());
        self
    }

    pub fn package(mut self, name: &str, kind: PackageKind, dir: Option<&Path>) -> Self {
        self.snapshot.packages.push(InstalledPackage {
            name: name.to_string(),
            kind,
            dir: dir.map(Path::to_path_buf),
        });
        self
    }

    pub fn lib_builder(mut self, name: &str, include_dirs: &[&Path]) -> Self {
        self.snapshot.lib_builders.push(LibBuilder {
            name: name.to_string(),
            include_dirs: include_dirs.iter().map(|d| d.to_path_buf()).collect(),
        });
        self
    }

    pub fn board(mut self, manifest: Value) -> Self {
        self.snapshot.board = Some(BoardConfig::new(manifest));
        self
    }

    pub fn debug_tool(mut self, tool: DebugToolSettings) -> Self {
        self.snapshot.debug_tool = Some(tool);
        self
    }

    pub fn build(self) -> EnvSnapshot {
        self.snapshot
    }
}
