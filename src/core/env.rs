//! Build environment snapshots.
//!
//! The host build system configures a project environment (variables,
//! installed packages, board metadata, debug tooling) and writes it out
//! as a snapshot file. This module defines the [`BuildEnv`] interface
//! that the extraction operations consume, and [`EnvSnapshot`], the
//! concrete implementation backed by a `boardwalk.toml` file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::board::BoardConfig;
use crate::core::pkg::{InstalledPackage, LibBuilder, PackageKind};
use crate::core::subst::substitute;
use crate::core::tool::DebugToolSettings;

/// File name of an environment snapshot.
pub const SNAPSHOT_NAME: &str = "boardwalk.toml";

/// Derived variable rendering the define list as compiler flags.
///
/// Not stored in the variable table; the substitution layer synthesizes
/// it from the current defines so that flag templates like
/// `$CFLAGS $_CPPDEFFLAGS` stay in sync with the define list.
pub const DEFINE_FLAGS_VAR: &str = "_CPPDEFFLAGS";

/// Render a define list as `-D` compiler-flag fragments.
pub fn define_flags(defines: &[String]) -> String {
    defines
        .iter()
        .map(|d| format!("-D{}", d))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A build-environment variable value: a scalar or an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Var {
    Str(String),
    List(Vec<String>),
}

impl Var {
    /// Render as a single string; lists join with single spaces.
    pub fn render(&self) -> String {
        match self {
            Var::Str(s) => s.clone(),
            Var::List(items) => items.join(" "),
        }
    }

    /// Normalize to a list; a scalar becomes a one-element list.
    pub fn into_list(self) -> Vec<String> {
        match self {
            Var::Str(s) => vec![s],
            Var::List(items) => items,
        }
    }
}

impl From<&str> for Var {
    fn from(value: &str) -> Self {
        Var::Str(value.to_string())
    }
}

impl From<String> for Var {
    fn from(value: String) -> Self {
        Var::Str(value)
    }
}

impl From<Vec<String>> for Var {
    fn from(value: Vec<String>) -> Self {
        Var::List(value)
    }
}

impl From<Vec<&str>> for Var {
    fn from(value: Vec<&str>) -> Self {
        Var::List(value.into_iter().map(str::to_string).collect())
    }
}

/// Read-side interface over a configured build environment.
///
/// The extraction operations in [`crate::ops::dump`] are written against
/// this trait so tests can substitute purpose-built environments. The
/// only mutating operation is [`BuildEnv::autodetect_debug_port`], an
/// idempotent side effect the host build system also performs before
/// debug sessions.
pub trait BuildEnv {
    /// Look up a single variable binding.
    fn var(&self, name: &str) -> Option<Var>;

    /// Raw explicit include-path entries (may contain variable references).
    fn include_paths(&self) -> Vec<String>;

    /// Raw preprocessor define entries (`NAME` or `NAME=VALUE`).
    fn defines(&self) -> Vec<String>;

    /// Raw library-source directory entries.
    fn libsource_dirs(&self) -> Vec<String>;

    /// Registered library builders, in registration order.
    fn lib_builders(&self) -> &[LibBuilder];

    /// Names of installed packages.
    fn installed_packages(&self) -> Vec<String>;

    /// Type tag of an installed package.
    fn package_kind(&self, name: &str) -> Option<PackageKind>;

    /// Installed directory of a package, when resolvable.
    fn package_dir(&self, name: &str) -> Option<PathBuf>;

    /// Declared platform identifier (e.g. `atmelavr`).
    fn platform_name(&self) -> Option<&str>;

    /// Board configuration manifest, when one is attached.
    fn board_config(&self) -> Option<&BoardConfig>;

    /// Active debug-tool settings, when configured.
    fn debug_tool_settings(&self) -> Option<&DebugToolSettings>;

    /// Fill the `DEBUG_PORT` variable from the active debug-tool
    /// settings unless a non-empty port is already set. Idempotent.
    fn autodetect_debug_port(&mut self);

    /// The environment's view of the PATH-like search path used to
    /// resolve executables.
    fn search_path(&self) -> Option<String>;

    /// Expand variable references in `template`.
    fn subst(&self, template: &str) -> String {
        self.subst_with(template, &[])
    }

    /// Expand variable references, with `overrides` taking precedence
    /// over stored bindings. Used by the define-escaping post-pass to
    /// re-render flag templates against a rewritten define list.
    fn subst_with(&self, template: &str, overrides: &[(&str, String)]) -> String {
        substitute(template, &|name: &str| {
            if let Some((_, value)) = overrides.iter().find(|(n, _)| *n == name) {
                return Some(value.clone());
            }
            if name == DEFINE_FLAGS_VAR {
                return Some(define_flags(&self.defines()));
            }
            self.var(name).map(|v| v.render())
        })
    }
}

/// Failure to locate or parse an environment snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("no environment snapshot found: searched for `boardwalk.toml` upward from {}", dir.display())]
    NotFound { dir: PathBuf },

    #[error("failed to read environment snapshot: {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse environment snapshot: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// An owned snapshot of a configured build environment.
///
/// Everything the extraction operations need, captured at the point the
/// host build system finished configuring a project: variable bindings,
/// the platform identifier, the process-environment view, installed
/// packages, registered library builders, the board manifest, and the
/// active debug-tool settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvSnapshot {
    /// Declared platform identifier.
    pub platform: Option<String>,

    /// Variable bindings.
    pub vars: HashMap<String, Var>,

    /// Process-environment view (`PATH` and friends).
    pub environment: HashMap<String, String>,

    /// Installed packages, with type tags and directories.
    pub packages: Vec<InstalledPackage>,

    /// Library builders, in registration order.
    pub lib_builders: Vec<LibBuilder>,

    /// Board configuration manifest.
    pub board: Option<BoardConfig>,

    /// Active debug-tool settings.
    pub debug_tool: Option<DebugToolSettings>,
}

impl EnvSnapshot {
    /// Load a snapshot from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let contents = std::fs::read_to_string(path).map_err(|source| {
            SnapshotError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&contents).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find a snapshot file by walking upward from `start`.
    pub fn find(start: &Path) -> Result<PathBuf, SnapshotError> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(SNAPSHOT_NAME);
            if candidate.is_file() {
                return Ok(candidate);
            }
            if !current.pop() {
                return Err(SnapshotError::NotFound {
                    dir: start.to_path_buf(),
                });
            }
        }
    }

    /// List entries of a variable, treating a scalar as one entry.
    fn var_list(&self, name: &str) -> Vec<String> {
        self.vars
            .get(name)
            .cloned()
            .map(Var::into_list)
            .unwrap_or_default()
    }
}

impl BuildEnv for EnvSnapshot {
    fn var(&self, name: &str) -> Option<Var> {
        self.vars.get(name).cloned()
    }

    fn include_paths(&self) -> Vec<String> {
        self.var_list("CPPPATH")
    }

    fn defines(&self) -> Vec<String> {
        self.var_list("CPPDEFINES")
    }

    fn libsource_dirs(&self) -> Vec<String> {
        self.var_list("LIBSOURCE_DIRS")
    }

    fn lib_builders(&self) -> &[LibBuilder] {
        &self.lib_builders
    }

    fn installed_packages(&self) -> Vec<String> {
        self.packages.iter().map(|p| p.name.clone()).collect()
    }

    fn package_kind(&self, name: &str) -> Option<PackageKind> {
        self.packages
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.kind)
    }

    fn package_dir(&self, name: &str) -> Option<PathBuf> {
        self.packages
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.dir.clone())
    }

    fn platform_name(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    fn board_config(&self) -> Option<&BoardConfig> {
        self.board.as_ref()
    }

    fn debug_tool_settings(&self) -> Option<&DebugToolSettings> {
        self.debug_tool.as_ref()
    }

    fn autodetect_debug_port(&mut self) {
        let current = self
            .vars
            .get("DEBUG_PORT")
            .map(Var::render)
            .unwrap_or_default();
        if !current.is_empty() {
            return;
        }

        if let Some(port) = self.debug_tool.as_ref().and_then(|t| t.port.clone()) {
            tracing::debug!("autodetected debug port: {}", port);
            self.vars.insert("DEBUG_PORT".to_string(), Var::Str(port));
        }
    }

    fn search_path(&self) -> Option<String> {
        self.environment.get("PATH").cloned()
    }
}
