//! IDE metadata records.
//!
//! The JSON documents handed to editors and IDE plugins. Every field is
//! always present in the output; values that could not be resolved
//! serialize as `null` rather than being omitted, so consumers can rely
//! on a fixed shape.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The full IDE metadata record for one build environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeData {
    /// Library source directories, substituted.
    pub libsource_dirs: Vec<PathBuf>,

    /// Preprocessor defines, unescaped (`NAME` or `NAME=VALUE`).
    pub defines: Vec<String>,

    /// Include search directories: explicit paths first, then library
    /// builder directories, then toolchain header directories.
    pub includes: Vec<PathBuf>,

    /// Debug session descriptor; `null` when debugging is unconfigured.
    pub debug: Option<DebugInfo>,

    /// Rendered C compiler flag string, with defines escaped for
    /// shell-style consumers.
    pub cc_flags: String,

    /// Rendered C++ compiler flag string, escaped like `cc_flags`.
    pub cxx_flags: String,

    /// Resolved C compiler path; `null` when not found on the search path.
    pub cc_path: Option<PathBuf>,

    /// Resolved C++ compiler path; `null` when not found.
    pub cxx_path: Option<PathBuf>,
}

/// Debug session descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    /// Resolved debugger client path; `null` when not found.
    pub gdb_path: Option<PathBuf>,

    /// Program image path, substituted but not checked for existence.
    pub prog_path: String,

    /// Debug tool identifier.
    pub tool: Option<String>,

    /// Debugger initialization commands.
    pub gdbinit: Option<Vec<String>>,

    /// Debug port; empty when none was configured or detected.
    pub port: String,

    /// Debug server launch block; `null` when no usable server exists.
    pub server: Option<DebugServer>,
}

/// Debug server launch block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugServer {
    /// Working directory: the server package's installed directory.
    pub cwd: PathBuf,

    /// Server executable, path separators normalized for the host.
    pub executable: String,

    /// Launch arguments, separators normalized.
    pub arguments: Option<Vec<String>>,
}
