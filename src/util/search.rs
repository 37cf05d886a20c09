//! Executable resolution against an explicit search path.

use std::path::PathBuf;

/// Resolve a program name to an absolute executable path.
///
/// `search_path` is the PATH-like string recorded in the environment
/// snapshot; when it is absent the process's own `PATH` is searched
/// instead. An unresolvable program yields `None`, never an error;
/// IDE consumers treat a missing debugger or compiler as a degraded
/// state, not a fatal one.
pub fn where_is_program(program: &str, search_path: Option<&str>) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }

    let cwd = std::env::current_dir().ok()?;
    let found = match search_path {
        Some(paths) => which::which_in(program, Some(paths), cwd),
        None => which::which(program),
    };

    match found {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::debug!("could not resolve `{}`: {}", program, e);
            None
        }
    }
}
