//! Shared utilities

pub mod paths;
pub mod search;

pub use paths::{fix_path_sep, fix_path_seps, toolchain_include_patterns};
pub use search::where_is_program;
