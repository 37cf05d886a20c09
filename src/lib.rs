//! boardwalk: IDE metadata exporter for embedded build environments.
//!
//! Takes a snapshot of a configured embedded build environment and
//! projects it into the JSON record editor integrations consume:
//! include search paths, preprocessor defines, compiler flag strings
//! and executable paths, and a debugger launch descriptor.
//!
//! The library is organized into three layers:
//! - [`core`]: the environment snapshot model, variable substitution,
//!   and the output record types.
//! - [`ops`]: the extraction operations that turn a snapshot into a
//!   record.
//! - [`util`]: path normalization and executable lookup helpers.

pub mod core;
pub mod ops;
pub mod util;

#[cfg(test)]
pub mod test_support;

pub use crate::core::env::{BuildEnv, EnvSnapshot, SnapshotError, Var};
pub use crate::core::ide::{DebugInfo, DebugServer, IdeData};
pub use crate::ops::dump::{dump_debug, dump_defines, dump_ide_data, dump_includes};
