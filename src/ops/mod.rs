//! High-level operations exposed to the CLI.

pub mod dump;

pub use dump::{dump_debug, dump_defines, dump_ide_data, dump_includes};
