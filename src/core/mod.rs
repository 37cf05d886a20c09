//! Core data model: environment snapshots, variables, packages, board
//! manifests, debug tooling, and the IDE metadata records.

pub mod board;
pub mod env;
pub mod ide;
pub mod pkg;
pub mod subst;
pub mod tool;

pub use board::BoardConfig;
pub use env::{
    define_flags, BuildEnv, DEFINE_FLAGS_VAR, EnvSnapshot, SNAPSHOT_NAME, SnapshotError, Var,
};
pub use ide::{DebugInfo, DebugServer, IdeData};
pub use pkg::{InstalledPackage, LibBuilder, PackageKind};
pub use tool::{DebugToolSettings, ServerSettings};
