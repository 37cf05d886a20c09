//! Shared helpers for unit tests.

pub mod fixtures;

pub use fixtures::EnvFixture;
