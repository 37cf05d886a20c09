//! Command implementations

pub mod completions;
pub mod defines;
pub mod dump;
pub mod includes;
