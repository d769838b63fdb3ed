//! Domain logic - pure version rules independent of git operations

pub mod version;

pub use version::{Version, VersionBump, DEFAULT_PREFIX};
