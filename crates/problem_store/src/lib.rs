//! # Problem Store
//!
//! Domain records for archived LeetCode problems and the storage layer that
//! persists raw API response bodies to disk.
//!
//! Bodies are written verbatim; the store never parses or rewrites what the
//! remote API returned.

mod domain;
mod store;

pub use domain::{ArtifactKind, ProblemStat};
pub use store::fs::FsArchiveStore;
pub use store::ArchiveStore;
