mod api;
mod archiver;
mod error;
pub mod parser;
pub mod tracing;

pub use api::{client::LeetCodeClient, ProblemSource};
pub use archiver::{builder::ProblemArchiverBuilder, ArchiveOptions, ArchiveReport, ProblemArchiver};
pub use error::Error;
pub use parser::ProblemIndex;
