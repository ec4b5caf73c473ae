pub mod archive_store;
pub mod problem_source;
