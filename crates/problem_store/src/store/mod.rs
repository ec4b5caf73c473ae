use std::{
    future::Future,
    path::{Path, PathBuf},
};

use crate::{ArtifactKind, ProblemStat};

pub mod fs;

pub trait ArchiveStore {
    /// Persists the raw problem index body, returns the written path
    fn save_problem_index(&self, body: &str) -> impl Future<Output = anyhow::Result<PathBuf>> + Send;

    /// Persists a raw question/solution body for `stat`, returns the written path
    fn save_artifact(
        &self,
        stat: &ProblemStat,
        kind: ArtifactKind,
        body: &str,
    ) -> impl Future<Output = anyhow::Result<PathBuf>> + Send;

    /// Reads back a previously stored file, relative to the archive root
    fn read_artifact(&self, relative_path: &Path) -> impl Future<Output = anyhow::Result<String>> + Send;
}

impl<T: ArchiveStore + Send + Sync> ArchiveStore for &T {
    async fn save_problem_index(&self, body: &str) -> anyhow::Result<PathBuf> {
        (**self).save_problem_index(body).await
    }

    async fn save_artifact(
        &self,
        stat: &ProblemStat,
        kind: ArtifactKind,
        body: &str,
    ) -> anyhow::Result<PathBuf> {
        (**self).save_artifact(stat, kind, body).await
    }

    async fn read_artifact(&self, relative_path: &Path) -> anyhow::Result<String> {
        (**self).read_artifact(relative_path).await
    }
}
