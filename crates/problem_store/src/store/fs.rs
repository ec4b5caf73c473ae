use std::path::{Component, Path, PathBuf};

use anyhow::Context;

use crate::{store::ArchiveStore, ArtifactKind, ProblemStat};

/// Archive rooted at a local directory, `leetcode/` unless told otherwise.
///
/// Every write overwrites whatever is already at the target path, so re-running
/// an archive yields the same tree rather than accumulating copies.
#[derive(Debug, Clone)]
pub struct FsArchiveStore {
    root: PathBuf,
}

impl Default for FsArchiveStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROOT)
    }
}

impl FsArchiveStore {
    pub const DEFAULT_ROOT: &str = "leetcode";
    pub const PROBLEMS_FILE_NAME: &str = "problems";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `relative_path` onto the root, rejecting anything but plain
    /// path segments (`..`, absolute paths, prefixes)
    fn resolve(&self, relative_path: &Path) -> anyhow::Result<PathBuf> {
        if relative_path
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            anyhow::bail!("Refusing path outside archive root: {}", relative_path.display());
        }
        Ok(self.root.join(relative_path))
    }

    async fn write(&self, relative_path: &Path, body: &str) -> anyhow::Result<PathBuf> {
        let path = self.resolve(relative_path)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .inspect_err(|e| tracing::error!(error = ?e, dir = ?parent, "Failed to create directory"))
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        tokio::fs::write(&path, body)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, path = ?path, "Failed to write file"))
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::debug!(path = ?path, bytes = body.len(), "Wrote file");
        Ok(path)
    }
}

impl ArchiveStore for FsArchiveStore {
    async fn save_problem_index(&self, body: &str) -> anyhow::Result<PathBuf> {
        self.write(Path::new(Self::PROBLEMS_FILE_NAME), body).await
    }

    async fn save_artifact(
        &self,
        stat: &ProblemStat,
        kind: ArtifactKind,
        body: &str,
    ) -> anyhow::Result<PathBuf> {
        // the slug comes from the remote index and must stay a single file name
        if Path::new(&stat.file_name()).components().count() != 1 {
            anyhow::bail!("Invalid title slug for file name: {:?}", stat.title_slug);
        }
        self.write(&kind.relative_path(stat), body).await
    }

    async fn read_artifact(&self, relative_path: &Path) -> anyhow::Result<String> {
        let path = self.resolve(relative_path)?;

        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}
