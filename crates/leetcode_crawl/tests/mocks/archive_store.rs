use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use problem_store::{ArchiveStore, ArtifactKind, ProblemStat};

/// In-memory store keyed by the path relative to the archive root
#[derive(Clone, Default)]
pub struct MockArchiveStore {
    pub files: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub writes: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockArchiveStore {
    fn put(&self, path: PathBuf, body: &str) -> PathBuf {
        self.files
            .lock()
            .unwrap()
            .insert(path.clone(), body.to_string());
        self.writes.lock().unwrap().push(path.clone());
        path
    }

    pub fn written_under(&self, subdir: &str) -> Vec<PathBuf> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.starts_with(subdir))
            .cloned()
            .collect()
    }
}

impl ArchiveStore for MockArchiveStore {
    async fn save_problem_index(&self, body: &str) -> anyhow::Result<PathBuf> {
        Ok(self.put(PathBuf::from("problems"), body))
    }

    async fn save_artifact(
        &self,
        stat: &ProblemStat,
        kind: ArtifactKind,
        body: &str,
    ) -> anyhow::Result<PathBuf> {
        Ok(self.put(kind.relative_path(stat), body))
    }

    async fn read_artifact(&self, relative_path: &Path) -> anyhow::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(relative_path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing {}", relative_path.display()))
    }
}
