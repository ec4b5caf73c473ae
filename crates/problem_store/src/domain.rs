use std::path::PathBuf;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single entry of the LeetCode problem index (`stat_status_pairs[].stat`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemStat {
    /// User-facing sequential number shown on the website
    pub frontend_question_id: u32,
    /// Internal database identifier
    pub question_id: u32,
    #[serde(rename = "question__title_slug")]
    pub title_slug: String,
}

impl ProblemStat {
    pub fn new(frontend_question_id: u32, question_id: u32, title_slug: impl Into<String>) -> Self {
        Self {
            frontend_question_id,
            question_id,
            title_slug: title_slug.into(),
        }
    }

    /// Deterministic base name: `<frontend_id>.<internal_id>.<slug>`
    pub fn file_name(&self) -> String {
        [
            self.frontend_question_id.to_string(),
            self.question_id.to_string(),
            self.title_slug.clone(),
        ]
        .iter()
        .join(".")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Question,
    Solution,
}

impl ArtifactKind {
    pub const QUESTION_DATA_SUBDIR: &str = "problem_data";
    pub const SOLUTION_DATA_SUBDIR: &str = "solution_data";

    pub fn subdir(&self) -> &'static str {
        match self {
            ArtifactKind::Question => Self::QUESTION_DATA_SUBDIR,
            ArtifactKind::Solution => Self::SOLUTION_DATA_SUBDIR,
        }
    }

    /// Path of the artifact relative to the archive root
    pub fn relative_path(&self, stat: &ProblemStat) -> PathBuf {
        let file_name = match self {
            ArtifactKind::Question => stat.file_name(),
            ArtifactKind::Solution => format!("{}.solution", stat.file_name()),
        };

        PathBuf::from(self.subdir()).join(file_name)
    }
}
