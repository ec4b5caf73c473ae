use std::sync::{Arc, Mutex};

use leetcode_crawl::{Error, ProblemIndex, ProblemSource};
use problem_store::ProblemStat;

#[derive(Clone)]
pub struct MockProblemSource {
    pub problems: Vec<ProblemStat>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub index_status: Option<u16>,
    pub failing_slug: Option<String>,
}

impl MockProblemSource {
    pub fn new(problems: Vec<ProblemStat>) -> Self {
        Self {
            problems,
            calls: Arc::new(Mutex::new(Vec::new())),
            index_status: None,
            failing_slug: None,
        }
    }

    /// Index endpoint answers with `status` instead of the list
    pub fn failing_index(status: u16) -> Self {
        Self {
            index_status: Some(status),
            ..Self::new(Vec::new())
        }
    }

    /// Detail queries for `slug` answer with a 500
    pub fn failing_on(mut self, slug: &str) -> Self {
        self.failing_slug = Some(slug.to_string());
        self
    }

    pub fn raw_index(&self) -> String {
        let pairs = self
            .problems
            .iter()
            .map(|stat| serde_json::json!({ "stat": stat }))
            .collect::<Vec<_>>();
        serde_json::json!({ "stat_status_pairs": pairs }).to_string()
    }

    fn detail(&self, operation: &str, title_slug: &str) -> Result<String, Error> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{operation}:{title_slug}"));

        if self.failing_slug.as_deref() == Some(title_slug) {
            return Err(Error::Http {
                operation: "graphql",
                status: 500,
                body: "internal error".to_string(),
            });
        }
        Ok(format!(r#"{{"data":{{"{operation}":"{title_slug}"}}}}"#))
    }
}

impl ProblemSource for MockProblemSource {
    async fn fetch_problem_list(&self) -> Result<ProblemIndex, Error> {
        self.calls.lock().unwrap().push("index".to_string());

        if let Some(status) = self.index_status {
            return Err(Error::Http {
                operation: "get_problems",
                status,
                body: "service unavailable".to_string(),
            });
        }
        Ok(ProblemIndex::new(self.raw_index(), self.problems.clone()))
    }

    async fn fetch_question_data(&self, title_slug: &str) -> Result<String, Error> {
        self.detail("question", title_slug)
    }

    async fn fetch_solution_data(&self, title_slug: &str) -> Result<String, Error> {
        self.detail("solution", title_slug)
    }
}
