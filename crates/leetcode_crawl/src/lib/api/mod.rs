pub mod client;

use std::future::Future;

use crate::{error::Error, parser::ProblemIndex};

/// Read side of the LeetCode API.
///
/// Every operation succeeds only on `200 OK`; anything else surfaces as
/// [`Error::Http`] carrying the status and body.
pub trait ProblemSource {
    fn fetch_problem_list(&self) -> impl Future<Output = Result<ProblemIndex, Error>>;

    /// Raw body of the `questionData` query for `title_slug`
    fn fetch_question_data(&self, title_slug: &str) -> impl Future<Output = Result<String, Error>>;

    /// Raw body of the `QuestionNote` query for `title_slug`
    fn fetch_solution_data(&self, title_slug: &str) -> impl Future<Output = Result<String, Error>>;
}

impl<T: ProblemSource> ProblemSource for &T {
    async fn fetch_problem_list(&self) -> Result<ProblemIndex, Error> {
        (**self).fetch_problem_list().await
    }

    async fn fetch_question_data(&self, title_slug: &str) -> Result<String, Error> {
        (**self).fetch_question_data(title_slug).await
    }

    async fn fetch_solution_data(&self, title_slug: &str) -> Result<String, Error> {
        (**self).fetch_solution_data(title_slug).await
    }
}
