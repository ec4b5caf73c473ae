use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;

use crate::{
    api::ProblemSource,
    error::Error,
    parser::{parse_problem_list, ProblemIndex},
};

/// HTTP client for the public LeetCode API.
///
/// The session cookie is optional: anonymous requests succeed but premium
/// content is left out of the responses.
#[derive(Debug, Clone)]
pub struct LeetCodeClient {
    client: Client,
    base_url: String,
    cookie: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a> {
    operation_name: &'a str,
    variables: TitleSlugVariables<'a>,
    query: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TitleSlugVariables<'a> {
    title_slug: &'a str,
}

impl Default for LeetCodeClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl LeetCodeClient {
    pub const BASE_URL: &str = "https://leetcode.com";

    const QUESTION_DATA_QUERY: &str = include_str!("./queries/question_data.graphql");
    const QUESTION_NOTE_QUERY: &str = include_str!("./queries/question_note.graphql");

    pub fn new(cookie: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Self::BASE_URL.into(),
            cookie: cookie.filter(|c| !c.is_empty()),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_cookie(&self) -> bool {
        self.cookie.is_some()
    }

    fn with_cookie(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.cookie {
            Some(cookie) => request.header(reqwest::header::COOKIE, cookie),
            None => request,
        }
    }

    /// Reads the body and rejects anything but `200 OK`
    async fn read_body(operation: &'static str, resp: Response) -> Result<String, Error> {
        let status = resp.status();
        let body = resp.text().await?;

        if status != StatusCode::OK {
            tracing::error!(operation, status = status.as_u16(), "Unexpected response status");
            return Err(Error::Http {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    async fn post_graphql(&self, operation_name: &str, query: &str, title_slug: &str) -> Result<String, Error> {
        let body = GraphqlRequest {
            operation_name,
            variables: TitleSlugVariables { title_slug },
            query,
        };

        let resp = self
            .with_cookie(self.client.post(format!("{}/graphql", self.base_url)))
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        Self::read_body("graphql", resp).await
    }
}

impl ProblemSource for LeetCodeClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_problem_list(&self) -> Result<ProblemIndex, Error> {
        let resp = self
            .with_cookie(
                self.client
                    .get(format!("{}/api/problems/algorithms/", self.base_url)),
            )
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let body = Self::read_body("get_problems", resp).await?;
        let index = parse_problem_list(body)?;
        tracing::info!(count = index.len(), "Fetched problem index");

        Ok(index)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_question_data(&self, title_slug: &str) -> Result<String, Error> {
        self.post_graphql("questionData", Self::QUESTION_DATA_QUERY, title_slug)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_solution_data(&self, title_slug: &str) -> Result<String, Error> {
        self.post_graphql("QuestionNote", Self::QUESTION_NOTE_QUERY, title_slug)
            .await
    }
}
