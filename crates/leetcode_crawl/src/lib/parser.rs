//! # Problem Index Parser
//!
//! Decodes the body of `GET /api/problems/algorithms/` into typed
//! [`ProblemStat`] records while keeping the raw body around so it can be
//! archived verbatim.

use std::ops::Deref;

use problem_store::ProblemStat;
use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Deserialize)]
struct ProblemListResponse {
    stat_status_pairs: Vec<StatStatusPair>,
}

#[derive(Debug, Deserialize)]
struct StatStatusPair {
    stat: ProblemStat,
}

/// The problem index as returned by the API: the raw body plus its entries in
/// index order.
#[derive(Debug, Clone)]
pub struct ProblemIndex {
    raw: String,
    problems: Vec<ProblemStat>,
}

impl ProblemIndex {
    pub fn new(raw: impl Into<String>, problems: Vec<ProblemStat>) -> Self {
        Self {
            raw: raw.into(),
            problems,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn problems(&self) -> &[ProblemStat] {
        &self.problems
    }
}

impl Deref for ProblemIndex {
    type Target = [ProblemStat];

    fn deref(&self) -> &Self::Target {
        &self.problems
    }
}

/// Parses the `stat_status_pairs[].stat` entries out of the index body.
///
/// # Returns
/// * `Ok(ProblemIndex)` holding `body` unchanged and every entry in order.
/// * `Err(Error::Decode)` if the body is not JSON or any entry does not match
///   the expected shape; no partial list is ever returned.
#[tracing::instrument(skip_all, fields(bytes = body.len()))]
pub fn parse_problem_list(body: String) -> Result<ProblemIndex, Error> {
    let response = serde_json::from_str::<ProblemListResponse>(&body)?;

    let problems = response
        .stat_status_pairs
        .into_iter()
        .map(|pair| pair.stat)
        .collect::<Vec<_>>();

    Ok(ProblemIndex::new(body, problems))
}
