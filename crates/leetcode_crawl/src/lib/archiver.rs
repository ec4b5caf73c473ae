pub mod builder;

use std::{collections::HashSet, ops::RangeInclusive, path::PathBuf};

use anyhow::Context;
use problem_store::{ArchiveStore, ArtifactKind, ProblemStat};

use crate::api::ProblemSource;

#[derive(Debug, Clone)]
pub struct ArchiveOptions {
    /// Frontend ids to archive, inclusive on both ends
    pub included: RangeInclusive<u32>,
    /// Frontend ids to skip even when inside `included`
    pub excluded: HashSet<u32>,
    pub include_question: bool,
    pub include_solution: bool,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            included: 0..=10_000,
            excluded: HashSet::new(),
            include_question: true,
            include_solution: true,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    pub index_path: PathBuf,
    pub matched: usize,
    pub questions_saved: usize,
    pub solutions_saved: usize,
}

/// Sequential LeetCode archiver: fetches the problem index, then the detail
/// bodies of every selected problem, one request at a time.
///
/// The first failure aborts the run; files written before it are left as is.
#[derive(Debug)]
pub struct ProblemArchiver<P, S>
where
    P: ProblemSource,
    S: ArchiveStore,
{
    source: P,
    store: S,
    options: ArchiveOptions,
}

impl<P, S> ProblemArchiver<P, S>
where
    P: ProblemSource,
    S: ArchiveStore,
{
    pub fn new(source: P, store: S, options: ArchiveOptions) -> Self {
        ProblemArchiver {
            source,
            store,
            options,
        }
    }

    pub fn options(&self) -> &ArchiveOptions {
        &self.options
    }

    /// Fetches and stores the enabled detail bodies of one problem.
    /// Returns the paths written, question first.
    #[tracing::instrument(skip(self, stat), fields(slug = %stat.title_slug))]
    pub async fn save_problem(
        &self,
        stat: &ProblemStat,
        include_question: bool,
        include_solution: bool,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(2);

        if include_question {
            let body = self
                .source
                .fetch_question_data(&stat.title_slug)
                .await
                .with_context(|| format!("Failed to fetch question data for {}", stat.title_slug))?;
            written.push(
                self.store
                    .save_artifact(stat, ArtifactKind::Question, &body)
                    .await?,
            );
        }

        if include_solution {
            let body = self
                .source
                .fetch_solution_data(&stat.title_slug)
                .await
                .with_context(|| format!("Failed to fetch solution data for {}", stat.title_slug))?;
            written.push(
                self.store
                    .save_artifact(stat, ArtifactKind::Solution, &body)
                    .await?,
            );
        }

        Ok(written)
    }

    /// Archives every problem whose frontend id lies in `included` and is not
    /// listed in `excluded`, in index order.
    #[tracing::instrument(skip(self, excluded))]
    pub async fn archive_all(
        &self,
        included: RangeInclusive<u32>,
        excluded: &HashSet<u32>,
    ) -> anyhow::Result<ArchiveReport> {
        let index = self
            .source
            .fetch_problem_list()
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to fetch problem index"))
            .context("Failed to fetch problem index")?;

        let index_path = self.store.save_problem_index(index.raw()).await?;

        let selected = index
            .iter()
            .filter(|p| !excluded.contains(&p.frontend_question_id))
            .filter(|p| included.contains(&p.frontend_question_id))
            .collect::<Vec<_>>();
        tracing::info!(
            total = index.len(),
            selected = selected.len(),
            "Archiving problems"
        );

        let mut report = ArchiveReport {
            index_path,
            matched: selected.len(),
            ..Default::default()
        };

        for stat in selected {
            self.save_problem(
                stat,
                self.options.include_question,
                self.options.include_solution,
            )
            .await?;

            if self.options.include_question {
                report.questions_saved += 1;
            }
            if self.options.include_solution {
                report.solutions_saved += 1;
            }
        }

        Ok(report)
    }

    /// Runs [`Self::archive_all`] with the configured range and exclusions
    pub async fn run(&self) -> anyhow::Result<ArchiveReport> {
        self.archive_all(self.options.included.clone(), &self.options.excluded)
            .await
    }
}
