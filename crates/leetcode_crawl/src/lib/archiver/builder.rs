use std::{collections::HashSet, ops::RangeInclusive};

use problem_store::ArchiveStore;

use crate::{api::ProblemSource, ArchiveOptions, ProblemArchiver};

pub struct ProblemArchiverBuilder<P = (), S = ()> {
    source: P,
    store: S,
    options: ArchiveOptions,
}

impl Default for ProblemArchiverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProblemArchiverBuilder {
    pub fn new() -> Self {
        Self {
            source: (),
            store: (),
            options: ArchiveOptions::default(),
        }
    }
}

impl<P, S> ProblemArchiverBuilder<P, S> {
    pub fn source<P2: ProblemSource>(self, source: P2) -> ProblemArchiverBuilder<P2, S> {
        ProblemArchiverBuilder {
            source,
            store: self.store,
            options: self.options,
        }
    }

    pub fn store<S2: ArchiveStore>(self, store: S2) -> ProblemArchiverBuilder<P, S2> {
        ProblemArchiverBuilder {
            source: self.source,
            store,
            options: self.options,
        }
    }

    pub fn options(mut self, options: ArchiveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn included(mut self, included: RangeInclusive<u32>) -> Self {
        self.options.included = included;
        self
    }

    pub fn excluded(mut self, excluded: impl IntoIterator<Item = u32>) -> Self {
        self.options.excluded = excluded.into_iter().collect::<HashSet<_>>();
        self
    }

    pub fn include_question(mut self, include_question: bool) -> Self {
        self.options.include_question = include_question;
        self
    }

    pub fn include_solution(mut self, include_solution: bool) -> Self {
        self.options.include_solution = include_solution;
        self
    }
}

impl<P, S> ProblemArchiverBuilder<P, S>
where
    P: ProblemSource,
    S: ArchiveStore,
{
    pub fn build(self) -> ProblemArchiver<P, S> {
        ProblemArchiver::new(self.source, self.store, self.options)
    }
}
