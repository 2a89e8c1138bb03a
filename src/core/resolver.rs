//! Name Resolution
//!
//! Turns a typed, possibly partial package name into a concrete
//! [`ActionRequest`]: fetch candidates, rank them, let the user pick.

use crate::core::ranker::Ranker;
use crate::core::selector::Selector;
use crate::core::types::{
    Action, ActionFlag, ActionRequest, Candidate, ScoredCandidate, SelectionOutcome,
};
use crate::error::Result;
use crate::packages::CandidateFetcher;
use crate::utils::sanitize::validate_package_name;
use std::io::{BufRead, Write};

/// What a resolve call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A candidate was confirmed and is ready for dispatch
    Request(ActionRequest),
    /// Nothing to dispatch: cancelled or no match
    Outcome(SelectionOutcome),
}

pub struct Resolver {
    fetcher: CandidateFetcher,
    ranker: Ranker,
}

impl Resolver {
    pub fn new(fetcher: CandidateFetcher, ranker: Ranker) -> Self {
        Self { fetcher, ranker }
    }

    /// Fetch and rank candidates for `input` without prompting.
    pub fn search(&self, input: &str) -> Result<Vec<ScoredCandidate>> {
        let query = input.trim();
        validate_package_name(query)?;
        let candidates = self.fetcher.fetch(query)?;
        Ok(self.ranker.rank(query, &candidates))
    }

    pub fn resolve<R: BufRead, W: Write>(
        &self,
        input: &str,
        action: Action,
        flags: impl IntoIterator<Item = ActionFlag>,
        selector: &mut Selector<R, W>,
    ) -> Result<Resolution> {
        let query = input.trim();
        validate_package_name(query)?;

        let candidates = self.fetcher.fetch(query)?;
        tracing::debug!(query, action = %action, count = candidates.len(), "fetched candidates");

        if let Some(exact) = exact_match(query, &candidates) {
            tracing::info!(package = exact.name(), "exact match, skipping selection");
            return Ok(Resolution::Request(ActionRequest::new(action, exact.clone(), flags)));
        }

        let ranked = self.ranker.rank(query, &candidates);
        let selection = selector.select(&ranked)?;
        let outcome = selection.outcome();

        Ok(match selection.into_chosen() {
            Some(chosen) => {
                tracing::info!(package = chosen.name(), action = %action, "candidate confirmed");
                Resolution::Request(ActionRequest::new(action, chosen, flags))
            }
            None => {
                tracing::info!(query, ?outcome, "nothing selected");
                Resolution::Outcome(outcome)
            }
        })
    }
}

/// A candidate whose name is exactly the query; official entries come first
/// after deduplication, so the first hit wins.
fn exact_match<'a>(query: &str, candidates: &'a [Candidate]) -> Option<&'a Candidate> {
    candidates.iter().find(|c| c.name() == query)
}
