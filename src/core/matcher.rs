use crate::models::{Notice, Profile, ScoredNotice};
use crate::core::{ranking::score_candidates, selector::select_candidates};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredNotice>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Candidate selection by exact category and location
/// 2. Tag overlap scoring and ranking
///
/// The matcher holds no per-query state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    max_results: Option<usize>,
}

impl Matcher {
    pub fn new(max_results: Option<usize>) -> Self {
        Self { max_results }
    }

    /// Find the notices relevant to a profile
    ///
    /// # Arguments
    /// * `profile` - The subscriber's search profile
    /// * `corpus` - All notices, with their category and location links resolved
    ///
    /// # Returns
    /// MatchResult with the ranked notices and the number of candidates
    /// that survived selection
    pub fn find_matches(&self, profile: &Profile, corpus: &[Notice]) -> MatchResult {
        // Stage 1: category + location exactness filter
        let candidates = select_candidates(profile, corpus);
        let total_candidates = candidates.len();

        // Stage 2: score and order
        let mut matches: Vec<ScoredNotice> = score_candidates(&candidates, &profile.tags)
            .into_iter()
            .map(|(notice, match_score)| ScoredNotice {
                notice: notice.clone(),
                match_score,
            })
            .collect();

        if let Some(limit) = self.max_results {
            matches.truncate(limit);
        }

        MatchResult {
            matches,
            total_candidates,
        }
    }
}
