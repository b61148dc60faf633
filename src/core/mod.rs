// Core algorithm exports
pub mod matcher;
pub mod ranking;
pub mod selector;

pub use matcher::{Matcher, MatchResult};
pub use ranking::{rank, score_candidates, tag_overlap_score};
pub use selector::select_candidates;
