//! Tendara Match - ranks procurement notices against subscriber search profiles
//!
//! The matching core is a two-stage pipeline: exact category + location
//! candidate selection, then tag overlap ranking against notice descriptions.
//! Storage and HTTP layers sit around it and are swappable.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{rank, select_candidates, tag_overlap_score, Matcher, MatchResult};
pub use models::{Notice, Profile, ScoredNotice, TagSet};
pub use services::{find_matches, InMemoryStore, MatchingError, NoticeStore, ProfileStore};
