use thiserror::Error;

use crate::core::{Matcher, MatchResult};
use crate::services::store::{NoticeStore, ProfileStore, StoreError};

/// Errors from the find-matches operation
#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(i64),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Resolve a profile, load the corpus and rank it
///
/// An absent profile is reported before the corpus is touched. Storage
/// failures are returned unchanged.
pub async fn find_matches(
    profiles: &dyn ProfileStore,
    notices: &dyn NoticeStore,
    matcher: &Matcher,
    profile_id: i64,
) -> Result<MatchResult, MatchingError> {
    let profile = profiles
        .get_profile(profile_id)
        .await?
        .ok_or(MatchingError::ProfileNotFound(profile_id))?;

    let corpus = notices.all_notices().await?;

    tracing::debug!(
        "Matching profile {} (category {}, location {}, {} tags) against {} notices",
        profile.id,
        profile.category_id,
        profile.location_id,
        profile.tags.len(),
        corpus.len()
    );

    Ok(matcher.find_matches(&profile, &corpus))
}
