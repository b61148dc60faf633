use crate::models::{Notice, Profile, TagSet};
use std::borrow::Borrow;

/// Count description words that are profile tags
///
/// The description is lower-cased and split on whitespace only; punctuation
/// stays attached to its word. Every occurrence counts, so a tag appearing
/// three times contributes 3.
// TODO: distinct-word overlap and stopword removal are candidates once
// subscribers report noisy rankings; occurrence counting is kept until then.
#[inline]
pub fn tag_overlap_score(description: &str, tags: &TagSet) -> u32 {
    if tags.is_empty() || description.is_empty() {
        return 0;
    }

    let hits = description
        .to_lowercase()
        .split_whitespace()
        .filter(|word| tags.contains(word))
        .count();

    u32::try_from(hits).unwrap_or(u32::MAX)
}

/// Score candidates and order them by score, highest first
///
/// Candidates with equal scores keep their input order.
pub fn score_candidates<'a, N>(candidates: &'a [N], tags: &TagSet) -> Vec<(&'a Notice, u32)>
where
    N: Borrow<Notice>,
{
    let mut scored: Vec<(&'a Notice, u32)> = candidates
        .iter()
        .map(|candidate| {
            let notice: &Notice = candidate.borrow();
            (notice, tag_overlap_score(&notice.description, tags))
        })
        .collect();

    // sort_by is stable; ties stay in selector order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}

/// Rank candidates against the profile's tags
pub fn rank<'a, N>(candidates: &'a [N], profile: &Profile) -> Vec<&'a Notice>
where
    N: Borrow<Notice>,
{
    score_candidates(candidates, &profile.tags)
        .into_iter()
        .map(|(notice, _)| notice)
        .collect()
}
