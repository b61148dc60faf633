use crate::models::{Notice, Profile};
use std::borrow::Cow;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};

/// Select the notices linked to both the profile's category and its location
///
/// This is the first stage of the matching pipeline. The result is the
/// intersection of two id sets, so a notice carrying several qualifying links
/// is emitted once. Records sharing an id are merged into one notice holding
/// all of their links; scalar fields come from the first record. Output is
/// ordered by notice id ascending. Unknown ids simply select nothing.
pub fn select_candidates<'a>(profile: &Profile, corpus: &'a [Notice]) -> Vec<Cow<'a, Notice>> {
    let by_category: HashSet<i64> = corpus
        .iter()
        .filter(|notice| notice.has_category(profile.category_id))
        .map(|notice| notice.id)
        .collect();

    if by_category.is_empty() {
        return Vec::new();
    }

    let by_location: HashSet<i64> = corpus
        .iter()
        .filter(|notice| notice.has_location(profile.location_id))
        .map(|notice| notice.id)
        .collect();

    let matching_ids: HashSet<i64> = by_category.intersection(&by_location).copied().collect();

    let mut candidates: BTreeMap<i64, Cow<'a, Notice>> = BTreeMap::new();
    for notice in corpus.iter().filter(|notice| matching_ids.contains(&notice.id)) {
        match candidates.entry(notice.id) {
            Entry::Vacant(slot) => {
                slot.insert(Cow::Borrowed(notice));
            }
            Entry::Occupied(mut slot) => {
                let merged = slot.get_mut().to_mut();
                merged.categories.extend_from_slice(&notice.categories);
                merged.locations.extend_from_slice(&notice.locations);
            }
        }
    }

    candidates.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoticeCategory, NoticeLocation, TagSet};

    fn notice(id: i64, categories: &[i64], locations: &[i64]) -> Notice {
        Notice {
            id,
            title: format!("Notice {}", id),
            description: String::new(),
            buyer: None,
            volume: None,
            publication_deadline: None,
            submission_deadline: None,
            categories: categories
                .iter()
                .map(|&category_id| NoticeCategory { notice_id: id, category_id })
                .collect(),
            locations: locations
                .iter()
                .map(|&location_id| NoticeLocation { notice_id: id, location_id })
                .collect(),
        }
    }

    fn profile(category_id: i64, location_id: i64) -> Profile {
        Profile {
            id: 1,
            category_id,
            location_id,
            tags: TagSet::default(),
            publication_deadline: None,
        }
    }

    fn ids(notices: &[Cow<'_, Notice>]) -> Vec<i64> {
        notices.iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_exact_category_and_location() {
        let corpus = vec![notice(1, &[2], &[2]), notice(2, &[3], &[3]), notice(3, &[1], &[1])];

        let selected = select_candidates(&profile(3, 3), &corpus);

        assert_eq!(ids(&selected), vec![2]);
    }

    #[test]
    fn test_requires_both_links() {
        let corpus = vec![
            notice(1, &[3], &[1]), // right category, wrong location
            notice(2, &[1], &[3]), // wrong category, right location
            notice(3, &[3], &[]),  // no location link at all
        ];

        assert!(select_candidates(&profile(3, 3), &corpus).is_empty());
    }

    #[test]
    fn test_links_on_different_notices_do_not_combine() {
        let corpus = vec![notice(1, &[5], &[]), notice(2, &[], &[9])];

        assert!(select_candidates(&profile(5, 9), &corpus).is_empty());
    }

    #[test]
    fn test_no_duplicates_for_repeated_links() {
        let corpus = vec![
            notice(4, &[3, 3, 7], &[2, 2]),
            notice(4, &[3], &[2]),
            notice(5, &[3], &[2, 8]),
        ];

        let selected = select_candidates(&profile(3, 2), &corpus);

        assert_eq!(ids(&selected), vec![4, 5]);
    }

    #[test]
    fn test_split_records_are_merged() {
        let corpus = vec![notice(4, &[3], &[]), notice(4, &[], &[2]), notice(6, &[3], &[])];

        let selected = select_candidates(&profile(3, 2), &corpus);

        assert_eq!(ids(&selected), vec![4]);
        assert!(selected.iter().all(|n| n.has_category(3) && n.has_location(2)));
        assert_eq!(selected[0].title, "Notice 4");
    }

    #[test]
    fn test_single_record_is_borrowed() {
        let corpus = vec![notice(1, &[1], &[1])];

        let selected = select_candidates(&profile(1, 1), &corpus);

        assert!(matches!(selected[0], Cow::Borrowed(_)));
    }

    #[test]
    fn test_emits_in_id_order() {
        let corpus = vec![notice(9, &[1], &[1]), notice(2, &[1], &[1]), notice(5, &[1], &[1])];

        let selected = select_candidates(&profile(1, 1), &corpus);

        assert_eq!(ids(&selected), vec![2, 5, 9]);
    }

    #[test]
    fn test_unknown_ids_select_nothing() {
        let corpus = vec![notice(1, &[1], &[1])];

        assert!(select_candidates(&profile(42, 42), &corpus).is_empty());
        assert!(select_candidates(&profile(1, 1), &[]).is_empty());
    }
}
