use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Delimiter used when a profile's tags are persisted as a single string
pub const TAG_DELIMITER: char = ',';

/// A published procurement opportunity with its resolved category and location links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub buyer: Option<String>,
    #[serde(default)]
    pub volume: Option<i64>,
    #[serde(default)]
    pub publication_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub submission_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub categories: Vec<NoticeCategory>,
    #[serde(default)]
    pub locations: Vec<NoticeLocation>,
}

impl Notice {
    /// Category ids this notice is linked to, in link order (may repeat)
    pub fn category_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.categories.iter().map(|link| link.category_id)
    }

    /// Location ids this notice is linked to, in link order (may repeat)
    pub fn location_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.locations.iter().map(|link| link.location_id)
    }

    #[inline]
    pub fn has_category(&self, category_id: i64) -> bool {
        self.category_ids().any(|id| id == category_id)
    }

    #[inline]
    pub fn has_location(&self, location_id: i64) -> bool {
        self.location_ids().any(|id| id == location_id)
    }
}

/// Procurement category referenced by id from notices and profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: Option<String>,
}

/// Location referenced by id from notices and profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Association record linking one notice to one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoticeCategory {
    pub notice_id: i64,
    pub category_id: i64,
}

/// Association record linking one notice to one location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoticeLocation {
    pub notice_id: i64,
    pub location_id: i64,
}

/// Normalized, case-insensitive set of profile keywords
///
/// Tags are trimmed and lower-cased on construction; empty entries are dropped
/// and duplicates collapse. Iteration order is lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Parse a persisted tag string such as `"Solar, Energy,Renewable"`
    pub fn parse(raw: &str) -> Self {
        let mut tags = BTreeSet::new();
        insert_normalized(&mut tags, raw);
        Self(tags)
    }

    /// Build a tag set from individual tags. A tag containing the delimiter
    /// is split, so the set survives a round trip through `to_delimited`.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for tag in tags {
            insert_normalized(&mut set, tag.as_ref());
        }
        Self(set)
    }

    /// Membership test for an already lower-cased word
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Persisted form, joined with [`TAG_DELIMITER`]
    pub fn to_delimited(&self) -> String {
        let separator = TAG_DELIMITER.to_string();
        self.iter().collect::<Vec<_>>().join(separator.as_str())
    }
}

fn insert_normalized(set: &mut BTreeSet<String>, raw: &str) {
    for tag in raw.split(TAG_DELIMITER) {
        let tag = tag.trim();
        if !tag.is_empty() {
            set.insert(tag.to_lowercase());
        }
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        Self::from_tags(tags)
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0.into_iter().collect()
    }
}

/// A subscriber's saved search criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub category_id: i64,
    pub location_id: i64,
    pub tags: TagSet,
    #[serde(default)]
    pub publication_deadline: Option<NaiveDate>,
}

/// Fields needed to create a profile; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub category_id: i64,
    pub location_id: i64,
    pub tags: TagSet,
    pub publication_deadline: Option<NaiveDate>,
}

/// A ranked notice together with its tag overlap score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredNotice {
    #[serde(flatten)]
    pub notice: Notice,
    pub match_score: u32,
}
