use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::{Category, Location, NewProfile, Notice, NoticeCategory, NoticeLocation, Profile};
use crate::services::store::{NoticeStore, ProfileStore, StoreError};

/// In-process store implementing both storage traits
///
/// Used for tests, benchmarks and embedding the matcher without a database.
/// Readers get cloned snapshots, so a running query never observes a
/// concurrent write.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    notices: BTreeMap<i64, Notice>,
    categories: BTreeMap<i64, Category>,
    locations: BTreeMap<i64, Location>,
    profiles: BTreeMap<i64, Profile>,
    last_profile_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_category(&self, category: Category) {
        self.inner.write().await.categories.insert(category.id, category);
    }

    pub async fn add_location(&self, location: Location) {
        self.inner.write().await.locations.insert(location.id, location);
    }

    /// Insert or replace a notice, keeping any links it already carries
    pub async fn add_notice(&self, notice: Notice) {
        self.inner.write().await.notices.insert(notice.id, notice);
    }

    /// Link a notice to a category; returns false if the notice is unknown
    pub async fn link_category(&self, notice_id: i64, category_id: i64) -> bool {
        let mut tables = self.inner.write().await;
        match tables.notices.get_mut(&notice_id) {
            Some(notice) => {
                notice.categories.push(NoticeCategory { notice_id, category_id });
                true
            }
            None => false,
        }
    }

    /// Link a notice to a location; returns false if the notice is unknown
    pub async fn link_location(&self, notice_id: i64, location_id: i64) -> bool {
        let mut tables = self.inner.write().await;
        match tables.notices.get_mut(&notice_id) {
            Some(notice) => {
                notice.locations.push(NoticeLocation { notice_id, location_id });
                true
            }
            None => false,
        }
    }

    /// Insert a profile with a caller-chosen id
    pub async fn insert_profile(&self, profile: Profile) {
        let mut tables = self.inner.write().await;
        tables.last_profile_id = tables.last_profile_id.max(profile.id);
        tables.profiles.insert(profile.id, profile);
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get_profile(&self, id: i64) -> Result<Option<Profile>, StoreError> {
        Ok(self.inner.read().await.profiles.get(&id).cloned())
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, StoreError> {
        let mut tables = self.inner.write().await;
        tables.last_profile_id += 1;

        let created = Profile {
            id: tables.last_profile_id,
            category_id: profile.category_id,
            location_id: profile.location_id,
            tags: profile.tags,
            publication_deadline: profile.publication_deadline,
        };
        tables.profiles.insert(created.id, created.clone());

        Ok(created)
    }

    async fn delete_profile(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.profiles.remove(&id).is_some())
    }
}

#[async_trait]
impl NoticeStore for InMemoryStore {
    async fn all_notices(&self) -> Result<Vec<Notice>, StoreError> {
        Ok(self.inner.read().await.notices.values().cloned().collect())
    }

    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.inner.read().await.categories.values().cloned().collect())
    }

    async fn locations(&self) -> Result<Vec<Location>, StoreError> {
        Ok(self.inner.read().await.locations.values().cloned().collect())
    }
}
