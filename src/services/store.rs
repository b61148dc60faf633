use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Category, Location, NewProfile, Notice, Profile};

/// Errors raised by storage collaborators
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Profile lookup and management
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile by id; `None` when absent
    async fn get_profile(&self, id: i64) -> Result<Option<Profile>, StoreError>;

    /// Persist a new profile and return it with its assigned id
    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, StoreError>;

    /// Delete a profile; returns whether a record was removed
    async fn delete_profile(&self, id: i64) -> Result<bool, StoreError>;
}

/// Read access to the notice corpus and its reference data
#[async_trait]
pub trait NoticeStore: Send + Sync {
    /// Every notice with its category and location links resolved
    async fn all_notices(&self) -> Result<Vec<Notice>, StoreError>;

    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn locations(&self) -> Result<Vec<Location>, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
