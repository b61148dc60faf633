use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::models::{Category, Location, NewProfile, Notice, NoticeCategory, NoticeLocation, Profile, TagSet};
use crate::services::store::{NoticeStore, ProfileStore, StoreError};

/// PostgreSQL-backed store for profiles and the notice corpus
///
/// Notices, categories, locations and their link tables are written by the
/// ingestion pipeline; this client only reads them. Profiles are read and
/// written here.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        tracing::info!(
            "Connecting to PostgreSQL (max: {}, min: {})",
            settings.max_connections,
            settings.min_connections
        );

        Self::new(
            &settings.url,
            settings.max_connections,
            settings.min_connections,
            Duration::from_secs(settings.acquire_timeout_secs),
            Duration::from_secs(settings.idle_timeout_secs),
        )
        .await
    }
}

fn profile_from_row(row: &PgRow) -> Result<Profile, sqlx::Error> {
    let tags: Option<String> = row.try_get("tags")?;

    Ok(Profile {
        id: row.try_get("id")?,
        category_id: row.try_get("category_id")?,
        location_id: row.try_get("location_id")?,
        tags: TagSet::parse(tags.as_deref().unwrap_or_default()),
        publication_deadline: row.try_get("publication_deadline")?,
    })
}

fn notice_from_row(row: &PgRow) -> Result<Notice, sqlx::Error> {
    let title: Option<String> = row.try_get("title")?;
    let description: Option<String> = row.try_get("description")?;

    Ok(Notice {
        id: row.try_get("id")?,
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
        buyer: row.try_get("buyer")?,
        volume: row.try_get("volume")?,
        publication_deadline: row.try_get("publication_deadline")?,
        submission_deadline: row.try_get("submission_deadline")?,
        categories: Vec::new(),
        locations: Vec::new(),
    })
}

/// Group link rows onto their notices
///
/// Links keep their row order. A link whose notice is not in `notices` is
/// dropped; a repeated link is kept as many times as it appears.
fn attach_links(
    mut notices: Vec<Notice>,
    categories: Vec<NoticeCategory>,
    locations: Vec<NoticeLocation>,
) -> Vec<Notice> {
    let index: HashMap<i64, usize> = notices
        .iter()
        .enumerate()
        .map(|(position, notice)| (notice.id, position))
        .collect();

    for link in categories {
        if let Some(&position) = index.get(&link.notice_id) {
            notices[position].categories.push(link);
        }
    }

    for link in locations {
        if let Some(&position) = index.get(&link.notice_id) {
            notices[position].locations.push(link);
        }
    }

    notices
}

#[async_trait]
impl ProfileStore for PostgresStore {
    async fn get_profile(&self, id: i64) -> Result<Option<Profile>, StoreError> {
        let query = r#"
            SELECT id, category_id, location_id, tags, publication_deadline
            FROM profile
            WHERE id = $1
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        Ok(row.as_ref().map(profile_from_row).transpose()?)
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, StoreError> {
        let query = r#"
            INSERT INTO profile (category_id, location_id, tags, publication_deadline)
            VALUES ($1, $2, $3, $4)
            RETURNING id, category_id, location_id, tags, publication_deadline
        "#;

        let row = sqlx::query(query)
            .bind(profile.category_id)
            .bind(profile.location_id)
            .bind(profile.tags.to_delimited())
            .bind(profile.publication_deadline)
            .fetch_one(&self.pool)
            .await?;

        let created = profile_from_row(&row)?;
        tracing::debug!("Created profile {}", created.id);

        Ok(created)
    }

    async fn delete_profile(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM profile WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl NoticeStore for PostgresStore {
    /// Load the corpus and both link tables from one snapshot, then attach
    /// links to their notices
    async fn all_notices(&self) -> Result<Vec<Notice>, StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let notice_rows = sqlx::query(
            r#"
            SELECT id, title, description, buyer, volume, publication_deadline, submission_deadline
            FROM notice
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        let category_rows = sqlx::query("SELECT notice_id, category_id FROM notice_category ORDER BY id")
            .fetch_all(&mut *tx)
            .await?;

        let location_rows = sqlx::query("SELECT notice_id, location_id FROM notice_location ORDER BY id")
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        let notices = notice_rows
            .iter()
            .map(notice_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        let categories = category_rows
            .iter()
            .map(|row| {
                Ok(NoticeCategory {
                    notice_id: row.try_get("notice_id")?,
                    category_id: row.try_get("category_id")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        let locations = location_rows
            .iter()
            .map(|row| {
                Ok(NoticeLocation {
                    notice_id: row.try_get("notice_id")?,
                    location_id: row.try_get("location_id")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        let notices = attach_links(notices, categories, locations);

        tracing::debug!(
            "Loaded {} notices ({} category links, {} location links)",
            notices.len(),
            category_rows.len(),
            location_rows.len()
        );

        Ok(notices)
    }

    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query("SELECT id, name FROM category ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let categories = rows
            .iter()
            .map(|row| {
                Ok(Category {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(categories)
    }

    async fn locations(&self) -> Result<Vec<Location>, StoreError> {
        let rows = sqlx::query("SELECT id, city, country FROM location ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let locations = rows
            .iter()
            .map(|row| {
                Ok(Location {
                    id: row.try_get("id")?,
                    city: row.try_get("city")?,
                    country: row.try_get("country")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(locations)
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
