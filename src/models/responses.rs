use serde::{Deserialize, Serialize};
use crate::models::domain::{Category, Location, Profile, ScoredNotice};

/// Response for the profile matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingNoticesResponse {
    pub notices: Vec<ScoredNotice>,
    pub total_candidates: usize,
}

/// Profile as returned by the profile endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub category_id: i64,
    pub location_id: i64,
    pub tags: Vec<String>,
    pub publication_deadline: Option<chrono::NaiveDate>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            category_id: profile.category_id,
            location_id: profile.location_id,
            tags: profile.tags.into(),
            publication_deadline: profile.publication_deadline,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Profile deletion acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProfileResponse {
    pub message: String,
}
