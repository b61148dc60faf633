use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{NewProfile, TagSet};

/// Request to create a search profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    /// Keywords matched against notice descriptions
    #[validate(length(min = 1), custom(function = "validate_has_tag"))]
    pub tags: Vec<String>,
    #[validate(range(min = 1))]
    pub category_id: i64,
    #[validate(range(min = 1))]
    pub location_id: i64,
    #[serde(default)]
    pub publication_deadline: Option<NaiveDate>,
}

/// At least one tag must survive normalization; `[" ", ","]` is rejected
fn validate_has_tag(tags: &[String]) -> Result<(), ValidationError> {
    if TagSet::from_tags(tags).is_empty() {
        return Err(ValidationError::new("blank_tags"));
    }
    Ok(())
}

impl From<CreateProfileRequest> for NewProfile {
    fn from(req: CreateProfileRequest) -> Self {
        NewProfile {
            category_id: req.category_id,
            location_id: req.location_id,
            tags: TagSet::from_tags(req.tags),
            publication_deadline: req.publication_deadline,
        }
    }
}
