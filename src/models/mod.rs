// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Category, Location, NewProfile, Notice, NoticeCategory, NoticeLocation, Profile, ScoredNotice, TagSet, TAG_DELIMITER};
pub use requests::CreateProfileRequest;
pub use responses::{CategoriesResponse, DeleteProfileResponse, ErrorResponse, HealthResponse, LocationsResponse, MatchingNoticesResponse, ProfileResponse};
