use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreateProfileRequest, DeleteProfileResponse, ErrorResponse, NewProfile, ProfileResponse};
use crate::routes::{internal_error, not_found, AppState};

/// Configure profile management routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles", web::post().to(create_profile))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/profiles/{id}", web::delete().to(delete_profile));
}

/// Create profile endpoint
///
/// POST /api/v1/profiles
///
/// Request body:
/// ```json
/// {
///   "tags": ["python", "django"],
///   "category_id": 3,
///   "location_id": 2,
///   "publication_deadline": "2025-12-31"
/// }
/// ```
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_profile request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.profiles.create_profile(NewProfile::from(req.into_inner())).await {
        Ok(profile) => {
            tracing::info!(
                "Created profile {} (category {}, location {})",
                profile.id,
                profile.category_id,
                profile.location_id
            );
            HttpResponse::Ok().json(ProfileResponse::from(profile))
        }
        Err(e) => {
            tracing::error!("Failed to create profile: {}", e);
            internal_error("Failed to create profile", e.to_string())
        }
    }
}

/// GET /api/v1/profiles/{id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();

    match state.profiles.get_profile(id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(ProfileResponse::from(profile)),
        Ok(None) => not_found("Profile not found", format!("No profile with id {}", id)),
        Err(e) => {
            tracing::error!("Failed to fetch profile {}: {}", id, e);
            internal_error("Failed to fetch profile", e.to_string())
        }
    }
}

/// DELETE /api/v1/profiles/{id}
async fn delete_profile(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();

    match state.profiles.delete_profile(id).await {
        Ok(true) => {
            tracing::info!("Deleted profile {}", id);
            HttpResponse::Ok().json(DeleteProfileResponse {
                message: "Profile deleted successfully".to_string(),
            })
        }
        Ok(false) => not_found("Profile not found", format!("No profile with id {}", id)),
        Err(e) => {
            tracing::error!("Failed to delete profile {}: {}", id, e);
            internal_error("Failed to delete profile", e.to_string())
        }
    }
}
