use actix_web::{web, HttpResponse, Responder};

use crate::models::{CategoriesResponse, HealthResponse, LocationsResponse, MatchingNoticesResponse};
use crate::routes::{internal_error, not_found, AppState};
use crate::services::{self, MatchingError};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profiles/{id}/matches", web::get().to(get_matches))
        .route("/categories", web::get().to(list_categories))
        .route("/locations", web::get().to(list_locations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.notices.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matching notices for a profile
///
/// GET /api/v1/profiles/{id}/matches
///
/// Response body:
/// ```json
/// {
///   "notices": [{ "id": 2, "title": "...", "match_score": 3, ... }],
///   "total_candidates": 1
/// }
/// ```
async fn get_matches(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let profile_id = path.into_inner();

    tracing::info!("Finding matches for profile: {}", profile_id);

    let result = match services::find_matches(
        state.profiles.as_ref(),
        state.notices.as_ref(),
        &state.matcher,
        profile_id,
    )
    .await
    {
        Ok(result) => result,
        Err(MatchingError::ProfileNotFound(id)) => {
            tracing::info!("Profile {} not found", id);
            return not_found("Profile not found", format!("No profile with id {}", id));
        }
        Err(e) => {
            tracing::error!("Failed to find matches for profile {}: {}", profile_id, e);
            return internal_error("Failed to find matches", e.to_string());
        }
    };

    tracing::info!(
        "Returning {} matches for profile {} (from {} candidates)",
        result.matches.len(),
        profile_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(MatchingNoticesResponse {
        notices: result.matches,
        total_candidates: result.total_candidates,
    })
}

/// List categories profiles may reference
async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    match state.notices.categories().await {
        Ok(categories) => HttpResponse::Ok().json(CategoriesResponse { categories }),
        Err(e) => {
            tracing::error!("Failed to list categories: {}", e);
            internal_error("Failed to list categories", e.to_string())
        }
    }
}

/// List locations profiles may reference
async fn list_locations(state: web::Data<AppState>) -> impl Responder {
    match state.notices.locations().await {
        Ok(locations) => HttpResponse::Ok().json(LocationsResponse { locations }),
        Err(e) => {
            tracing::error!("Failed to list locations: {}", e);
            internal_error("Failed to list locations", e.to_string())
        }
    }
}
