// Integration tests for Tendara Match

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use tendara_match::core::Matcher;
use tendara_match::models::{Category, Location, Notice, Profile, TagSet};
use tendara_match::routes::{configure_routes, AppState};
use tendara_match::services::{find_matches, InMemoryStore};

fn create_notice(id: i64, title: &str, description: &str) -> Notice {
    Notice {
        id,
        title: title.to_string(),
        description: description.to_string(),
        buyer: None,
        volume: None,
        publication_deadline: chrono::NaiveDate::from_ymd_opt(2022, 12, 31),
        submission_deadline: None,
        categories: vec![],
        locations: vec![],
    }
}

fn create_profile(id: i64, category_id: i64, location_id: i64, tags: &str) -> Profile {
    Profile {
        id,
        category_id,
        location_id,
        tags: TagSet::parse(tags),
        publication_deadline: None,
    }
}

/// Three disjoint notices (solar, IT, construction) and one profile per notice
async fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());

    for (id, name) in [(1, "Construction"), (2, "Solar Panels"), (3, "IT")] {
        store.add_category(Category { id, name: Some(name.to_string()) }).await;
    }
    for (id, city, country) in [(1, "Alexandria", "Egypt"), (2, "Oxford", "UK"), (3, "Berlin", "Germany")] {
        store
            .add_location(Location {
                id,
                city: Some(city.to_string()),
                country: Some(country.to_string()),
            })
            .await;
    }

    store
        .add_notice(create_notice(
            1,
            "Supply and Installation of Solar Panels for Municipal Buildings",
            "Seeking qualified contractors to supply and install photovoltaic solar panels on \
             multiple municipal buildings to enhance renewable energy usage and reduce carbon footprint.",
        ))
        .await;
    store
        .add_notice(create_notice(
            2,
            "Python Developer for Web Development",
            "Looking for a Python developer to work on web development projects. The candidate \
             should have experience in Django, Flask, and other web frameworks.",
        ))
        .await;
    store
        .add_notice(create_notice(
            3,
            "Construction of a New Office Building",
            "Seeking qualified contractors to construct a new office building. The project \
             includes civil, mechanical, and structural works.",
        ))
        .await;

    // (notice, category, location)
    for (notice_id, category_id, location_id) in [(1, 2, 2), (2, 3, 3), (3, 1, 1)] {
        store.link_category(notice_id, category_id).await;
        store.link_location(notice_id, location_id).await;
    }

    store.insert_profile(create_profile(1, 3, 3, "Python,Java,C++")).await;
    store.insert_profile(create_profile(2, 1, 1, "Civil,Mechanical,Structural")).await;
    store.insert_profile(create_profile(3, 2, 2, "Solar,Energy,Renewable")).await;

    store
}

fn app_state(store: Arc<InMemoryStore>) -> AppState {
    AppState {
        profiles: store.clone(),
        notices: store,
        matcher: Matcher::default(),
    }
}

#[::core::prelude::v1::test]
fn test_disjoint_profiles_each_match_their_notice() {
    let store = tokio_test::block_on(seeded_store());
    let matcher = Matcher::default();

    for (profile_id, expected_notice) in [(1, 2), (2, 3), (3, 1)] {
        let result = tokio_test::block_on(find_matches(
            store.as_ref(),
            store.as_ref(),
            &matcher,
            profile_id,
        ))
        .unwrap();

        let ids: Vec<i64> = result.matches.iter().map(|m| m.notice.id).collect();
        assert_eq!(ids, vec![expected_notice], "profile {}", profile_id);
    }
}

#[::core::prelude::v1::test]
fn test_unlinked_profile_matches_nothing() {
    let store = tokio_test::block_on(seeded_store());
    tokio_test::block_on(store.insert_profile(create_profile(9, 2, 3, "solar")));

    let result = tokio_test::block_on(find_matches(
        store.as_ref(),
        store.as_ref(),
        &Matcher::default(),
        9,
    ))
    .unwrap();

    assert!(result.matches.is_empty());
}

#[actix_web::test]
async fn test_matches_endpoint_returns_ranked_notices() {
    let store = seeded_store().await;
    store.add_notice(create_notice(4, "Senior Python role", "python python django")).await;
    store.link_category(4, 3).await;
    store.link_location(4, 3).await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/profiles/1/matches").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let notices = body["notices"].as_array().unwrap();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0]["id"], 4);
    assert_eq!(notices[0]["match_score"], 2);
    assert_eq!(notices[1]["id"], 2);
    assert_eq!(notices[1]["match_score"], 1);
    assert_eq!(body["total_candidates"], 2);
}

#[actix_web::test]
async fn test_matches_endpoint_unknown_profile_is_404() {
    let store = seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/profiles/999/matches").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status_code"], 404);
}

#[actix_web::test]
async fn test_profile_create_read_delete() {
    let store = Arc::new(InMemoryStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(json!({ "tags": ["Solar", " energy "], "category_id": 2, "location_id": 1 }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["category_id"], 2);
    assert_eq!(created["location_id"], 1);
    assert_eq!(created["tags"], json!(["energy", "solar"]));

    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get().uri(&format!("/api/v1/profiles/{}", id)).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::delete().uri(&format!("/api/v1/profiles/{}", id)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri(&format!("/api/v1/profiles/{}", id)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri(&format!("/api/v1/profiles/{}", id)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_profile_validation_rejects_bad_request() {
    let store = Arc::new(InMemoryStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(json!({ "tags": [], "category_id": 0, "location_id": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_profile_with_only_blank_tags_is_rejected() {
    let store = Arc::new(InMemoryStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store.clone())))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(json!({ "tags": [" ", ","], "category_id": 1, "location_id": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status_code"], 400);

    let req = test::TestRequest::get().uri("/api/v1/profiles/1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_reference_data_listing() {
    let store = seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["categories"].as_array().unwrap().len(), 3);
    assert_eq!(body["categories"][2]["name"], "IT");

    let req = test::TestRequest::get().uri("/api/v1/locations").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["locations"][1]["city"], "Oxford");

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}
