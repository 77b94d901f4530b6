//! Integration tests for the HTTP API.
//!
//! Each test drives the full router with the seed content source and
//! asserts on the serialized JSON, so routing, handlers, and DTO mapping
//! are exercised together.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use specdeck::adapters::http::{api_router, ContentAppState};
use specdeck::adapters::SeedContentSource;

fn app() -> Router {
    api_router(ContentAppState::new(Arc::new(SeedContentSource::new())))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn overview_carries_app_facts_and_section_progress() {
    let (status, body) = get(app(), "/api/overview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["app"]["title"], "CodeCraft Pro");
    assert_eq!(body["app"]["lastUpdated"], "Jan 15, 2024");

    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 8);
    // Introduction is complete and sets the bar width scale.
    assert_eq!(sections[0]["id"], "introduction");
    assert_eq!(sections[0]["barWidth"], 100.0);
    assert_eq!(sections[0]["status"]["label"], "completed");
    assert_eq!(sections[0]["status"]["color"], "green");
}

#[tokio::test]
async fn navigation_lists_all_shell_entries() {
    let (status, body) = get(app(), "/api/navigation").await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 9);
    assert_eq!(items[0]["path"], "/");
    assert_eq!(items[2]["id"], "user-stories");
}

#[tokio::test]
async fn section_listing_resolves_status_badges() {
    let (status, body) = get(app(), "/api/sections").await;
    assert_eq!(status, StatusCode::OK);
    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 8);
    for section in sections {
        let color = section["status"]["color"].as_str().unwrap();
        assert!(["green", "blue", "gray"].contains(&color));
    }
}

#[tokio::test]
async fn user_stories_page_renders_numbered_cards() {
    let (status, body) = get(app(), "/api/sections/user-stories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["section"], "user-stories");

    let cards = body["layout"]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 5);
    assert_eq!(cards[0]["eyebrow"], "Story #1");
    assert_eq!(cards[4]["eyebrow"], "Story #5");
    assert_eq!(body["layout"]["isPlaceholder"], false);
}

#[tokio::test]
async fn features_page_has_no_eyebrows() {
    let (status, body) = get(app(), "/api/sections/features").await;
    assert_eq!(status, StatusCode::OK);
    let cards = body["layout"]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 5);
    assert!(cards[0].get("eyebrow").is_none());
}

#[tokio::test]
async fn roadmap_page_carries_prose_panels() {
    let (status, body) = get(app(), "/api/sections/roadmap").await;
    assert_eq!(status, StatusCode::OK);
    let panels = body["panels"].as_array().unwrap();
    assert!(!panels.is_empty());
    assert_eq!(panels[0]["title"], "Long-term Vision");
}

#[tokio::test]
async fn every_seeded_section_renders_real_cards() {
    for id in [
        "introduction",
        "user-stories",
        "features",
        "technical",
        "ui-ux",
        "monetization",
        "roadmap",
        "metrics",
    ] {
        let (status, body) = get(app(), &format!("/api/sections/{id}")).await;
        assert_eq!(status, StatusCode::OK, "section {id}");
        assert_eq!(body["layout"]["isPlaceholder"], false, "section {id}");
        assert!(!body["title"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn unknown_section_returns_not_found() {
    let (status, body) = get(app(), "/api/sections/pricing-v2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Section not found: pricing-v2");
}

#[tokio::test]
async fn revenue_chart_formats_dollars_and_scales_widths() {
    let (status, body) = get(app(), "/api/charts/revenue").await;
    assert_eq!(status, StatusCode::OK);
    let bars = body["bars"].as_array().unwrap();
    assert_eq!(bars.len(), 12);

    let december = &bars[11];
    assert_eq!(december["label"], "Dec");
    assert_eq!(december["display"], "$32,106.00");
    assert_eq!(december["width"], 100.0);

    for bar in bars {
        let width = bar["width"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&width));
    }
}

#[tokio::test]
async fn metrics_chart_formats_percentages() {
    let (status, body) = get(app(), "/api/charts/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let bars = body["bars"].as_array().unwrap();
    assert_eq!(bars.len(), 5);
    for bar in bars {
        let display = bar["display"].as_str().unwrap();
        assert!(display.ends_with('%'), "expected percentage, got {display}");
    }
}

#[tokio::test]
async fn usage_chart_serves_feature_adoption() {
    let (status, body) = get(app(), "/api/charts/usage").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Feature Usage");
    let bars = body["bars"].as_array().unwrap();
    assert_eq!(bars.len(), 6);
    assert_eq!(bars[0]["label"], "Code Editor");
    assert_eq!(bars[0]["display"], "95%");
    assert_eq!(bars[0]["width"], 100.0);
}

#[tokio::test]
async fn retention_chart_serves_cohort_periods() {
    let (status, body) = get(app(), "/api/charts/retention").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "User Retention");
    let bars = body["bars"].as_array().unwrap();
    assert_eq!(bars.len(), 6);
    assert_eq!(bars[0]["label"], "Week 1");
    assert_eq!(bars[5]["label"], "Month 3");
    assert_eq!(bars[5]["display"], "32%");
}
