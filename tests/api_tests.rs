use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};

use courtside_recs::{
    config::Config,
    db::{CatalogRepository, InteractionRepository},
    error::AppResult,
    models::{InteractionEvent, InteractionRecord, PlayerRecord},
    routes::{create_router, AppState},
};

struct InMemoryCatalog {
    players: Vec<PlayerRecord>,
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn load_players(&self) -> AppResult<Vec<PlayerRecord>> {
        Ok(self.players.clone())
    }
}

#[derive(Default)]
struct InMemoryInteractions {
    records: Mutex<Vec<InteractionRecord>>,
}

#[async_trait]
impl InteractionRepository for InMemoryInteractions {
    async fn recent_interactions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AppResult<Vec<InteractionRecord>> {
        let records = self.records.lock().unwrap();
        let mut history: Vec<InteractionRecord> = records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        history.truncate(limit);
        Ok(history)
    }

    async fn record(&self, event: &InteractionEvent) -> AppResult<()> {
        let mut records = self.records.lock().unwrap();
        // Strictly increasing timestamps keep recency order deterministic
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
            + Duration::seconds(records.len() as i64);
        records.push(InteractionRecord::new(
            &event.user_id,
            &event.item_id,
            Some(event.weight),
            created_at,
        ));
        Ok(())
    }
}

fn player(
    id: &str,
    name: &str,
    stats: (f64, f64, f64),
    position: &str,
    team: i64,
) -> PlayerRecord {
    let mut p = PlayerRecord::new(id, name, "");
    p.pts = Some(stats.0);
    p.reb = Some(stats.1);
    p.ast = Some(stats.2);
    p.position = Some(position.to_string());
    p.team_id = Some(team);
    p.from_year = Some(1990);
    p.to_year = Some(2000);
    p
}

fn catalog() -> Vec<PlayerRecord> {
    vec![
        player("1", "Alpha", (30.0, 5.0, 5.0), "G", 1),
        player("2", "Bravo", (10.0, 10.0, 2.0), "C", 2),
        player("3", "Charlie", (28.0, 6.0, 4.0), "G", 1),
    ]
}

fn create_test_server(players: Vec<PlayerRecord>) -> TestServer {
    let state = AppState::new(
        Arc::new(InMemoryCatalog { players }),
        Arc::new(InMemoryInteractions::default()),
        Config::default(),
    );
    TestServer::new(create_router(state)).unwrap()
}

fn user_header(user: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-user-id"),
        HeaderValue::from_static(user),
    )
}

async fn track(server: &TestServer, user: &'static str, body: Value) {
    let (name, value) = user_header(user);
    server
        .post("/api/v1/interactions")
        .add_header(name, value)
        .json(&body)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(catalog());
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_recommendations_require_user() {
    let server = create_test_server(catalog());
    let response = server.get("/api/v1/recommendations/players").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cold_start_returns_reason() {
    let server = create_test_server(catalog());
    let (name, value) = user_header("fresh-user");
    let response = server
        .get("/api/v1/recommendations/players")
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "recommendations": [], "reason": "no_interactions" }));
}

#[tokio::test]
async fn test_empty_catalog_returns_reason() {
    let server = create_test_server(vec![]);
    track(&server, "user-1", json!({ "itemId": 1, "eventType": "view_player" })).await;

    let (name, value) = user_header("user-1");
    let body: Value = server
        .get("/api/v1/recommendations/players")
        .add_header(name, value)
        .await
        .json();
    assert_eq!(body, json!({ "recommendations": [], "reason": "no_players" }));
}

#[tokio::test]
async fn test_track_then_recommend() {
    let server = create_test_server(catalog());
    track(&server, "user-1", json!({ "itemId": 1, "eventType": "view_player" })).await;

    let (name, value) = user_header("user-1");
    let response = server
        .get("/api/v1/recommendations/players")
        .add_header(name, value)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["mode"], "content-based-cosine-user-profile");
    assert_eq!(body["usedFeatures"].as_array().unwrap().len(), 4);

    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0]["id"], "3");
    assert_eq!(recs[0]["name"], "Charlie");
    assert_eq!(recs[0]["team"], 1);
    assert_eq!(recs[0]["era"], "1990s");
    assert_eq!(recs[0]["ptsBin"], "high");
    assert_eq!(recs[1]["id"], "2");
    assert!(recs[0]["similarity"].as_f64().unwrap() > recs[1]["similarity"].as_f64().unwrap());
}

#[tokio::test]
async fn test_history_is_per_user() {
    let server = create_test_server(catalog());
    track(&server, "user-1", json!({ "itemId": "1", "eventType": "view_player" })).await;
    track(&server, "user-2", json!({ "itemId": "2", "eventType": "search_click" })).await;

    let (name, value) = user_header("user-2");
    let body: Value = server
        .get("/api/v1/recommendations/players")
        .add_header(name, value)
        .await
        .json();

    let ids: Vec<&str> = body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(!ids.contains(&"2"));
}

#[tokio::test]
async fn test_limit_query() {
    let server = create_test_server(catalog());
    track(&server, "user-1", json!({ "itemId": 1, "eventType": "view_player" })).await;

    let (name, value) = user_header("user-1");
    let body: Value = server
        .get("/api/v1/recommendations/players")
        .add_query_param("limit", 1)
        .add_header(name, value)
        .await
        .json();
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 1);

    let (name, value) = user_header("user-1");
    server
        .get("/api/v1/recommendations/players")
        .add_query_param("limit", 0)
        .add_header(name, value)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_interaction_validation() {
    let server = create_test_server(catalog());

    server
        .post("/api/v1/interactions")
        .json(&json!({ "itemId": 1, "eventType": "view_player" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let (name, value) = user_header("user-1");
    let response = server
        .post("/api/v1/interactions")
        .add_header(name, value)
        .json(&json!({ "eventType": "view_player" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing itemId/eventType");

    // Malformed bodies are rejected before authentication
    server
        .post("/api/v1/interactions")
        .json(&json!({ "eventType": "view_player" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_interaction_null_weight_defaults_to_one() {
    let server = create_test_server(catalog());
    let (name, value) = user_header("user-1");

    server
        .post("/api/v1/interactions")
        .add_header(name, value)
        .json(&json!({ "itemId": "1", "eventType": "view_player", "weight": null }))
        .await
        .assert_status_ok();
}
