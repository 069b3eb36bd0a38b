use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use http_body_util::BodyExt;
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, Database, Statement};
use serde_json::{Value, json};
use tower::ServiceExt;

use engine::Engine;
use server::{ServerState, router};

async fn app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    for user in ["alice", "bob"] {
        db.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO users (username, password) VALUES (?, ?)",
            vec![user.into(), "secret".into()],
        ))
        .await
        .unwrap();
    }
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    router(ServerState::new(engine, db))
}

fn basic(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}

fn get(uri: &str, user: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, basic(user, "secret"))
        .body(Body::empty())
        .unwrap()
}

fn send_json(method: &str, uri: &str, user: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, basic(user, "secret"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str, user: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, basic(user, "secret"))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_property(app: &Router, user: &str, name: &str) -> Value {
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/properties",
            user,
            json!({
                "name": name,
                "address": "12 Elm St",
                "monthly_rent_minor": 150_000
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/properties")
                .header(header::AUTHORIZATION, basic("alice", "nope"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn properties_are_scoped_to_their_owner() {
    let app = app().await;
    let created = create_property(&app, "alice", "Elm House").await;
    assert_eq!(created["status"], "vacant");
    assert_eq!(created["property_type"], "single_family");
    let id = created["id"].as_str().unwrap().to_string();

    let response = app.clone().oneshot(get("/properties", "alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Elm House");

    let response = app
        .clone()
        .oneshot(get(&format!("/properties/{id}"), "bob"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/properties", "bob")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn duplicate_property_name_conflicts() {
    let app = app().await;
    create_property(&app, "alice", "Elm House").await;

    let response = app
        .oneshot(send_json(
            "POST",
            "/properties",
            "alice",
            json!({ "name": "elm house", "address": "somewhere else" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn etag_is_stable_until_a_mutation() {
    let app = app().await;

    let response = app.clone().oneshot(get("/properties", "alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let etag = response.headers()[header::ETAG].to_str().unwrap().to_string();
    assert!(etag.starts_with("W/"));

    let conditional = |etag: &str| {
        Request::builder()
            .uri("/properties")
            .header(header::AUTHORIZATION, basic("alice", "secret"))
            .header(header::IF_NONE_MATCH, etag)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(conditional(&etag)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_MODIFIED);

    create_property(&app, "alice", "Oak Duplex").await;

    let response = app.clone().oneshot(conditional(&etag)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_ne!(response.headers()[header::ETAG].to_str().unwrap(), etag);

    // Aggregates change with any mutation.
    let summary = app.oneshot(get("/summary", "alice")).await.unwrap();
    assert_eq!(summary.status(), StatusCode::OK);
}

#[tokio::test]
async fn document_actions_report_outcomes_in_the_body() {
    let app = app().await;
    let property = create_property(&app, "alice", "Elm House").await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/actions/documents",
            "alice",
            json!({
                "name": "Lease 2025",
                "type": "lease",
                "file_url": "https://files.example.com/lease.pdf",
                "property_id": property["id"],
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["success"], true);
    assert!(created.get("error").is_none());
    assert_eq!(created["data"]["type"], "lease");
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get("/documents", "alice"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(delete(&format!("/actions/documents/{id}"), "alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted = body_json(response).await;
    assert_eq!(deleted["success"], true);
    assert_eq!(deleted["data"]["id"], id.as_str());

    let response = app
        .oneshot(delete(&format!("/actions/documents/{id}"), "alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let again = body_json(response).await;
    assert_eq!(again["success"], false);
    assert!(again.get("data").is_none());
    assert!(again["error"].as_str().unwrap().starts_with("Failed to delete document"));
}

#[tokio::test]
async fn invalid_document_payload_is_an_action_failure() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/actions/documents",
            "alice",
            json!({ "name": "Lease", "type": "not-a-type", "file_url": "https://x.test/a" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let result = body_json(response).await;
    assert_eq!(result["success"], false);
    assert!(result["error"].as_str().unwrap().starts_with("Failed to create document"));

    let response = app
        .oneshot(send_json(
            "POST",
            "/actions/documents",
            "alice",
            json!({ "name": "Lease", "type": "lease", "file_url": "ftp://x.test/a" }),
        ))
        .await
        .unwrap();
    let result = body_json(response).await;
    assert_eq!(result["success"], false);
}

#[tokio::test]
async fn prospect_converts_into_tenant() {
    let app = app().await;
    let property = create_property(&app, "alice", "Elm House").await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/prospects",
            "alice",
            json!({
                "property_id": property["id"],
                "first_name": "Dana",
                "last_name": "Reyes",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let prospect = body_json(response).await;
    assert_eq!(prospect["status"], "new");
    let id = prospect["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            &format!("/prospects/{id}/convert"),
            "alice",
            json!({ "lease_start": "2025-03-01" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let tenant = body_json(response).await;
    assert_eq!(tenant["first_name"], "Dana");
    assert_eq!(tenant["monthly_rent_minor"], 150_000);

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            &format!("/prospects/{id}/convert"),
            "alice",
            json!({ "lease_start": "2025-03-01" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let summary = body_json(app.oneshot(get("/summary", "alice")).await.unwrap()).await;
    assert_eq!(summary["occupied_count"], 1);
    assert_eq!(summary["display"]["scheduled_monthly_rent"], "$1,500");
    assert_eq!(summary["display"]["occupancy_rate"], "100.0%");
}

#[tokio::test]
async fn budget_report_compares_plan_with_spending() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/budget",
            "alice",
            json!({ "category": "Repairs", "year": 2025, "month": 4, "planned_amount_minor": 50_000 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/transactions",
            "alice",
            json!({
                "kind": "expense",
                "category": "repairs",
                "amount_minor": 20_000,
                "occurred_on": "2025-04-10",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let report = body_json(
        app.clone()
            .oneshot(get("/budget/report?year=2025&month=4", "alice"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(report["lines"][0]["category"], "repairs");
    assert_eq!(report["lines"][0]["remaining_minor"], 30_000);

    let response = app
        .oneshot(get("/budget/report?year=2025&month=13", "alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
