//! End-to-end tests for the REST API endpoints.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookstack_api::http::router::build_router;
use bookstack_api::state::AppState;
use bookstack_infra::sqlite::pool::DatabasePool;

/// Build a router against a throwaway on-disk database.
async fn test_app() -> Router {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());
    // Leak tempdir so it lives for the test
    std::mem::forget(dir);
    let pool = DatabasePool::new(&url).await.unwrap();
    build_router(AppState::from_pool(pool))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn dune() -> Value {
    json!({
        "title": "Dune",
        "author": "Herbert",
        "published_year": 1965,
        "genre": "SciFi",
        "isbn": "0001"
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_full_book_lifecycle() {
    let app = test_app().await;

    // Create
    let response = app
        .clone()
        .oneshot(json_request("POST", "/books", dune()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Dune");
    assert_eq!(created["author"], "Herbert");
    assert_eq!(created["published_year"], 1965);
    assert_eq!(created["genre"], "SciFi");
    assert_eq!(created["isbn"], "0001");

    // Read back
    let response = app.clone().oneshot(get_request("/books/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/books/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Book with ID 1 deleted");

    // Gone
    let response = app.clone().oneshot(get_request("/books/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "BOOK_NOT_FOUND");
}

#[tokio::test]
async fn test_list_books() {
    let app = test_app().await;

    let response = app.clone().oneshot(get_request("/books")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    app.clone()
        .oneshot(json_request("POST", "/books", dune()))
        .await
        .unwrap();
    let mut second = dune();
    second["title"] = json!("Dune Messiah");
    second["isbn"] = json!("0002");
    app.clone()
        .oneshot(json_request("POST", "/books", second))
        .await
        .unwrap();

    let response = app.clone().oneshot(get_request("/books")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request("POST", "/books", dune()))
        .await
        .unwrap();

    let replacement = json!({
        "title": "Dune Messiah",
        "author": "F. Herbert",
        "published_year": 1969,
        "isbn": "0002"
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/books/1", replacement))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["title"], "Dune Messiah");
    assert_eq!(updated["genre"], Value::Null);

    let response = app.clone().oneshot(get_request("/books/1")).await.unwrap();
    assert_eq!(body_json(response).await, updated);
}

#[tokio::test]
async fn test_update_missing_book_is_404() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("PUT", "/books/99", dune()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_missing_field_is_422() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/books",
            json!({"author": "Herbert", "published_year": 1965, "isbn": "0001"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_type_mismatch_is_422() {
    let app = test_app().await;

    let mut body = dune();
    body["published_year"] = json!("nineteen sixty-five");
    let response = app
        .oneshot(json_request("POST", "/books", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_duplicate_isbn_is_conflict() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/books", dune()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let mut second = dune();
    second["title"] = json!("Another Dune");
    let response = app
        .clone()
        .oneshot(json_request("POST", "/books", second))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "ISBN_CONFLICT");
}

#[tokio::test]
async fn test_delete_twice_is_404() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request("POST", "/books", dune()))
        .await
        .unwrap();

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri("/books/1")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
