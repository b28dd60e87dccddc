//! The library page driven through the router

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use book_library::{
    api::create_router, models::Book, remote::HttpBookApi, services::LibraryClient, AppConfig,
    AppState,
};
use tower::ServiceExt;

use crate::fake_service::FakeService;

async fn app_for(service: &FakeService) -> (Router, AppState) {
    let remote = HttpBookApi::new(&service.spawn().await).unwrap();
    let mut library = LibraryClient::new(Arc::new(remote), Duration::from_secs(3));
    let _ = library.load_all().await;

    let state = AppState::new(AppConfig::default(), library);
    (create_router(state.clone()), state)
}

async fn post_form(app: &Router, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

async fn page(app: &Router) -> String {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_empty_page() {
    let (app, _) = app_for(&FakeService::default()).await;
    let html = page(&app).await;

    assert!(html.contains("My Book Library"));
    assert!(html.contains(">Add</button>"));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn test_add_book() {
    let service = FakeService::default();
    let (app, state) = app_for(&service).await;

    let status = post_form(&app, "/books", "book=T&author=A&number=").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    assert_eq!(service.snapshot(), vec![Book::new("T", "A", "")]);
    assert_eq!(state.library.lock().await.books(), [Book::new("T", "A", "")]);

    let html = page(&app).await;
    assert_eq!(html.matches("<td>T</td>").count(), 1);
    assert!(html.contains("Book added successfully"));
}

#[tokio::test]
async fn test_missing_title_is_rejected() {
    let service = FakeService::default();
    let (app, _) = app_for(&service).await;

    let status = post_form(&app, "/books", "book=&author=A&number=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(service.snapshot().is_empty());
}

#[tokio::test]
async fn test_missing_author_key_is_rejected() {
    let service = FakeService::default();
    let (app, _) = app_for(&service).await;

    let status = post_form(&app, "/books", "book=T&number=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(service.snapshot().is_empty());
}

#[tokio::test]
async fn test_delete_without_identifier_shows_status() {
    let service = FakeService::with_books(vec![Book::new("Dune", "Frank Herbert", "")]);
    let (app, state) = app_for(&service).await;

    assert_eq!(post_form(&app, "/books/0/delete", "").await, StatusCode::SEE_OTHER);

    assert_eq!(state.library.lock().await.books().len(), 1);
    assert_eq!(service.snapshot().len(), 1);
    let html = page(&app).await;
    assert!(html.contains("Failed to delete book"));
    assert!(html.contains("class=\"toast failure\""));
}

#[tokio::test]
async fn test_edit_then_update() {
    let service = FakeService::with_books(vec![
        Book::new("Dune", "Frank Herbert", "978-0441013593"),
        Book::new("Hyperion", "Dan Simmons", "978-0553283686"),
    ]);
    let (app, state) = app_for(&service).await;

    assert_eq!(post_form(&app, "/books/1/edit", "").await, StatusCode::SEE_OTHER);
    let html = page(&app).await;
    assert!(html.contains(">Update</button>"));
    assert!(html.contains("value=\"Hyperion\""));

    let status = post_form(
        &app,
        "/books",
        "book=Hyperion&author=D.+Simmons&number=978-0553283686",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let library = state.library.lock().await;
    assert!(!library.is_editing());
    assert_eq!(library.books()[1].author, "D. Simmons");
    assert_eq!(library.books()[0].title, "Dune");
    assert_eq!(service.snapshot()[1].author, "D. Simmons");
}

#[tokio::test]
async fn test_delete_edited_row_resets_form() {
    let service = FakeService::with_books(vec![Book::new("Dune", "Frank Herbert", "978-0441013593")]);
    let (app, state) = app_for(&service).await;

    post_form(&app, "/books/0/edit", "").await;
    assert_eq!(post_form(&app, "/books/0/delete", "").await, StatusCode::SEE_OTHER);

    let library = state.library.lock().await;
    assert!(library.books().is_empty());
    assert!(!library.is_editing());
    assert!(library.draft().is_empty());
    assert!(service.snapshot().is_empty());
}

#[tokio::test]
async fn test_unknown_row_is_not_found() {
    let (app, _) = app_for(&FakeService::default()).await;

    assert_eq!(post_form(&app, "/books/4/edit", "").await, StatusCode::NOT_FOUND);
    assert_eq!(post_form(&app, "/books/4/delete", "").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remote_failure_shows_status_and_keeps_list() {
    let service = FakeService::with_books(vec![Book::new("Dune", "Frank Herbert", "978-0441013593")]);
    let (app, state) = app_for(&service).await;
    service.fail(true);

    assert_eq!(post_form(&app, "/books/0/delete", "").await, StatusCode::SEE_OTHER);

    {
        let library = state.library.lock().await;
        assert_eq!(library.books().len(), 1);
    }
    let html = page(&app).await;
    assert!(html.contains("Failed to delete book"));
    assert!(html.contains("<td>Dune</td>"));

    assert_eq!(post_form(&app, "/status/dismiss", "").await, StatusCode::SEE_OTHER);
    assert!(!page(&app).await.contains("Failed to delete book"));
}

#[tokio::test]
async fn test_health_endpoints() {
    let service = FakeService::with_books(vec![Book::new("Dune", "Frank Herbert", "978-0441013593")]);
    let (app, _) = app_for(&service).await;

    let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["books"], 1);
    assert!(body["remote"].as_str().unwrap().starts_with("http://127.0.0.1:"));

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
