//! Minimal stand-in for the remote book service

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use book_library::{config::RemoteConfig, models::Book};

#[derive(Clone, Default)]
pub struct FakeService {
    pub books: Arc<Mutex<Vec<Book>>>,
    pub failing: Arc<AtomicBool>,
}

impl FakeService {
    pub fn with_books(books: Vec<Book>) -> Self {
        let service = Self::default();
        *service.books.lock().unwrap() = books;
        service
    }

    pub fn snapshot(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    /// Make every endpoint answer 500
    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StatusCode> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            Ok(())
        }
    }

    /// Serve on an ephemeral port and return the matching client config
    pub async fn spawn(&self) -> RemoteConfig {
        let app = Router::new()
            .route("/Book/getAll", get(get_all))
            .route("/Book/saveBook", post(save_book))
            .route("/Book/update/:id", put(update_book))
            .route("/Book/delete/:id", delete(delete_book))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RemoteConfig {
            base_url: format!("http://{}", addr),
            timeout_secs: Some(5),
        }
    }
}

async fn get_all(State(service): State<FakeService>) -> Result<Json<Vec<Book>>, StatusCode> {
    service.check()?;
    Ok(Json(service.snapshot()))
}

async fn save_book(
    State(service): State<FakeService>,
    Json(book): Json<Book>,
) -> Result<(StatusCode, Json<Book>), StatusCode> {
    service.check()?;
    service.books.lock().unwrap().push(book.clone());
    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book(
    State(service): State<FakeService>,
    Path(id): Path<String>,
    Json(book): Json<Book>,
) -> Result<Json<Book>, StatusCode> {
    service.check()?;
    let mut books = service.books.lock().unwrap();
    let slot = books
        .iter_mut()
        .find(|b| b.isbn == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = book.clone();
    Ok(Json(book))
}

async fn delete_book(
    State(service): State<FakeService>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    service.check()?;
    let mut books = service.books.lock().unwrap();
    let before = books.len();
    books.retain(|b| b.isbn != id);
    if books.len() == before {
        Err(StatusCode::NOT_FOUND)
    } else {
        Ok(StatusCode::OK)
    }
}
