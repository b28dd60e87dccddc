//! Remote `/Book/*` service access

pub mod http;

use async_trait::async_trait;

use crate::{error::AppResult, models::Book};

pub use http::HttpBookApi;

/// CRUD operations offered by the remote book service.
///
/// Every call either fully succeeds or returns a remote failure; callers
/// reconcile local state only on `Ok`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookApi: Send + Sync {
    /// `GET /Book/getAll`
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// `POST /Book/saveBook`
    async fn create(&self, book: &Book) -> AppResult<()>;

    /// `PUT /Book/update/{id}`
    async fn update(&self, id: &str, book: &Book) -> AppResult<()>;

    /// `DELETE /Book/delete/{id}`
    async fn delete(&self, id: &str) -> AppResult<()>;
}
