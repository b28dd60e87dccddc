//! reqwest-backed client for the book service

use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use super::BookApi;
use crate::{
    config::RemoteConfig,
    error::{AppError, AppResult},
    models::Book,
};

#[derive(Clone)]
pub struct HttpBookApi {
    client: Client,
    base_url: Url,
}

impl HttpBookApi {
    /// Create a client for the service at `config.base_url`
    pub fn new(config: &RemoteConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::InvalidUrl(config.base_url.clone()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn check(response: Response, operation: &'static str) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(AppError::RemoteStatus { operation, status })
        }
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let url = self.endpoint(&["Book", "getAll"])?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let books = Self::check(response, "list")?.json::<Vec<Book>>().await?;
        Ok(books)
    }

    async fn create(&self, book: &Book) -> AppResult<()> {
        let url = self.endpoint(&["Book", "saveBook"])?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(book).send().await?;
        Self::check(response, "create")?;
        Ok(())
    }

    async fn update(&self, id: &str, book: &Book) -> AppResult<()> {
        let url = self.endpoint(&["Book", "update", id])?;
        tracing::debug!("PUT {}", url);

        let response = self.client.put(url).json(book).send().await?;
        Self::check(response, "update")?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let url = self.endpoint(&["Book", "delete", id])?;
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(url).send().await?;
        Self::check(response, "delete")?;
        Ok(())
    }
}
