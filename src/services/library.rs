//! Library client: local mirror of the remote book table plus form state

use std::sync::Arc;
use std::time::Duration;

use crate::{
    error::{AppError, AppResult},
    models::{Book, StatusMessage},
    remote::BookApi,
};

use super::notifier::StatusNotifier;

/// Holds the authoritative local copy of the book list together with the
/// form draft and edit mode, and turns user actions into remote calls.
///
/// Local state only changes after the remote service confirms an operation.
pub struct LibraryClient {
    api: Arc<dyn BookApi>,
    books: Vec<Book>,
    draft: Book,
    edit_target: Option<usize>,
    notifier: StatusNotifier,
}

impl LibraryClient {
    pub fn new(api: Arc<dyn BookApi>, status_ttl: Duration) -> Self {
        Self {
            api,
            books: Vec::new(),
            draft: Book::default(),
            edit_target: None,
            notifier: StatusNotifier::new(status_ttl),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn draft(&self) -> &Book {
        &self.draft
    }

    pub fn edit_target(&self) -> Option<usize> {
        self.edit_target
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Label of the form's submit button
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Add"
        }
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.notifier.current()
    }

    /// Replace the whole list with the server's.
    pub async fn load_all(&mut self) -> AppResult<()> {
        match self.api.list().await {
            Ok(books) => {
                tracing::info!("Loaded {} books", books.len());
                self.books = books;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error fetching books: {}", e);
                self.notify(StatusMessage::failure("Failed to fetch books"));
                Err(e)
            }
        }
    }

    /// Submit the form: update the edit target if one is set, create otherwise.
    ///
    /// On success the draft and edit mode are cleared. On failure both are
    /// kept so the user can retry.
    pub async fn submit(&mut self, draft: Book) -> AppResult<()> {
        self.draft = draft;

        match self.edit_target {
            Some(index) => self.update_at(index).await,
            None => self.create().await,
        }
    }

    async fn update_at(&mut self, index: usize) -> AppResult<()> {
        let result = match self.books.get(index) {
            Some(current) => match current.identifier() {
                Some(id) => self.api.update(id, &self.draft).await,
                None => Err(AppError::MissingIdentifier),
            },
            None => Err(AppError::NotFound(format!("Book at row {}", index))),
        };

        match result {
            Ok(()) => {
                self.books[index] = std::mem::take(&mut self.draft);
                self.edit_target = None;
                self.notify(StatusMessage::success("Book updated successfully"));
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error updating book at row {}: {}", index, e);
                self.notify(StatusMessage::failure("Failed to update book"));
                Err(e)
            }
        }
    }

    async fn create(&mut self) -> AppResult<()> {
        if let Err(e) = self.api.create(&self.draft).await {
            tracing::error!("Error adding book: {}", e);
            self.notify(StatusMessage::failure("Failed to add book"));
            return Err(e);
        }

        let created = std::mem::take(&mut self.draft);
        match self.api.list().await {
            Ok(books) => self.books = books,
            Err(e) => {
                tracing::warn!("Book added but reload failed, appending locally: {}", e);
                self.books.push(created);
            }
        }
        self.notify(StatusMessage::success("Book added successfully"));
        Ok(())
    }

    /// Load the book at `index` into the form and enter edit mode.
    pub fn begin_edit(&mut self, index: usize) -> AppResult<()> {
        let book = self
            .books
            .get(index)
            .ok_or_else(|| AppError::NotFound(format!("Book at row {}", index)))?;

        self.draft = book.clone();
        self.edit_target = Some(index);
        Ok(())
    }

    /// Delete the book at `index` on the server, then locally.
    pub async fn remove(&mut self, index: usize) -> AppResult<()> {
        let book = self
            .books
            .get(index)
            .ok_or_else(|| AppError::NotFound(format!("Book at row {}", index)))?;

        let result = match book.identifier() {
            Some(id) => self.api.delete(id).await,
            None => Err(AppError::MissingIdentifier),
        };

        if let Err(e) = result {
            tracing::error!("Error deleting book at row {}: {}", index, e);
            self.notify(StatusMessage::failure("Failed to delete book"));
            return Err(e);
        }

        self.books.remove(index);
        match self.edit_target {
            Some(target) if target == index => {
                // The row being edited is gone
                self.draft = Book::default();
                self.edit_target = None;
            }
            Some(target) if target > index => self.edit_target = Some(target - 1),
            _ => {}
        }
        self.notify(StatusMessage::success("Book deleted successfully"));
        Ok(())
    }

    pub fn notify(&mut self, message: StatusMessage) {
        self.notifier.notify(message);
    }

    pub fn dismiss_status(&mut self) {
        self.notifier.dismiss();
    }
}
