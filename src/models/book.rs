//! Book record as exchanged with the remote service and the HTML form

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A book record.
///
/// The wire names (`book`, `number`) are the ones the `/Book/*` service
/// speaks; the form inputs use the same names so a posted form decodes
/// straight into a `Book`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Book {
    /// Title of the book
    #[serde(rename = "book", default)]
    #[validate(length(min = 1, message = "Book title is required"))]
    pub title: String,
    /// Author's name
    #[serde(default)]
    #[validate(length(min = 1, message = "Author's name is required"))]
    pub author: String,
    /// ISBN, may be empty
    #[serde(rename = "number", default)]
    pub isbn: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Key used in update/delete paths.
    ///
    /// `None` when the trimmed ISBN is empty, `.` or `..`: none of these
    /// survive as a path segment, so none can name a resource.
    pub fn identifier(&self) -> Option<&str> {
        match self.isbn.trim() {
            "" | "." | ".." => None,
            id => Some(id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.isbn.is_empty()
    }
}
