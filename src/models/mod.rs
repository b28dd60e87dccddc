//! Data models for the book library

pub mod book;
pub mod status;

// Re-export commonly used types
pub use book::Book;
pub use status::{StatusKind, StatusMessage};
