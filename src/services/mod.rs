//! Client-side services: list reconciliation and status notifications

pub mod library;
pub mod notifier;

pub use library::LibraryClient;
pub use notifier::StatusNotifier;
