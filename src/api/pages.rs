//! Library page and its form actions
//!
//! Every action is a POST answered with a redirect to `/`, so a reload never
//! resubmits a form.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use validator::Validate;

use super::{render, surfaced};
use crate::{
    error::{AppError, AppResult},
    models::Book,
    AppState,
};

/// Render the form, the table and the current status message
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let library = state.library.lock().await;
    Html(render::library_page(&library))
}

/// Add a book, or update the one being edited
pub async fn submit_book(
    State(state): State<AppState>,
    Form(book): Form<Book>,
) -> AppResult<Redirect> {
    book.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut library = state.library.lock().await;
    surfaced(library.submit(book).await)?;
    Ok(Redirect::to("/"))
}

/// Load a row into the form
pub async fn edit_book(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> AppResult<Redirect> {
    state.library.lock().await.begin_edit(index)?;
    Ok(Redirect::to("/"))
}

/// Delete a row
pub async fn delete_book(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> AppResult<Redirect> {
    let mut library = state.library.lock().await;
    surfaced(library.remove(index).await)?;
    Ok(Redirect::to("/"))
}

/// Close the status toast
pub async fn dismiss_status(State(state): State<AppState>) -> Redirect {
    state.library.lock().await.dismiss_status();
    Redirect::to("/")
}
