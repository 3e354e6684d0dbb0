use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::info;

use super::{WebError, auth, views};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PostForm {
    pub title: String,
    pub article: String,
}

/// GET /home
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let posts = state.store.list_posts().await?;
    Ok(views::home_page(&posts))
}

/// GET /blog/{id}/
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, WebError> {
    let post = state
        .store
        .get_post(id)
        .await?
        .ok_or_else(|| WebError::post_not_found(id))?;

    Ok(views::post_page(&post))
}

/// GET /create_post (behind `require_login`)
pub async fn new_page(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let user = auth::current_user(&state, &session)
        .await?
        .ok_or_else(|| WebError::internal("Authenticated session without a user"))?;

    Ok(views::post_form_page(&user))
}

/// POST /create_post (behind `require_login`)
///
/// The author is always the session user, never client input.
pub async fn create(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<PostForm>,
) -> Result<Redirect, WebError> {
    let user = auth::current_user(&state, &session)
        .await?
        .ok_or_else(|| WebError::internal("Authenticated session without a user"))?;

    let post = state
        .store
        .create_post(&form.title, &form.article, user.id)
        .await?;

    info!("User {} published post {}", user.id, post.id);
    Ok(Redirect::to("/"))
}

/// GET /update/{id}/
pub async fn edit_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, WebError> {
    let post = state
        .store
        .get_post(id)
        .await?
        .ok_or_else(|| WebError::post_not_found(id))?;

    Ok(views::edit_form_page(&post))
}

/// POST /update/{id}/
///
/// Overwrites title and article only. The route performs no ownership
/// check; any caller may edit any post.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<PostForm>,
) -> Result<Redirect, WebError> {
    state
        .store
        .update_post(id, &form.title, &form.article)
        .await?
        .ok_or_else(|| WebError::post_not_found(id))?;

    Ok(Redirect::to("/home"))
}

/// GET|POST /delete/{id}/
///
/// Deletes unconditionally and answers with an empty 200, no redirect.
/// Like update, the route performs no ownership check.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let deleted = state.store.delete_post(id).await?;
    if !deleted {
        return Err(WebError::post_not_found(id));
    }

    info!("Deleted post {}", id);
    Ok(StatusCode::OK.into_response())
}
