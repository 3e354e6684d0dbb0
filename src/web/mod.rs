use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use time;

use crate::state::AppState;

pub mod auth;
mod error;
mod pages;
mod posts;
mod views;

pub use error::WebError;

/// Builds the full application router.
///
/// Sessions live in process memory, so every restart logs everyone out.
/// The session layer wraps the protected routes too; `require_login`
/// extracts the session the layer provides.
pub fn router(state: Arc<AppState>) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(state.config.server.secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            state.config.session.inactivity_minutes,
        )));

    Router::new()
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/home", get(posts::home))
        .route("/blog/{id}/", get(posts::show))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/update/{id}/", get(posts::edit_page).post(posts::update))
        .route("/delete/{id}/", get(posts::delete).post(posts::delete))
        .merge(create_protected_router())
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn create_protected_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create_post", get(posts::new_page).post(posts::create))
        .route_layer(middleware::from_fn(auth::require_login))
}
