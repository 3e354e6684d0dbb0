use axum::{
    Form,
    extract::{Request, State},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::info;

use super::{WebError, views};
use crate::db::User;
use crate::state::AppState;

/// Session key holding the authenticated user's id.
const SESSION_USER_KEY: &str = "user_id";

#[derive(Deserialize)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Middleware
// ============================================================================

/// Redirects anonymous callers to the login page; everyone else passes
/// through. Routes behind this layer may assume a user id in the session.
pub async fn require_login(session: Session, request: Request, next: Next) -> Response {
    if let Ok(Some(_)) = session.get::<i32>(SESSION_USER_KEY).await {
        return next.run(request).await;
    }

    Redirect::to("/login").into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /signup
pub async fn signup_page() -> Html<String> {
    views::signup_page()
}

/// POST /signup
///
/// Email and username are each pre-checked for collisions; on either one
/// the caller is bounced back to the form with no record created and no
/// hint which field collided. The unique indexes remain the backstop.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SignupForm>,
) -> Result<Redirect, WebError> {
    if state.store.get_user_by_email(&form.email).await?.is_some() {
        return Ok(Redirect::to("/signup"));
    }
    if state
        .store
        .get_user_by_username(&form.username)
        .await?
        .is_some()
    {
        return Ok(Redirect::to("/signup"));
    }

    let user = state
        .store
        .create_user(
            &form.first_name,
            &form.last_name,
            &form.username,
            &form.email,
            &form.password,
            Some(&state.config.security),
        )
        .await?;

    info!("Registered user {}", user.username);
    Ok(Redirect::to("/login"))
}

/// GET /login
pub async fn login_page() -> Html<String> {
    views::login_page()
}

/// POST /login
///
/// A failed login re-renders the form with no error signal; unknown user
/// and wrong password are indistinguishable to the caller.
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    let is_valid = state
        .store
        .verify_user_password(&form.username, &form.password)
        .await?;

    if is_valid {
        let user = state
            .store
            .get_user_by_username(&form.username)
            .await?
            .ok_or_else(|| WebError::internal("Verified user missing on lookup"))?;

        session
            .insert(SESSION_USER_KEY, user.id)
            .await
            .map_err(|e| WebError::internal(format!("Failed to create session: {e}")))?;

        info!("User {} logged in", user.username);
        return Ok(Redirect::to("/create_post").into_response());
    }

    Ok(views::login_page().into_response())
}

/// GET /logout
pub async fn logout(session: Session) -> Redirect {
    let _ = session.flush().await;
    Redirect::to("/")
}

// ============================================================================
// Helpers
// ============================================================================

/// User id from the session, or `None` when anonymous.
pub async fn session_user_id(session: &Session) -> Result<Option<i32>, WebError> {
    session
        .get::<i32>(SESSION_USER_KEY)
        .await
        .map_err(|e| WebError::internal(format!("Session error: {e}")))
}

/// The authenticated user, or `None` when anonymous.
pub async fn current_user(state: &AppState, session: &Session) -> Result<Option<User>, WebError> {
    let Some(id) = session_user_id(session).await? else {
        return Ok(None);
    };

    Ok(state.store.get_user(id).await?)
}
