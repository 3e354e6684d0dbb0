use axum::response::Html;

use super::views;

/// GET /
pub async fn index() -> Html<String> {
    views::index_page()
}

/// GET /about
pub async fn about() -> Html<&'static str> {
    Html("<h2>About the home page</h2>")
}
