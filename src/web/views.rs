//! View-models and minimal HTML assembly for the page handlers.
//!
//! Markup is deliberately bare; styling is a presentation concern that
//! lives outside this crate. Anything user-supplied is escaped with
//! `html_escape` before it is spliced into a page.

use axum::response::Html;

use crate::db::{Post, User};

/// What the pages see of a post, distinct from the persisted record:
/// text fields arrive pre-escaped.
#[derive(Debug, Clone)]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub author: i32,
    pub article: String,
    pub date: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: html_escape::encode_text(&post.title).into_owned(),
            author: post.author,
            article: html_escape::encode_text(&post.article).into_owned(),
            // date is generated server-side as RFC 3339, never client input
            date: post.date.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserView {
    pub username: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            username: html_escape::encode_text(&user.username).into_owned(),
        }
    }
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    ))
}

pub fn index_page() -> Html<String> {
    page(
        "Inkpot",
        "<h1>Inkpot</h1>\n\
         <p>A small blog.</p>\n\
         <p><a href=\"/home\">All posts</a> | <a href=\"/signup\">Sign up</a> | \
         <a href=\"/login\">Log in</a> | <a href=\"/create_post\">Write a post</a></p>",
    )
}

pub fn home_page(posts: &[Post]) -> Html<String> {
    let mut body = String::from("<h1>All posts</h1>\n<ul>\n");
    for post in posts {
        let view = PostView::from(post);
        body.push_str(&format!(
            "<li><a href=\"/blog/{}/\">{}</a> by user {} on {}</li>\n",
            view.id, view.title, view.author, view.date
        ));
    }
    body.push_str("</ul>\n<p><a href=\"/\">Index</a></p>");
    page("All posts", &body)
}

pub fn post_page(post: &Post) -> Html<String> {
    let view = PostView::from(post);
    let body = format!(
        "<h1>{}</h1>\n\
         <p>by user {} on {}</p>\n\
         <div>{}</div>\n\
         <p><a href=\"/update/{}/\">Edit</a> | <a href=\"/home\">All posts</a></p>",
        view.title, view.author, view.date, view.article, view.id
    );
    page(&view.title, &body)
}

pub fn signup_page() -> Html<String> {
    page(
        "Sign up",
        "<h1>Sign up</h1>\n\
         <form method=\"post\" action=\"/signup\">\n\
         <label>First name <input type=\"text\" name=\"first_name\"></label><br>\n\
         <label>Last name <input type=\"text\" name=\"last_name\"></label><br>\n\
         <label>Username <input type=\"text\" name=\"username\"></label><br>\n\
         <label>Email <input type=\"email\" name=\"email\"></label><br>\n\
         <label>Password <input type=\"password\" name=\"password\"></label><br>\n\
         <button type=\"submit\">Sign up</button>\n\
         </form>\n\
         <p>Already registered? <a href=\"/login\">Log in</a></p>",
    )
}

pub fn login_page() -> Html<String> {
    page(
        "Log in",
        "<h1>Log in</h1>\n\
         <form method=\"post\" action=\"/login\">\n\
         <label>Username <input type=\"text\" name=\"username\"></label><br>\n\
         <label>Password <input type=\"password\" name=\"password\"></label><br>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <p>New here? <a href=\"/signup\">Sign up</a></p>",
    )
}

pub fn post_form_page(user: &User) -> Html<String> {
    let who = UserView::from(user);
    let body = format!(
        "<h1>New post</h1>\n\
         <p>Posting as {}</p>\n\
         <form method=\"post\" action=\"/create_post\">\n\
         <label>Title <input type=\"text\" name=\"title\"></label><br>\n\
         <label>Article <textarea name=\"article\"></textarea></label><br>\n\
         <button type=\"submit\">Publish</button>\n\
         </form>",
        who.username
    );
    page("New post", &body)
}

pub fn edit_form_page(post: &Post) -> Html<String> {
    let title_attr = html_escape::encode_double_quoted_attribute(&post.title);
    let article_text = html_escape::encode_text(&post.article);
    let body = format!(
        "<h1>Edit post</h1>\n\
         <form method=\"post\" action=\"/update/{}/\">\n\
         <label>Title <input type=\"text\" name=\"title\" value=\"{}\"></label><br>\n\
         <label>Article <textarea name=\"article\">{}</textarea></label><br>\n\
         <button type=\"submit\">Save</button>\n\
         </form>",
        post.id, title_attr, article_text
    );
    page("Edit post", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(title: &str, article: &str) -> Post {
        Post {
            id: 7,
            title: title.to_string(),
            author: 3,
            article: article.to_string(),
            date: "2026-03-01T12:00:00+00:00".to_string(),
        }
    }

    fn sample_user(username: &str) -> User {
        User {
            id: 3,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            username: username.to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn test_home_page_escapes_titles() {
        let post = sample_post("<script>alert(1)</script>", "body");
        let Html(html) = home_page(&[post]);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("/blog/7/"));
    }

    #[test]
    fn test_post_page_escapes_article() {
        let post = sample_post("Title", "<img src=x onerror=alert(1)>");
        let Html(html) = post_page(&post);

        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn test_post_form_escapes_username() {
        let user = sample_user("<b>jdoe</b>");
        let Html(html) = post_form_page(&user);

        assert!(!html.contains("<b>jdoe</b>"));
        assert!(html.contains("Posting as &lt;b&gt;jdoe&lt;/b&gt;"));
    }

    #[test]
    fn test_edit_form_escapes_attribute_quotes() {
        let post = sample_post("a\" onmouseover=\"x", "article");
        let Html(html) = edit_form_page(&post);

        assert!(!html.contains("value=\"a\" onmouseover="));
        assert!(html.contains("&quot;"));
        assert!(html.contains("/update/7/"));
    }
}
