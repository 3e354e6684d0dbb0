use crate::entities::{posts, prelude::*};
use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::info;

/// Repository for blog post operations
pub struct PostRepository {
    conn: DatabaseConnection,
}

impl PostRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(p: posts::Model) -> Post {
        Post {
            id: p.id,
            title: p.title,
            author: p.author,
            article: p.article,
            date: p.date,
        }
    }

    pub async fn create(&self, title: &str, article: &str, author: i32) -> Result<Post> {
        let active = posts::ActiveModel {
            title: Set(title.to_string()),
            author: Set(author),
            article: Set(article.to_string()),
            date: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert post")?;

        info!("Created post {} for author {}", model.id, author);
        Ok(Self::map_model(model))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Post>> {
        let result = Posts::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query post by ID")?;
        Ok(result.map(Self::map_model))
    }

    /// Every post in store order; callers get whatever order the
    /// database returns.
    pub async fn list_all(&self) -> Result<Vec<Post>> {
        let rows = Posts::find()
            .all(&self.conn)
            .await
            .context("Failed to list posts")?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Overwrite title and article only; author and date are never touched.
    /// Returns `None` when no post with this id exists.
    pub async fn update(&self, id: i32, title: &str, article: &str) -> Result<Option<Post>> {
        let Some(model) = Posts::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query post for update")?
        else {
            return Ok(None);
        };

        let mut active: posts::ActiveModel = model.into();
        active.title = Set(title.to_string());
        active.article = Set(article.to_string());

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update post")?;

        Ok(Some(Self::map_model(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Posts::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete post")?;
        Ok(result.rows_affected > 0)
    }
}

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub author: i32,
    pub article: String,
    pub date: String,
}
