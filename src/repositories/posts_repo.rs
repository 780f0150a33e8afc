use async_trait::async_trait;
use tracing::instrument;

use crate::{models::posts::Post, Result};

use super::SqliteRepo;

/// Every caller-supplied value is bound as a parameter, never spliced into
/// the statement text.
#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn list_posts(&self) -> Result<Vec<Post>>;
    async fn get_post(&self, post_id: i64) -> Result<Option<Post>>;
    async fn create_post(&self, title: &str, content: &str) -> Result<i64>;
    async fn update_post(&self, post_id: i64, title: &str, content: &str) -> Result<u64>;
    async fn delete_post(&self, post_id: i64) -> Result<u64>;
}

#[async_trait]
impl PostsRepository for SqliteRepo {
    #[instrument(skip(self))]
    async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content FROM posts ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn get_post(&self, post_id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content FROM posts WHERE id = ?1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    #[instrument(skip(self, content))]
    async fn create_post(&self, title: &str, content: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO posts (title, content) VALUES (?1, ?2)
            "#,
        )
        .bind(title)
        .bind(content)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self, content))]
    async fn update_post(&self, post_id: i64, title: &str, content: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET title = ?2, content = ?3 WHERE id = ?1
            "#,
        )
        .bind(post_id)
        .bind(title)
        .bind(content)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, post_id: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts WHERE id = ?1
            "#,
        )
        .bind(post_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
