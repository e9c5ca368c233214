use tracing::instrument;
use validator::Validate;

use crate::{
    entities::{
        blog_post::{BlogPost, UpdateBlogPostRequest},
        entity::Resolved,
    },
    errors::AppError,
    repositories::gateway::DataGateway,
    use_cases::search::filter,
    utils::valid_id::valid_entity_id,
};

#[derive(Clone)]
pub struct BlogPostHandler {
    gateway: DataGateway,
}

impl BlogPostHandler {
    pub fn new(gateway: DataGateway) -> Self {
        BlogPostHandler { gateway }
    }

    /// Newest first, narrowed by category and free-text query.
    #[instrument(skip(self))]
    pub async fn list_blog_posts(&self, category: &str, query: &str) -> Result<Vec<Resolved<BlogPost>>, AppError> {
        let posts = self.gateway.get_all::<BlogPost>().await?;
        Ok(filter(&posts, query, category))
    }

    #[instrument(skip(self))]
    pub async fn get_blog_posts_by_author(&self, author: &str) -> Result<Vec<Resolved<BlogPost>>, AppError> {
        self.gateway.get_by_field::<BlogPost>("author", author.trim()).await
    }

    #[instrument(skip(self))]
    pub async fn get_blog_post_by_id(&self, post_id: &str) -> Result<Resolved<BlogPost>, AppError> {
        let id = valid_entity_id(post_id)?;
        self.gateway
            .get_by_id::<BlogPost>(id)
            .await
            .map_err(blog_not_found)
    }

    #[instrument(skip(self, post))]
    pub async fn update_blog_post(&self, post_id: &str, post: &UpdateBlogPostRequest) -> Result<Resolved<BlogPost>, AppError> {
        let id = valid_entity_id(post_id)?;
        post.validate()?;
        if post.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        let patch = post
            .to_patch()
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        self.gateway
            .update::<BlogPost>(id, patch)
            .await
            .map_err(blog_not_found)
    }

    /// Sweeps the post's images, then deletes the row.
    #[instrument(skip(self))]
    pub async fn delete_blog_post(&self, post_id: &str) -> Result<(), AppError> {
        let id = valid_entity_id(post_id)?;
        self.gateway
            .delete::<BlogPost>(id)
            .await
            .map_err(blog_not_found)
    }
}

fn blog_not_found(e: AppError) -> AppError {
    match e {
        AppError::NotFound(_) => AppError::NotFound("Blog post not found".to_string()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::{
        constants::PLACEHOLDER_IMAGE,
        repositories::store::{MockObjectStore, MockRowStore, RowQuery},
    };

    fn handler(rows: MockRowStore, objects: MockObjectStore) -> BlogPostHandler {
        BlogPostHandler::new(DataGateway::new(Arc::new(rows), Arc::new(objects), PLACEHOLDER_IMAGE))
    }

    fn row(id: &str, category: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("Post {id}"),
            "excerpt": "excerpt",
            "full_content": "body",
            "author": "Maya Patel",
            "read_time": "5 min read",
            "category": category,
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": "2024-03-01T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn list_filters_by_category() {
        let mut rows = MockRowStore::new();
        rows.expect_select()
            .withf(|table, query| table == "blog_posts" && *query == RowQuery::all())
            .returning(|_, _| Ok(vec![row("b1", "Technology"), row("b2", "Community")]));
        let mut objects = MockObjectStore::new();
        objects.expect_exists().returning(|_, _| Ok(false));

        let posts = handler(rows, objects).list_blog_posts("community", "").await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id(), "b2");
        assert_eq!(posts[0].image_url, PLACEHOLDER_IMAGE);
    }

    #[tokio::test]
    async fn empty_update_is_rejected_before_the_network() {
        let mut rows = MockRowStore::new();
        rows.expect_update().never();
        let err = handler(rows, MockObjectStore::new())
            .update_blog_post("b1", &UpdateBlogPostRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn blank_title_patch_is_invalid() {
        let update = UpdateBlogPostRequest {
            title: Some("   ".into()),
            ..Default::default()
        };
        let err = handler(MockRowStore::new(), MockObjectStore::new())
            .update_blog_post("b1", &update)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn deleting_missing_post_is_not_found() {
        let mut rows = MockRowStore::new();
        rows.expect_delete().returning(|_, _| Ok(false));
        let mut objects = MockObjectStore::new();
        objects.expect_remove().returning(|_, _| Ok(()));

        let err = handler(rows, objects).delete_blog_post("gone").await.unwrap_err();
        assert_eq!(err, AppError::NotFound("Blog post not found".into()));
    }
}
