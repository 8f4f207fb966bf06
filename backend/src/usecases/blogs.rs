use std::sync::Arc;

use crates::domain::{
    entities::blogs::BlogEntity, repositories::blogs::BlogRepository,
    value_objects::blogs::InsertBlogModel,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::usecases::{CrudError, CrudResult};

pub struct BlogUseCase<T>
where
    T: BlogRepository + Send + Sync,
{
    blog_repository: Arc<T>,
}

impl<T> BlogUseCase<T>
where
    T: BlogRepository + Send + Sync,
{
    pub fn new(blog_repository: Arc<T>) -> Self {
        Self { blog_repository }
    }

    /// Drafts are only listed for admins.
    pub async fn list(&self, include_drafts: bool) -> CrudResult<Vec<BlogEntity>> {
        self.blog_repository
            .list(!include_drafts)
            .await
            .map_err(|err| {
                error!(include_drafts, db_error = ?err, "blogs: failed to list posts");
                CrudError::Internal(err)
            })
    }

    pub async fn find_published_by_id(&self, blog_id: Uuid) -> CrudResult<BlogEntity> {
        self.blog_repository
            .find_by_id(blog_id)
            .await?
            .filter(|blog| blog.is_published)
            .ok_or(CrudError::NotFound("Blog post"))
    }

    pub async fn find_published_by_slug(&self, slug: String) -> CrudResult<BlogEntity> {
        self.blog_repository
            .find_by_slug(slug)
            .await?
            .filter(|blog| blog.is_published)
            .ok_or(CrudError::NotFound("Blog post"))
    }

    pub async fn create(&self, insert_blog_model: InsertBlogModel) -> CrudResult<BlogEntity> {
        let blog = self
            .blog_repository
            .create(insert_blog_model.to_entity())
            .await
            .map_err(|err| {
                error!(slug = %insert_blog_model.slug, db_error = ?err, "blogs: failed to create post");
                CrudError::Internal(err)
            })?;

        info!(blog_id = %blog.id, slug = %blog.slug, "blogs: created");
        Ok(blog)
    }

    pub async fn update(
        &self,
        blog_id: Uuid,
        insert_blog_model: InsertBlogModel,
    ) -> CrudResult<BlogEntity> {
        let blog = self
            .blog_repository
            .update(blog_id, insert_blog_model.to_update_entity())
            .await
            .map_err(|err| {
                error!(%blog_id, db_error = ?err, "blogs: failed to update post");
                CrudError::Internal(err)
            })?
            .ok_or(CrudError::NotFound("Blog post"))?;

        info!(%blog_id, "blogs: updated");
        Ok(blog)
    }

    pub async fn delete(&self, blog_id: Uuid) -> CrudResult<()> {
        if !self.blog_repository.delete(blog_id).await? {
            return Err(CrudError::NotFound("Blog post"));
        }

        info!(%blog_id, "blogs: deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crates::domain::repositories::blogs::MockBlogRepository;
    use mockall::predicate::eq;

    fn blog(is_published: bool) -> BlogEntity {
        let now = Utc::now();
        BlogEntity {
            id: Uuid::new_v4(),
            title: "Letting go".to_string(),
            slug: "letting-go".to_string(),
            excerpt: None,
            content: "Body".to_string(),
            author: "Coach".to_string(),
            cover_image_url: None,
            is_published,
            published_at: is_published.then_some(now),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn public_list_asks_for_published_only() {
        let mut blog_repository = MockBlogRepository::new();
        blog_repository
            .expect_list()
            .with(eq(true))
            .times(1)
            .returning(|_| Box::pin(async { Ok(vec![blog(true)]) }));

        let usecase = BlogUseCase::new(Arc::new(blog_repository));
        assert_eq!(usecase.list(false).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn draft_is_hidden_from_slug_lookup() {
        let mut blog_repository = MockBlogRepository::new();
        blog_repository
            .expect_find_by_slug()
            .with(eq("letting-go".to_string()))
            .returning(|_| Box::pin(async { Ok(Some(blog(false))) }));

        let usecase = BlogUseCase::new(Arc::new(blog_repository));
        let err = usecase
            .find_published_by_slug("letting-go".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, CrudError::NotFound("Blog post")));
    }

    #[tokio::test]
    async fn published_post_is_found_by_id() {
        let post = blog(true);
        let blog_id = post.id;

        let mut blog_repository = MockBlogRepository::new();
        blog_repository
            .expect_find_by_id()
            .with(eq(blog_id))
            .returning(move |_| {
                let post = post.clone();
                Box::pin(async move { Ok(Some(post)) })
            });

        let usecase = BlogUseCase::new(Arc::new(blog_repository));
        assert_eq!(usecase.find_published_by_id(blog_id).await.unwrap().id, blog_id);
    }
}
