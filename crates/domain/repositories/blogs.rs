use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::blogs::{BlogEntity, InsertBlogEntity, UpdateBlogEntity};

#[async_trait]
#[automock]
pub trait BlogRepository {
    async fn list(&self, published_only: bool) -> Result<Vec<BlogEntity>>;
    async fn find_by_id(&self, blog_id: Uuid) -> Result<Option<BlogEntity>>;
    async fn find_by_slug(&self, slug: String) -> Result<Option<BlogEntity>>;
    async fn create(&self, blog: InsertBlogEntity) -> Result<BlogEntity>;
    async fn update(&self, blog_id: Uuid, blog: UpdateBlogEntity) -> Result<Option<BlogEntity>>;
    async fn delete(&self, blog_id: Uuid) -> Result<bool>;
}
