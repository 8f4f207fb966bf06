use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

/// Read-only access to the CMS documents rendered by the site.
#[async_trait]
#[automock]
pub trait ContentRepository {
    async fn packages(&self) -> Result<Value>;
    async fn testimonials(&self) -> Result<Value>;
    async fn blog_posts(&self) -> Result<Value>;
    async fn blog_post_by_slug(&self, slug: String) -> Result<Value>;
    async fn site_settings(&self) -> Result<Value>;
}
