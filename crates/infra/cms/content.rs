use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::repositories::content::ContentRepository, infra::cms::sanity_client::SanityClient,
};

const PACKAGES: &str = r#"*[_type == "package"] | order(order asc, price asc){
  _id, name, description, price, duration, features, isPopular
}"#;

const TESTIMONIALS: &str = r#"*[_type == "testimonial"] | order(_createdAt desc){
  _id, name, role, content, rating, "imageUrl": image.asset->url
}"#;

const BLOG_POSTS: &str = r#"*[_type == "post" && defined(slug.current)] | order(publishedAt desc){
  _id, title, "slug": slug.current, excerpt, publishedAt, author,
  "coverImageUrl": mainImage.asset->url
}"#;

const BLOG_POST_BY_SLUG: &str = r#"*[_type == "post" && slug.current == $slug][0]{
  _id, title, "slug": slug.current, excerpt, body, publishedAt, author,
  "coverImageUrl": mainImage.asset->url
}"#;

const SITE_SETTINGS: &str = r#"*[_type == "siteSettings"][0]"#;

pub struct ContentSanity {
    client: Arc<SanityClient>,
}

impl ContentSanity {
    pub fn new(client: Arc<SanityClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentRepository for ContentSanity {
    async fn packages(&self) -> Result<Value> {
        self.client.fetch_unparameterized(PACKAGES).await
    }

    async fn testimonials(&self) -> Result<Value> {
        self.client.fetch_unparameterized(TESTIMONIALS).await
    }

    async fn blog_posts(&self) -> Result<Value> {
        self.client.fetch_unparameterized(BLOG_POSTS).await
    }

    async fn blog_post_by_slug(&self, slug: String) -> Result<Value> {
        self.client
            .fetch::<Value, _>(BLOG_POST_BY_SLUG, &[("slug", slug)])
            .await
    }

    async fn site_settings(&self) -> Result<Value> {
        self.client.fetch_unparameterized(SITE_SETTINGS).await
    }
}
