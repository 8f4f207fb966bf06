use std::sync::Arc;

use crates::domain::repositories::content::ContentRepository;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content not found")]
    NotFound,
    #[error("Content is temporarily unavailable")]
    Upstream(#[from] anyhow::Error),
}

impl ContentError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ContentError::NotFound => StatusCode::NOT_FOUND,
            ContentError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;

pub struct ContentUseCase<T>
where
    T: ContentRepository + Send + Sync,
{
    content_repository: Arc<T>,
}

impl<T> ContentUseCase<T>
where
    T: ContentRepository + Send + Sync,
{
    pub fn new(content_repository: Arc<T>) -> Self {
        Self { content_repository }
    }

    pub async fn packages(&self) -> ContentResult<Value> {
        self.content_repository
            .packages()
            .await
            .map_err(|err| upstream("packages", err))
    }

    pub async fn testimonials(&self) -> ContentResult<Value> {
        self.content_repository
            .testimonials()
            .await
            .map_err(|err| upstream("testimonials", err))
    }

    pub async fn blog_posts(&self) -> ContentResult<Value> {
        self.content_repository
            .blog_posts()
            .await
            .map_err(|err| upstream("blog_posts", err))
    }

    pub async fn blog_post_by_slug(&self, slug: String) -> ContentResult<Value> {
        let post = self
            .content_repository
            .blog_post_by_slug(slug)
            .await
            .map_err(|err| upstream("blog_post", err))?;

        found(post)
    }

    pub async fn site_settings(&self) -> ContentResult<Value> {
        let settings = self
            .content_repository
            .site_settings()
            .await
            .map_err(|err| upstream("site_settings", err))?;

        found(settings)
    }
}

fn upstream(document: &'static str, err: anyhow::Error) -> ContentError {
    error!(document, cms_error = ?err, "content: cms query failed");
    ContentError::Upstream(err)
}

// `[0]` queries yield null when nothing matches.
fn found(value: Value) -> ContentResult<Value> {
    if value.is_null() {
        Err(ContentError::NotFound)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::repositories::content::MockContentRepository;
    use serde_json::json;

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let mut content_repository = MockContentRepository::new();
        content_repository
            .expect_blog_post_by_slug()
            .returning(|_| Box::pin(async { Ok(Value::Null) }));

        let usecase = ContentUseCase::new(Arc::new(content_repository));
        let err = usecase
            .blog_post_by_slug("missing".to_string())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cms_failure_is_bad_gateway() {
        let mut content_repository = MockContentRepository::new();
        content_repository
            .expect_packages()
            .returning(|| Box::pin(async { Err(anyhow::anyhow!("dns failure")) }));

        let usecase = ContentUseCase::new(Arc::new(content_repository));
        let err = usecase.packages().await.unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Content is temporarily unavailable");
    }

    #[tokio::test]
    async fn documents_pass_through_untouched() {
        let mut content_repository = MockContentRepository::new();
        content_repository
            .expect_testimonials()
            .returning(|| Box::pin(async { Ok(json!([{ "name": "Asha", "rating": 5 }])) }));

        let usecase = ContentUseCase::new(Arc::new(content_repository));
        assert_eq!(
            usecase.testimonials().await.unwrap(),
            json!([{ "name": "Asha", "rating": 5 }])
        );
    }
}
