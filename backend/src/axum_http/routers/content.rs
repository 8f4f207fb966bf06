use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use crates::{
    domain::repositories::content::ContentRepository,
    infra::cms::{content::ContentSanity, sanity_client::SanityClient},
};

use crate::{
    axum_http::{api_response::ApiResponse, error_responses::AppError},
    usecases::content::ContentUseCase,
};

pub fn routes(sanity_client: Arc<SanityClient>) -> Router {
    let content_repository = ContentSanity::new(sanity_client);
    let content_usecase = ContentUseCase::new(Arc::new(content_repository));

    Router::new()
        .route("/packages", get(packages))
        .route("/testimonials", get(testimonials))
        .route("/blogs", get(blog_posts))
        .route("/blogs/:slug", get(blog_post_by_slug))
        .route("/settings", get(site_settings))
        .with_state(Arc::new(content_usecase))
}

pub async fn packages<T>(
    State(content_usecase): State<Arc<ContentUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: ContentRepository + Send + Sync,
{
    Ok(ApiResponse::data(content_usecase.packages().await?))
}

pub async fn testimonials<T>(
    State(content_usecase): State<Arc<ContentUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: ContentRepository + Send + Sync,
{
    Ok(ApiResponse::data(content_usecase.testimonials().await?))
}

pub async fn blog_posts<T>(
    State(content_usecase): State<Arc<ContentUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: ContentRepository + Send + Sync,
{
    Ok(ApiResponse::data(content_usecase.blog_posts().await?))
}

pub async fn blog_post_by_slug<T>(
    State(content_usecase): State<Arc<ContentUseCase<T>>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    T: ContentRepository + Send + Sync,
{
    Ok(ApiResponse::data(
        content_usecase.blog_post_by_slug(slug).await?,
    ))
}

pub async fn site_settings<T>(
    State(content_usecase): State<Arc<ContentUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: ContentRepository + Send + Sync,
{
    Ok(ApiResponse::data(content_usecase.site_settings().await?))
}
