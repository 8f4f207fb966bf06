use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use crates::{
    domain::{repositories::blogs::BlogRepository, value_objects::blogs::InsertBlogModel},
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{
            admin_sessions::AdminSessionPostgres, admin_users::AdminUserPostgres,
            blogs::BlogPostgres,
        },
    },
};
use uuid::Uuid;

use crate::{
    auth::require_admin,
    axum_http::{
        api_response::ApiResponse, error_responses::AppError, validated_json::ValidatedJson,
    },
    usecases::{admin_auth::AdminAuthUseCase, blogs::BlogUseCase},
};

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    admin_auth_usecase: Arc<AdminAuthUseCase<AdminUserPostgres, AdminSessionPostgres>>,
) -> Router {
    let blog_repository = BlogPostgres::new(Arc::clone(&db_pool));
    let blog_usecase = BlogUseCase::new(Arc::new(blog_repository));

    // Routes above the layer are admin-only.
    Router::new()
        .route("/all", get(list_all))
        .route("/", post(create))
        .route("/:id", put(update).delete(remove))
        .route_layer(middleware::from_fn_with_state(
            admin_auth_usecase,
            require_admin::<AdminUserPostgres, AdminSessionPostgres>,
        ))
        .route("/", get(list_published))
        .route("/:id", get(find_by_id))
        .route("/slug/:slug", get(find_by_slug))
        .with_state(Arc::new(blog_usecase))
}

pub async fn list_published<T>(
    State(blog_usecase): State<Arc<BlogUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: BlogRepository + Send + Sync,
{
    Ok(ApiResponse::data(blog_usecase.list(false).await?))
}

pub async fn list_all<T>(
    State(blog_usecase): State<Arc<BlogUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: BlogRepository + Send + Sync,
{
    Ok(ApiResponse::data(blog_usecase.list(true).await?))
}

pub async fn find_by_id<T>(
    State(blog_usecase): State<Arc<BlogUseCase<T>>>,
    Path(blog_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: BlogRepository + Send + Sync,
{
    Ok(ApiResponse::data(
        blog_usecase.find_published_by_id(blog_id).await?,
    ))
}

pub async fn find_by_slug<T>(
    State(blog_usecase): State<Arc<BlogUseCase<T>>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    T: BlogRepository + Send + Sync,
{
    Ok(ApiResponse::data(
        blog_usecase.find_published_by_slug(slug).await?,
    ))
}

pub async fn create<T>(
    State(blog_usecase): State<Arc<BlogUseCase<T>>>,
    ValidatedJson(insert_blog_model): ValidatedJson<InsertBlogModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: BlogRepository + Send + Sync,
{
    let blog = blog_usecase.create(insert_blog_model).await?;
    Ok((StatusCode::CREATED, ApiResponse::data(blog)))
}

pub async fn update<T>(
    State(blog_usecase): State<Arc<BlogUseCase<T>>>,
    Path(blog_id): Path<Uuid>,
    ValidatedJson(insert_blog_model): ValidatedJson<InsertBlogModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: BlogRepository + Send + Sync,
{
    let blog = blog_usecase.update(blog_id, insert_blog_model).await?;
    Ok(ApiResponse::data(blog))
}

pub async fn remove<T>(
    State(blog_usecase): State<Arc<BlogUseCase<T>>>,
    Path(blog_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: BlogRepository + Send + Sync,
{
    blog_usecase.delete(blog_id).await?;
    Ok(ApiResponse::message("Blog post deleted"))
}
