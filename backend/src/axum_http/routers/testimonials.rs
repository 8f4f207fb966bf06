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
    domain::{
        repositories::testimonials::TestimonialRepository,
        value_objects::testimonials::InsertTestimonialModel,
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{
            admin_sessions::AdminSessionPostgres, admin_users::AdminUserPostgres,
            testimonials::TestimonialPostgres,
        },
    },
};
use uuid::Uuid;

use crate::{
    auth::require_admin,
    axum_http::{
        api_response::ApiResponse, error_responses::AppError, validated_json::ValidatedJson,
    },
    usecases::{admin_auth::AdminAuthUseCase, testimonials::TestimonialUseCase},
};

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    admin_auth_usecase: Arc<AdminAuthUseCase<AdminUserPostgres, AdminSessionPostgres>>,
) -> Router {
    let testimonial_repository = TestimonialPostgres::new(Arc::clone(&db_pool));
    let testimonial_usecase = TestimonialUseCase::new(Arc::new(testimonial_repository));

    Router::new()
        .route("/", post(create))
        .route("/:id", put(update).delete(remove))
        .route_layer(middleware::from_fn_with_state(
            admin_auth_usecase,
            require_admin::<AdminUserPostgres, AdminSessionPostgres>,
        ))
        .route("/", get(list))
        .route("/:id", get(find_by_id))
        .with_state(Arc::new(testimonial_usecase))
}

pub async fn list<T>(
    State(testimonial_usecase): State<Arc<TestimonialUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: TestimonialRepository + Send + Sync,
{
    let testimonials = testimonial_usecase.list().await?;
    Ok(ApiResponse::data(testimonials))
}

pub async fn find_by_id<T>(
    State(testimonial_usecase): State<Arc<TestimonialUseCase<T>>>,
    Path(testimonial_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: TestimonialRepository + Send + Sync,
{
    let testimonial = testimonial_usecase.find_by_id(testimonial_id).await?;
    Ok(ApiResponse::data(testimonial))
}

pub async fn create<T>(
    State(testimonial_usecase): State<Arc<TestimonialUseCase<T>>>,
    ValidatedJson(insert_testimonial_model): ValidatedJson<InsertTestimonialModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: TestimonialRepository + Send + Sync,
{
    let testimonial = testimonial_usecase.create(insert_testimonial_model).await?;
    Ok((StatusCode::CREATED, ApiResponse::data(testimonial)))
}

pub async fn update<T>(
    State(testimonial_usecase): State<Arc<TestimonialUseCase<T>>>,
    Path(testimonial_id): Path<Uuid>,
    ValidatedJson(insert_testimonial_model): ValidatedJson<InsertTestimonialModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: TestimonialRepository + Send + Sync,
{
    let testimonial = testimonial_usecase.update(testimonial_id, insert_testimonial_model).await?;
    Ok(ApiResponse::data(testimonial))
}

pub async fn remove<T>(
    State(testimonial_usecase): State<Arc<TestimonialUseCase<T>>>,
    Path(testimonial_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: TestimonialRepository + Send + Sync,
{
    testimonial_usecase.delete(testimonial_id).await?;
    Ok(ApiResponse::message("Testimonial deleted"))
}
