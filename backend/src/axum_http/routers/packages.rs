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
        repositories::packages::PackageRepository, value_objects::packages::InsertPackageModel,
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{
            admin_sessions::AdminSessionPostgres, admin_users::AdminUserPostgres,
            packages::PackagePostgres,
        },
    },
};
use uuid::Uuid;

use crate::{
    auth::require_admin,
    axum_http::{
        api_response::ApiResponse, error_responses::AppError, validated_json::ValidatedJson,
    },
    usecases::{admin_auth::AdminAuthUseCase, packages::PackageUseCase},
};

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    admin_auth_usecase: Arc<AdminAuthUseCase<AdminUserPostgres, AdminSessionPostgres>>,
) -> Router {
    let package_repository = PackagePostgres::new(Arc::clone(&db_pool));
    let package_usecase = PackageUseCase::new(Arc::new(package_repository));

    Router::new()
        .route("/", post(create))
        .route("/:id", put(update).delete(remove))
        .route_layer(middleware::from_fn_with_state(
            admin_auth_usecase,
            require_admin::<AdminUserPostgres, AdminSessionPostgres>,
        ))
        .route("/", get(list))
        .route("/:id", get(find_by_id))
        .with_state(Arc::new(package_usecase))
}

pub async fn list<T>(
    State(package_usecase): State<Arc<PackageUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: PackageRepository + Send + Sync,
{
    let packages = package_usecase.list().await?;
    Ok(ApiResponse::data(packages))
}

pub async fn find_by_id<T>(
    State(package_usecase): State<Arc<PackageUseCase<T>>>,
    Path(package_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: PackageRepository + Send + Sync,
{
    let package = package_usecase.find_by_id(package_id).await?;
    Ok(ApiResponse::data(package))
}

pub async fn create<T>(
    State(package_usecase): State<Arc<PackageUseCase<T>>>,
    ValidatedJson(insert_package_model): ValidatedJson<InsertPackageModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: PackageRepository + Send + Sync,
{
    let package = package_usecase.create(insert_package_model).await?;
    Ok((StatusCode::CREATED, ApiResponse::data(package)))
}

pub async fn update<T>(
    State(package_usecase): State<Arc<PackageUseCase<T>>>,
    Path(package_id): Path<Uuid>,
    ValidatedJson(insert_package_model): ValidatedJson<InsertPackageModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: PackageRepository + Send + Sync,
{
    let package = package_usecase.update(package_id, insert_package_model).await?;
    Ok(ApiResponse::data(package))
}

pub async fn remove<T>(
    State(package_usecase): State<Arc<PackageUseCase<T>>>,
    Path(package_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: PackageRepository + Send + Sync,
{
    package_usecase.delete(package_id).await?;
    Ok(ApiResponse::message("Package deleted"))
}
