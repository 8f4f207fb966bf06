use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use crates::{
    domain::{
        repositories::payment_trackings::PaymentTrackingRepository,
        value_objects::payment_trackings::{InsertPaymentTrackingModel, UpdatePaymentStatusModel},
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{
            admin_sessions::AdminSessionPostgres, admin_users::AdminUserPostgres,
            payment_trackings::PaymentTrackingPostgres,
        },
    },
};
use uuid::Uuid;

use crate::{
    auth::require_admin,
    axum_http::{
        api_response::ApiResponse, error_responses::AppError, validated_json::ValidatedJson,
    },
    usecases::{admin_auth::AdminAuthUseCase, payment_trackings::PaymentTrackingUseCase},
};

/// Every payment route is admin-only.
pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    admin_auth_usecase: Arc<AdminAuthUseCase<AdminUserPostgres, AdminSessionPostgres>>,
) -> Router {
    let payment_tracking_repository = PaymentTrackingPostgres::new(Arc::clone(&db_pool));
    let payment_tracking_usecase =
        PaymentTrackingUseCase::new(Arc::new(payment_tracking_repository));

    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(find_by_id).put(update).delete(remove))
        .route("/:id/status", put(update_status))
        .route_layer(middleware::from_fn_with_state(
            admin_auth_usecase,
            require_admin::<AdminUserPostgres, AdminSessionPostgres>,
        ))
        .with_state(Arc::new(payment_tracking_usecase))
}

pub async fn list<T>(
    State(payment_tracking_usecase): State<Arc<PaymentTrackingUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: PaymentTrackingRepository + Send + Sync,
{
    Ok(ApiResponse::data(payment_tracking_usecase.list().await?))
}

pub async fn find_by_id<T>(
    State(payment_tracking_usecase): State<Arc<PaymentTrackingUseCase<T>>>,
    Path(payment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: PaymentTrackingRepository + Send + Sync,
{
    Ok(ApiResponse::data(
        payment_tracking_usecase.find_by_id(payment_id).await?,
    ))
}

pub async fn create<T>(
    State(payment_tracking_usecase): State<Arc<PaymentTrackingUseCase<T>>>,
    ValidatedJson(insert_payment_model): ValidatedJson<InsertPaymentTrackingModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: PaymentTrackingRepository + Send + Sync,
{
    let payment = payment_tracking_usecase.create(insert_payment_model).await?;
    Ok((StatusCode::CREATED, ApiResponse::data(payment)))
}

pub async fn update<T>(
    State(payment_tracking_usecase): State<Arc<PaymentTrackingUseCase<T>>>,
    Path(payment_id): Path<Uuid>,
    ValidatedJson(insert_payment_model): ValidatedJson<InsertPaymentTrackingModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: PaymentTrackingRepository + Send + Sync,
{
    let payment = payment_tracking_usecase
        .update(payment_id, insert_payment_model)
        .await?;
    Ok(ApiResponse::data(payment))
}

pub async fn update_status<T>(
    State(payment_tracking_usecase): State<Arc<PaymentTrackingUseCase<T>>>,
    Path(payment_id): Path<Uuid>,
    ValidatedJson(status_model): ValidatedJson<UpdatePaymentStatusModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: PaymentTrackingRepository + Send + Sync,
{
    let payment = payment_tracking_usecase
        .update_status(payment_id, status_model.status)
        .await?;
    Ok(ApiResponse::data(payment))
}

pub async fn remove<T>(
    State(payment_tracking_usecase): State<Arc<PaymentTrackingUseCase<T>>>,
    Path(payment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: PaymentTrackingRepository + Send + Sync,
{
    payment_tracking_usecase.delete(payment_id).await?;
    Ok(ApiResponse::message("Payment deleted"))
}
