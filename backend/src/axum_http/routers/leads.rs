use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use crates::{
    domain::{
        repositories::leads::LeadRepository,
        value_objects::leads::{InsertLeadModel, LeadSubmitted},
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{
            admin_sessions::AdminSessionPostgres, admin_users::AdminUserPostgres,
            leads::LeadPostgres,
        },
    },
};

use crate::{
    auth::require_admin,
    axum_http::{
        api_response::ApiResponse, error_responses::AppError, validated_json::ValidatedJson,
    },
    usecases::{admin_auth::AdminAuthUseCase, leads::LeadUseCase},
};

const LEAD_THANK_YOU: &str = "Thank you for reaching out. We'll get back to you soon.";

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    admin_auth_usecase: Arc<AdminAuthUseCase<AdminUserPostgres, AdminSessionPostgres>>,
) -> Router {
    Router::new()
        .route("/", get(list_recent))
        .route_layer(middleware::from_fn_with_state(
            admin_auth_usecase,
            require_admin::<AdminUserPostgres, AdminSessionPostgres>,
        ))
        .route("/", post(submit))
        .with_state(lead_usecase(db_pool))
}

/// The standalone contact form endpoint, mounted at the site root.
pub fn submit_routes(db_pool: Arc<PgPoolSquad>) -> Router {
    Router::new()
        .route("/submit-lead", post(submit))
        .with_state(lead_usecase(db_pool))
}

fn lead_usecase(db_pool: Arc<PgPoolSquad>) -> Arc<LeadUseCase<LeadPostgres>> {
    let lead_repository = LeadPostgres::new(Arc::clone(&db_pool));
    Arc::new(LeadUseCase::new(Arc::new(lead_repository)))
}

pub async fn submit<T>(
    State(lead_usecase): State<Arc<LeadUseCase<T>>>,
    ValidatedJson(insert_lead_model): ValidatedJson<InsertLeadModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: LeadRepository + Send + Sync,
{
    lead_usecase.submit(insert_lead_model).await?;

    Ok((
        StatusCode::CREATED,
        Json(LeadSubmitted {
            success: true,
            message: LEAD_THANK_YOU.to_string(),
        }),
    ))
}

pub async fn list_recent<T>(
    State(lead_usecase): State<Arc<LeadUseCase<T>>>,
) -> Result<impl IntoResponse, AppError>
where
    T: LeadRepository + Send + Sync,
{
    Ok(ApiResponse::data(lead_usecase.list_recent().await?))
}
