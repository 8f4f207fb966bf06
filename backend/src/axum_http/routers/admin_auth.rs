use std::sync::Arc;

use axum::{
    Extension, Router,
    extract::State,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use crates::{
    domain::{
        repositories::{admin_sessions::AdminSessionRepository, admin_users::AdminUserRepository},
        value_objects::admin::{AdminIdentity, LoginModel},
    },
    infra::db::repositories::{admin_sessions::AdminSessionPostgres, admin_users::AdminUserPostgres},
};
use tracing::warn;

use crate::{
    auth::{CookiePolicy, require_admin, session_token},
    axum_http::{
        api_response::ApiResponse, error_responses::AppError, validated_json::ValidatedJson,
    },
    usecases::admin_auth::AdminAuthUseCase,
};

pub struct AdminAuthState<U, S>
where
    U: AdminUserRepository + Send + Sync + 'static,
    S: AdminSessionRepository + Send + Sync + 'static,
{
    pub admin_auth_usecase: Arc<AdminAuthUseCase<U, S>>,
    pub cookie_policy: CookiePolicy,
}

pub fn routes(
    admin_auth_usecase: Arc<AdminAuthUseCase<AdminUserPostgres, AdminSessionPostgres>>,
    secure_cookies: bool,
) -> Router {
    let cookie_policy = CookiePolicy {
        secure: secure_cookies,
        ttl: admin_auth_usecase.session_ttl(),
    };

    Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&admin_auth_usecase),
            require_admin::<AdminUserPostgres, AdminSessionPostgres>,
        ))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(Arc::new(AdminAuthState {
            admin_auth_usecase,
            cookie_policy,
        }))
}

pub async fn login<U, S>(
    State(state): State<Arc<AdminAuthState<U, S>>>,
    jar: CookieJar,
    ValidatedJson(login_model): ValidatedJson<LoginModel>,
) -> Result<impl IntoResponse, AppError>
where
    U: AdminUserRepository + Send + Sync + 'static,
    S: AdminSessionRepository + Send + Sync + 'static,
{
    let issued = state.admin_auth_usecase.login(login_model).await?;
    let jar = jar.add(state.cookie_policy.session_cookie(issued.token));

    Ok((jar, ApiResponse::data(issued.identity)))
}

pub async fn logout<U, S>(
    State(state): State<Arc<AdminAuthState<U, S>>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError>
where
    U: AdminUserRepository + Send + Sync + 'static,
    S: AdminSessionRepository + Send + Sync + 'static,
{
    if let Some(token) = session_token(&jar) {
        // The cookie is cleared either way so a stale browser can log out.
        if let Err(err) = state.admin_auth_usecase.logout(token).await {
            warn!(error = ?err, "admin_auth: session row could not be deleted on logout");
        }
    }

    let jar = jar.remove(state.cookie_policy.removal_cookie());
    Ok((jar, ApiResponse::message("Logged out")))
}

pub async fn me(Extension(identity): Extension<AdminIdentity>) -> impl IntoResponse {
    ApiResponse::data(identity)
}
