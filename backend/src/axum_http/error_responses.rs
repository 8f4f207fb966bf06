use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::usecases::{
    CrudError, admin_auth::AdminAuthError, checkout::CheckoutError, content::ContentError,
    coupons::CouponError,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(BTreeMap<String, Vec<String>>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maps a use-case status onto the matching variant. Anything that is not
    /// a client or downstream error is reported as internal.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => {
                AppError::BadGateway(message)
            }
            status if status.is_client_error() => AppError::BadRequest(message),
            _ => AppError::Internal(anyhow::anyhow!(message)),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let messages = field_errors
                    .iter()
                    .map(|err| match &err.message {
                        Some(message) => message.to_string(),
                        None => format!("invalid {}", err.code),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        AppError::Validation(fields)
    }
}

// Use-case errors keep their internal cause; everything else becomes a status
// and a client-safe message.
impl From<CrudError> for AppError {
    fn from(err: CrudError) -> Self {
        match err {
            CrudError::Internal(inner) => AppError::Internal(inner),
            other => AppError::from_status(other.status_code(), other.to_string()),
        }
    }
}

impl From<AdminAuthError> for AppError {
    fn from(err: AdminAuthError) -> Self {
        match err {
            AdminAuthError::Internal(inner) => AppError::Internal(inner),
            other => AppError::from_status(other.status_code(), other.to_string()),
        }
    }
}

impl From<CouponError> for AppError {
    fn from(err: CouponError) -> Self {
        match err {
            CouponError::Internal(inner) => AppError::Internal(inner),
            other => AppError::from_status(other.status_code(), other.to_string()),
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::Internal(inner) | CheckoutError::Coupon(CouponError::Internal(inner)) => {
                AppError::Internal(inner)
            }
            other => AppError::from_status(other.status_code(), other.to_string()),
        }
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        AppError::from_status(err.status_code(), err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, errors) = match self {
            AppError::Unauthorized => ("Unauthorized".to_string(), None),
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::BadGateway(msg) => {
                (msg, None)
            }
            AppError::Validation(fields) => ("Validation failed".to_string(), Some(fields)),
            AppError::Internal(err) => {
                error!(error = ?err, "request failed with internal error");
                // Don't leak internal error detail to client
                ("Internal server error".to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            code: status.as_u16(),
            message,
            errors,
        });

        (status, body).into_response()
    }
}
