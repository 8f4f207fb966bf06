use thiserror::Error;

pub mod admin_auth;
pub mod blogs;
pub mod checkout;
pub mod content;
pub mod coupons;
pub mod leads;
pub mod packages;
pub mod payment_trackings;
pub mod testimonials;

#[derive(Debug, Error)]
pub enum CrudError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CrudError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            CrudError::NotFound(_) => StatusCode::NOT_FOUND,
            CrudError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type CrudResult<T> = std::result::Result<T, CrudError>;
