use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::axum_http::error_responses::AppError;

/// JSON body that has been decoded and passed its `validator` rules.
///
/// Undecodable bodies get a generic 400 so parser details never reach the
/// client; rule violations get a 400 listing each failing field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(rejection = %rejection.body_text(), "rejected malformed json payload");
                AppError::BadRequest("Invalid request payload".to_string())
            })?;

        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
