use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginModel {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

/// The authenticated admin attached to a request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AdminIdentity {
    pub admin_id: Uuid,
    pub username: String,
}
