use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::coupons::CouponModel;

#[async_trait]
#[automock]
pub trait CouponRepository {
    /// Active coupon whose code equals `code` (already uppercase), if any.
    async fn find_active_by_code(&self, code: String) -> Result<Option<CouponModel>>;
}
