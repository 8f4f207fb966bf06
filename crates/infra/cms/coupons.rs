use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{repositories::coupons::CouponRepository, value_objects::coupons::CouponModel},
    infra::cms::sanity_client::SanityClient,
};

const ACTIVE_COUPON_BY_CODE: &str = r#"*[_type == "coupon" && code == $code && isActive == true][0]{
  code,
  discountType,
  discountAmount,
  expiryDate,
  isActive
}"#;

pub struct CouponSanity {
    client: Arc<SanityClient>,
}

impl CouponSanity {
    pub fn new(client: Arc<SanityClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CouponRepository for CouponSanity {
    async fn find_active_by_code(&self, code: String) -> Result<Option<CouponModel>> {
        // `[0]` on an empty match yields `null`, which decodes to None.
        self.client
            .fetch::<Option<CouponModel>, _>(ACTIVE_COUPON_BY_CODE, &[("code", code)])
            .await
    }
}
