use std::sync::Arc;

use chrono::Utc;
use crates::domain::{
    repositories::{coupons::CouponRepository, packages::PackageRepository},
    value_objects::coupons::{CouponModel, CouponRejection, DiscountQuote},
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CouponError {
    #[error("Package not found")]
    PackageNotFound,
    #[error(transparent)]
    Rejected(#[from] CouponRejection),
    #[error("Could not verify the coupon right now, please retry or remove it")]
    LookupFailed(anyhow::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CouponError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            CouponError::PackageNotFound => StatusCode::NOT_FOUND,
            CouponError::Rejected(_) => StatusCode::BAD_REQUEST,
            CouponError::LookupFailed(_) => StatusCode::BAD_GATEWAY,
            CouponError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type CouponResult<T> = std::result::Result<T, CouponError>;

/// Prices a package with an optional coupon. A coupon that cannot be checked
/// never falls back to either the full or the discounted price.
pub struct CouponUseCase<P, C>
where
    P: PackageRepository + Send + Sync + 'static,
    C: CouponRepository + Send + Sync + 'static,
{
    package_repo: Arc<P>,
    coupon_repo: Arc<C>,
}

impl<P, C> CouponUseCase<P, C>
where
    P: PackageRepository + Send + Sync + 'static,
    C: CouponRepository + Send + Sync + 'static,
{
    pub fn new(package_repo: Arc<P>, coupon_repo: Arc<C>) -> Self {
        Self {
            package_repo,
            coupon_repo,
        }
    }

    pub async fn quote(
        &self,
        package_id: Uuid,
        coupon_code: Option<String>,
    ) -> CouponResult<DiscountQuote> {
        let package = self
            .package_repo
            .find_by_id(package_id)
            .await
            .map_err(|err| {
                error!(%package_id, db_error = ?err, "coupons: failed to load package");
                CouponError::Internal(err)
            })?
            .ok_or(CouponError::PackageNotFound)?;

        let code = coupon_code
            .as_deref()
            .map(CouponModel::normalize_code)
            .filter(|code| !code.is_empty());

        let Some(code) = code else {
            return Ok(DiscountQuote::new(
                package.id,
                package.name,
                package.price,
                package.price,
                None,
            ));
        };

        let coupon = self
            .coupon_repo
            .find_active_by_code(code.clone())
            .await
            .map_err(|err| {
                error!(%code, cms_error = ?err, "coupons: coupon lookup failed");
                CouponError::LookupFailed(err)
            })?;

        let Some(coupon) = coupon else {
            warn!(%code, "coupons: unknown or inactive code");
            return Err(CouponRejection::Invalid.into());
        };

        let final_price = coupon.apply(package.price, Utc::now()).map_err(|rejection| {
            warn!(%code, %rejection, "coupons: coupon rejected");
            rejection
        })?;

        info!(
            %package_id,
            %code,
            base_price = package.price,
            final_price,
            "coupons: discount applied"
        );

        Ok(DiscountQuote::new(
            package.id,
            package.name,
            package.price,
            final_price,
            Some(code),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crates::domain::{
        entities::packages::PackageEntity,
        repositories::{coupons::MockCouponRepository, packages::MockPackageRepository},
        value_objects::enums::discount_types::DiscountType,
    };
    use mockall::predicate::eq;

    fn package(package_id: Uuid, price: i64) -> PackageEntity {
        PackageEntity {
            id: package_id,
            name: "Inner Child Healing".to_string(),
            description: "Six guided sessions".to_string(),
            price,
            duration: "6 weeks".to_string(),
            features: vec![],
            is_popular: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn coupon(code: &str, discount_type: DiscountType, amount: f64) -> CouponModel {
        CouponModel {
            code: code.to_string(),
            discount_type,
            discount_amount: amount,
            expiry_date: None,
            is_active: true,
        }
    }

    fn package_repo(package_id: Uuid, price: i64) -> MockPackageRepository {
        let mut package_repo = MockPackageRepository::new();
        package_repo
            .expect_find_by_id()
            .with(eq(package_id))
            .returning(move |package_id| Box::pin(async move { Ok(Some(package(package_id, price))) }));
        package_repo
    }

    #[tokio::test]
    async fn flat_coupon_quote() {
        let package_id = Uuid::new_v4();
        let mut coupon_repo = MockCouponRepository::new();
        coupon_repo
            .expect_find_active_by_code()
            .with(eq("FLAT2000".to_string()))
            .returning(|code| {
                Box::pin(async move { Ok(Some(coupon(&code, DiscountType::Flat, 2000.0))) })
            });

        let usecase = CouponUseCase::new(
            Arc::new(package_repo(package_id, 15000)),
            Arc::new(coupon_repo),
        );

        let quote = usecase
            .quote(package_id, Some("flat2000".to_string()))
            .await
            .unwrap();

        assert_eq!(quote.final_price, 13000);
        assert_eq!(quote.discount, 2000);
        assert_eq!(quote.coupon_code.as_deref(), Some("FLAT2000"));
    }

    #[tokio::test]
    async fn percentage_coupon_quote() {
        let package_id = Uuid::new_v4();
        let mut coupon_repo = MockCouponRepository::new();
        coupon_repo
            .expect_find_active_by_code()
            .withf(|code| code == "SAVE10")
            .returning(|code| {
                Box::pin(async move { Ok(Some(coupon(&code, DiscountType::Percentage, 10.0))) })
            });

        let usecase = CouponUseCase::new(
            Arc::new(package_repo(package_id, 15000)),
            Arc::new(coupon_repo),
        );

        let quote = usecase
            .quote(package_id, Some(" Save10 ".to_string()))
            .await
            .unwrap();

        assert_eq!(quote.final_price, 13500);
    }

    #[tokio::test]
    async fn blank_code_means_full_price_without_lookup() {
        let package_id = Uuid::new_v4();
        let mut coupon_repo = MockCouponRepository::new();
        coupon_repo.expect_find_active_by_code().never();

        let usecase = CouponUseCase::new(
            Arc::new(package_repo(package_id, 15000)),
            Arc::new(coupon_repo),
        );

        let quote = usecase.quote(package_id, Some("   ".to_string())).await.unwrap();
        assert_eq!(quote.final_price, 15000);
        assert_eq!(quote.coupon_code, None);
    }

    #[tokio::test]
    async fn unknown_code_is_rejected() {
        let package_id = Uuid::new_v4();
        let mut coupon_repo = MockCouponRepository::new();
        coupon_repo
            .expect_find_active_by_code()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = CouponUseCase::new(
            Arc::new(package_repo(package_id, 15000)),
            Arc::new(coupon_repo),
        );

        let err = usecase
            .quote(package_id, Some("NOPE".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, CouponError::Rejected(CouponRejection::Invalid)));
        assert_eq!(err.to_string(), "Invalid coupon code");
    }

    #[tokio::test]
    async fn expired_code_is_rejected() {
        let package_id = Uuid::new_v4();
        let mut coupon_repo = MockCouponRepository::new();
        coupon_repo.expect_find_active_by_code().returning(|code| {
            let mut expired = coupon(&code, DiscountType::Percentage, 50.0);
            expired.expiry_date = Some(Utc::now() - Duration::days(1));
            Box::pin(async move { Ok(Some(expired)) })
        });

        let usecase = CouponUseCase::new(
            Arc::new(package_repo(package_id, 15000)),
            Arc::new(coupon_repo),
        );

        let err = usecase
            .quote(package_id, Some("OLD50".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, CouponError::Rejected(CouponRejection::Expired)));
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lookup_failure_rejects_instead_of_charging_full_price() {
        let package_id = Uuid::new_v4();
        let mut coupon_repo = MockCouponRepository::new();
        coupon_repo
            .expect_find_active_by_code()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("cms timeout")) }));

        let usecase = CouponUseCase::new(
            Arc::new(package_repo(package_id, 15000)),
            Arc::new(coupon_repo),
        );

        let err = usecase
            .quote(package_id, Some("SAVE10".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, CouponError::LookupFailed(_)));
    }

    #[tokio::test]
    async fn unknown_package_is_not_found() {
        let mut package_repo = MockPackageRepository::new();
        package_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = CouponUseCase::new(
            Arc::new(package_repo),
            Arc::new(MockCouponRepository::new()),
        );

        let err = usecase.quote(Uuid::new_v4(), None).await.unwrap_err();
        assert!(matches!(err, CouponError::PackageNotFound));
    }
}
