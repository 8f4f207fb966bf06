use std::sync::Arc;

use axum::{Router, extract::State, response::IntoResponse, routing::post};
use crates::{
    domain::{
        repositories::{coupons::CouponRepository, packages::PackageRepository},
        value_objects::coupons::ValidateCouponModel,
    },
    infra::{
        cms::{coupons::CouponSanity, sanity_client::SanityClient},
        db::{
            postgres::postgres_connection::PgPoolSquad,
            repositories::packages::PackagePostgres,
        },
    },
};

use crate::{
    axum_http::{
        api_response::ApiResponse, error_responses::AppError, validated_json::ValidatedJson,
    },
    usecases::coupons::CouponUseCase,
};

pub fn routes(db_pool: Arc<PgPoolSquad>, sanity_client: Arc<SanityClient>) -> Router {
    let package_repository = PackagePostgres::new(Arc::clone(&db_pool));
    let coupon_repository = CouponSanity::new(sanity_client);
    let coupon_usecase =
        CouponUseCase::new(Arc::new(package_repository), Arc::new(coupon_repository));

    Router::new()
        .route("/validate", post(validate))
        .with_state(Arc::new(coupon_usecase))
}

pub async fn validate<P, C>(
    State(coupon_usecase): State<Arc<CouponUseCase<P, C>>>,
    ValidatedJson(validate_model): ValidatedJson<ValidateCouponModel>,
) -> Result<impl IntoResponse, AppError>
where
    P: PackageRepository + Send + Sync + 'static,
    C: CouponRepository + Send + Sync + 'static,
{
    let quote = coupon_usecase
        .quote(validate_model.package_id, Some(validate_model.code))
        .await?;
    Ok(ApiResponse::data(quote))
}
