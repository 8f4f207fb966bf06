use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use crates::{
    domain::{
        repositories::{
            coupons::CouponRepository, leads::LeadRepository, packages::PackageRepository,
            payment_trackings::PaymentTrackingRepository,
        },
        value_objects::checkout::{StartCheckoutModel, VerifyPaymentModel},
    },
    infra::{
        cms::{coupons::CouponSanity, sanity_client::SanityClient},
        db::{
            postgres::postgres_connection::PgPoolSquad,
            repositories::{
                leads::LeadPostgres, packages::PackagePostgres,
                payment_trackings::PaymentTrackingPostgres,
            },
        },
    },
    payments::razorpay_client::RazorpayClient,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    axum_http::{
        api_response::ApiResponse, error_responses::AppError, validated_json::ValidatedJson,
    },
    usecases::{
        checkout::{CheckoutUseCase, PaymentGateway, UpiPayee},
        coupons::CouponUseCase,
    },
};

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    sanity_client: Arc<SanityClient>,
    razorpay_client: Arc<RazorpayClient>,
    upi_payee: UpiPayee,
) -> Router {
    let package_repository = PackagePostgres::new(Arc::clone(&db_pool));
    let coupon_repository = CouponSanity::new(sanity_client);
    let lead_repository = LeadPostgres::new(Arc::clone(&db_pool));
    let payment_tracking_repository = PaymentTrackingPostgres::new(Arc::clone(&db_pool));

    let coupon_usecase =
        CouponUseCase::new(Arc::new(package_repository), Arc::new(coupon_repository));
    let checkout_usecase = CheckoutUseCase::new(
        Arc::new(coupon_usecase),
        Arc::new(lead_repository),
        Arc::new(payment_tracking_repository),
        razorpay_client,
        upi_payee,
    );

    Router::new()
        .route("/", post(start))
        .route("/verify", post(verify))
        .route("/:payment_id/cancel", post(cancel))
        .with_state(Arc::new(checkout_usecase))
}

pub async fn start<P, C, L, Pay, G>(
    State(checkout_usecase): State<Arc<CheckoutUseCase<P, C, L, Pay, G>>>,
    ValidatedJson(checkout_model): ValidatedJson<StartCheckoutModel>,
) -> Result<impl IntoResponse, AppError>
where
    P: PackageRepository + Send + Sync + 'static,
    C: CouponRepository + Send + Sync + 'static,
    L: LeadRepository + Send + Sync + 'static,
    Pay: PaymentTrackingRepository + Send + Sync + 'static,
    G: PaymentGateway + 'static,
{
    let response = checkout_usecase.start(checkout_model).await?;
    Ok((StatusCode::CREATED, ApiResponse::data(response)))
}

pub async fn verify<P, C, L, Pay, G>(
    State(checkout_usecase): State<Arc<CheckoutUseCase<P, C, L, Pay, G>>>,
    ValidatedJson(verify_model): ValidatedJson<VerifyPaymentModel>,
) -> Result<impl IntoResponse, AppError>
where
    P: PackageRepository + Send + Sync + 'static,
    C: CouponRepository + Send + Sync + 'static,
    L: LeadRepository + Send + Sync + 'static,
    Pay: PaymentTrackingRepository + Send + Sync + 'static,
    G: PaymentGateway + 'static,
{
    let response = checkout_usecase.verify(verify_model).await?;
    Ok(ApiResponse::data(response))
}

pub async fn cancel<P, C, L, Pay, G>(
    State(checkout_usecase): State<Arc<CheckoutUseCase<P, C, L, Pay, G>>>,
    Path(payment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    P: PackageRepository + Send + Sync + 'static,
    C: CouponRepository + Send + Sync + 'static,
    L: LeadRepository + Send + Sync + 'static,
    Pay: PaymentTrackingRepository + Send + Sync + 'static,
    G: PaymentGateway + 'static,
{
    let state = checkout_usecase.cancel(payment_id).await?;
    Ok(ApiResponse::data(json!({ "payment_id": payment_id, "state": state })))
}
