use std::{collections::HashMap, sync::Arc};

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use crates::{
    domain::{
        entities::{leads::InsertLeadEntity, payment_trackings::InsertPaymentTrackingEntity},
        repositories::{
            coupons::CouponRepository, leads::LeadRepository, packages::PackageRepository,
            payment_trackings::PaymentTrackingRepository,
        },
        value_objects::{
            checkout::{
                CheckoutDispatch, CheckoutEvent, CheckoutOutcome, CheckoutResponse, CheckoutState,
                InvalidTransition, StartCheckoutModel, VerifyPaymentModel, VerifyPaymentResponse,
            },
            coupons::DiscountQuote,
            enums::{
                lead_sources::LeadSource, payment_channels::PaymentChannel,
                payment_statuses::PaymentStatus,
            },
        },
    },
    payments::{
        razorpay_client::{RazorpayClient, RazorpayOrder, rupees_to_paise},
        upi::UpiPaymentRequest,
    },
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::usecases::coupons::{CouponError, CouponUseCase};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    fn key_id(&self) -> String;

    async fn create_order(
        &self,
        amount_paise: i64,
        receipt: String,
        notes: HashMap<String, String>,
    ) -> AnyResult<RazorpayOrder>;

    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str)
    -> AnyResult<bool>;
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    fn key_id(&self) -> String {
        RazorpayClient::key_id(self).to_string()
    }

    async fn create_order(
        &self,
        amount_paise: i64,
        receipt: String,
        notes: HashMap<String, String>,
    ) -> AnyResult<RazorpayOrder> {
        RazorpayClient::create_order(self, amount_paise, &receipt, &notes).await
    }

    fn verify_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> AnyResult<bool> {
        self.verify_payment_signature(order_id, payment_id, signature)
    }
}

/// Payee shown in manual UPI requests.
#[derive(Debug, Clone)]
pub struct UpiPayee {
    pub vpa: String,
    pub payee_name: String,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Coupon(#[from] CouponError),
    #[error("Nothing to charge for this package")]
    ZeroAmount,
    #[error("Payment signature is invalid")]
    InvalidSignature,
    #[error("Payment not found")]
    PaymentNotFound,
    #[error("Payment was already {0}")]
    AlreadyResolved(PaymentStatus),
    #[error(transparent)]
    Transition(#[from] InvalidTransition),
    #[error("Payment gateway is unavailable, please try again")]
    Gateway(anyhow::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CheckoutError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            CheckoutError::Coupon(err) => err.status_code(),
            CheckoutError::ZeroAmount | CheckoutError::InvalidSignature => StatusCode::BAD_REQUEST,
            CheckoutError::PaymentNotFound => StatusCode::NOT_FOUND,
            CheckoutError::AlreadyResolved(_) | CheckoutError::Transition(_) => {
                StatusCode::CONFLICT
            }
            CheckoutError::Gateway(_) => StatusCode::BAD_GATEWAY,
            CheckoutError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type CheckoutResult<T> = std::result::Result<T, CheckoutError>;

pub struct CheckoutUseCase<P, C, L, Pay, G>
where
    P: PackageRepository + Send + Sync + 'static,
    C: CouponRepository + Send + Sync + 'static,
    L: LeadRepository + Send + Sync + 'static,
    Pay: PaymentTrackingRepository + Send + Sync + 'static,
    G: PaymentGateway + 'static,
{
    coupon_usecase: Arc<CouponUseCase<P, C>>,
    lead_repo: Arc<L>,
    payment_repo: Arc<Pay>,
    gateway: Arc<G>,
    upi_payee: UpiPayee,
}

impl<P, C, L, Pay, G> CheckoutUseCase<P, C, L, Pay, G>
where
    P: PackageRepository + Send + Sync + 'static,
    C: CouponRepository + Send + Sync + 'static,
    L: LeadRepository + Send + Sync + 'static,
    Pay: PaymentTrackingRepository + Send + Sync + 'static,
    G: PaymentGateway + 'static,
{
    pub fn new(
        coupon_usecase: Arc<CouponUseCase<P, C>>,
        lead_repo: Arc<L>,
        payment_repo: Arc<Pay>,
        gateway: Arc<G>,
        upi_payee: UpiPayee,
    ) -> Self {
        Self {
            coupon_usecase,
            lead_repo,
            payment_repo,
            gateway,
            upi_payee,
        }
    }

    /// Prices the order, records it as pending and hands back what the client
    /// needs to collect the payment on the chosen channel.
    pub async fn start(&self, checkout_model: StartCheckoutModel) -> CheckoutResult<CheckoutResponse> {
        let state = CheckoutState::Idle.next(CheckoutEvent::SubmitDetails)?;
        info!(
            package_id = %checkout_model.package_id,
            channel = %checkout_model.channel,
            "checkout: details submitted"
        );

        let quote = self
            .coupon_usecase
            .quote(checkout_model.package_id, checkout_model.coupon_code.clone())
            .await?;

        if quote.final_price <= 0 {
            warn!(package_id = %quote.package_id, "checkout: refusing zero amount order");
            return Err(CheckoutError::ZeroAmount);
        }

        self.log_lead(&checkout_model).await;

        let payment = self
            .payment_repo
            .create(InsertPaymentTrackingEntity {
                customer_name: checkout_model.name.trim().to_string(),
                customer_email: checkout_model.email.trim().to_lowercase(),
                customer_phone: checkout_model.phone.trim().to_string(),
                package_id: quote.package_id.to_string(),
                package_name: quote.package_name.clone(),
                amount: quote.final_price,
                coupon_code: quote.coupon_code.clone(),
                channel: checkout_model.channel.to_string(),
                status: PaymentStatus::Pending.to_string(),
                gateway_order_id: None,
                gateway_payment_id: None,
            })
            .await
            .map_err(|err| {
                error!(db_error = ?err, "checkout: failed to store pending payment");
                CheckoutError::Internal(err)
            })?;

        let state = state.next(CheckoutState::dispatch_event(checkout_model.channel))?;

        let dispatch = match checkout_model.channel {
            PaymentChannel::Gateway => self.open_gateway_order(payment.id, &quote).await?,
            PaymentChannel::ManualUpi => self.manual_upi_request(payment.id, &quote)?,
        };

        info!(
            payment_id = %payment.id,
            amount = quote.final_price,
            "checkout: payment dispatched"
        );

        Ok(CheckoutResponse {
            payment_id: payment.id,
            state,
            quote,
            dispatch,
        })
    }

    /// Completion callback of the gateway widget.
    pub async fn verify(
        &self,
        verify_model: VerifyPaymentModel,
    ) -> CheckoutResult<VerifyPaymentResponse> {
        let payment = self
            .payment_repo
            .find_by_gateway_order_id(verify_model.order_id.clone())
            .await?
            .ok_or(CheckoutError::PaymentNotFound)?;

        let current_status = stored_status(&payment.status)?;
        if current_status != PaymentStatus::Pending {
            warn!(payment_id = %payment.id, status = %current_status, "checkout: verify on resolved payment");
            return Err(CheckoutError::AlreadyResolved(current_status));
        }

        let signature_ok = self.gateway.verify_signature(
            &verify_model.order_id,
            &verify_model.payment_id,
            &verify_model.signature,
        )?;

        if !signature_ok {
            warn!(
                payment_id = %payment.id,
                order_id = %verify_model.order_id,
                "checkout: gateway signature mismatch"
            );
            return Err(CheckoutError::InvalidSignature);
        }

        let outcome = CheckoutOutcome::Success;
        let updated = self
            .payment_repo
            .update_status(
                payment.id,
                outcome.payment_status(),
                Some(verify_model.payment_id.clone()),
            )
            .await
            .map_err(|err| {
                error!(payment_id = %payment.id, db_error = ?err, "checkout: failed to mark payment paid");
                CheckoutError::Internal(err)
            })?
            .ok_or(CheckoutError::PaymentNotFound)?;

        let state = CheckoutState::GatewayCheckout.next(CheckoutEvent::Complete(outcome))?;
        info!(payment_id = %updated.id, "checkout: gateway payment verified");

        Ok(VerifyPaymentResponse {
            payment_id: updated.id,
            state,
            status: outcome.payment_status(),
        })
    }

    /// The widget was closed. Nothing is written, so the record stays pending.
    /// A payment that already resolved cannot be cancelled.
    pub async fn cancel(&self, payment_id: Uuid) -> CheckoutResult<CheckoutState> {
        let payment = self
            .payment_repo
            .find_by_id(payment_id)
            .await?
            .ok_or(CheckoutError::PaymentNotFound)?;

        let current_status = stored_status(&payment.status)?;
        let current_state = match CheckoutOutcome::from_payment_status(current_status) {
            Some(outcome) => CheckoutState::Resolved(outcome),
            None => match PaymentChannel::from_str(&payment.channel) {
                Some(PaymentChannel::ManualUpi) => CheckoutState::ManualQr,
                _ => CheckoutState::GatewayCheckout,
            },
        };

        let state = current_state.next(CheckoutEvent::Cancel).map_err(|err| {
            warn!(%payment_id, status = %payment.status, "checkout: cancel on resolved payment");
            CheckoutError::Transition(err)
        })?;

        info!(%payment_id, "checkout: cancelled by customer");
        Ok(state)
    }

    // Contact details are kept even when the payment never completes. A failed
    // insert must not block the checkout.
    async fn log_lead(&self, checkout_model: &StartCheckoutModel) {
        let lead = InsertLeadEntity {
            name: checkout_model.name.trim().to_string(),
            email: checkout_model.email.trim().to_lowercase(),
            phone: Some(checkout_model.phone.trim().to_string()),
            message: checkout_model
                .message
                .as_deref()
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(str::to_string),
            source: LeadSource::Checkout.to_string(),
        };

        if let Err(err) = self.lead_repo.insert(lead).await {
            warn!(db_error = ?err, "checkout: failed to log lead, continuing");
        }
    }

    async fn open_gateway_order(
        &self,
        payment_id: Uuid,
        quote: &DiscountQuote,
    ) -> CheckoutResult<CheckoutDispatch> {
        let notes = HashMap::from([
            ("payment_id".to_string(), payment_id.to_string()),
            ("package_name".to_string(), quote.package_name.clone()),
        ]);

        let order = match self
            .gateway
            .create_order(rupees_to_paise(quote.final_price), payment_id.to_string(), notes)
            .await
        {
            Ok(order) => order,
            Err(err) => {
                error!(%payment_id, gateway_error = ?err, "checkout: gateway order creation failed");
                if let Err(db_err) = self
                    .payment_repo
                    .update_status(payment_id, PaymentStatus::Failed, None)
                    .await
                {
                    error!(%payment_id, db_error = ?db_err, "checkout: failed to mark payment failed");
                }
                return Err(CheckoutError::Gateway(err));
            }
        };

        self.payment_repo
            .attach_gateway_order(payment_id, order.id.clone())
            .await
            .map_err(|err| {
                error!(%payment_id, order_id = %order.id, db_error = ?err, "checkout: failed to attach gateway order");
                CheckoutError::Internal(err)
            })?;

        Ok(CheckoutDispatch::Gateway {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            key_id: self.gateway.key_id(),
        })
    }

    fn manual_upi_request(
        &self,
        payment_id: Uuid,
        quote: &DiscountQuote,
    ) -> CheckoutResult<CheckoutDispatch> {
        let request = UpiPaymentRequest {
            vpa: self.upi_payee.vpa.clone(),
            payee_name: self.upi_payee.payee_name.clone(),
            amount: quote.final_price,
            note: Some(upi_note(&quote.package_name, payment_id)),
        };

        Ok(CheckoutDispatch::ManualUpi {
            upi_uri: request.to_uri()?,
            qr_svg: request.to_qr_svg()?,
        })
    }
}

fn stored_status(raw: &str) -> CheckoutResult<PaymentStatus> {
    PaymentStatus::from_str(raw).ok_or_else(|| {
        error!(status = %raw, "checkout: unknown payment status in store");
        CheckoutError::Internal(anyhow::anyhow!("unknown payment status: {raw}"))
    })
}

// Banks truncate long notes, so keep the reference short enough to survive.
fn upi_note(package_name: &str, payment_id: Uuid) -> String {
    let reference = payment_id.simple().to_string();
    format!("{} {}", package_name, &reference[..8])
}

#[cfg(test)]
mod tests;
