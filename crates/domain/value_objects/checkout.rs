use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::domain::value_objects::{
    coupons::DiscountQuote,
    enums::{payment_channels::PaymentChannel, payment_statuses::PaymentStatus},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutOutcome {
    Success,
    Cancelled,
    Failed,
}

impl CheckoutOutcome {
    pub fn payment_status(&self) -> PaymentStatus {
        match self {
            CheckoutOutcome::Success => PaymentStatus::Success,
            CheckoutOutcome::Cancelled => PaymentStatus::Cancelled,
            CheckoutOutcome::Failed => PaymentStatus::Failed,
        }
    }

    /// `None` while the payment is still pending.
    pub fn from_payment_status(status: PaymentStatus) -> Option<Self> {
        match status {
            PaymentStatus::Pending => None,
            PaymentStatus::Success => Some(CheckoutOutcome::Success),
            PaymentStatus::Cancelled => Some(CheckoutOutcome::Cancelled),
            PaymentStatus::Failed => Some(CheckoutOutcome::Failed),
        }
    }
}

/// Where a single checkout attempt currently is.
///
/// `Idle -> DetailsEntered -> (GatewayCheckout | ManualQr) -> Resolved`, and
/// `Cancel` from any unresolved state goes back to `Idle`.
#[derive(Default, Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "state", content = "outcome", rename_all = "snake_case")]
pub enum CheckoutState {
    #[default]
    Idle,
    DetailsEntered,
    GatewayCheckout,
    ManualQr,
    Resolved(CheckoutOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutEvent {
    SubmitDetails,
    OpenGateway,
    ShowManualQr,
    Complete(CheckoutOutcome),
    Cancel,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("checkout cannot handle {event:?} while in {state:?}")]
pub struct InvalidTransition {
    pub state: CheckoutState,
    pub event: CheckoutEvent,
}

impl CheckoutState {
    pub fn next(self, event: CheckoutEvent) -> Result<Self, InvalidTransition> {
        use CheckoutEvent as E;
        use CheckoutState as S;

        match (self, event) {
            (S::Resolved(_), _) => Err(InvalidTransition { state: self, event }),
            (_, E::Cancel) => Ok(S::Idle),
            (S::Idle, E::SubmitDetails) => Ok(S::DetailsEntered),
            (S::DetailsEntered, E::OpenGateway) => Ok(S::GatewayCheckout),
            (S::DetailsEntered, E::ShowManualQr) => Ok(S::ManualQr),
            (S::GatewayCheckout | S::ManualQr, E::Complete(outcome)) => Ok(S::Resolved(outcome)),
            _ => Err(InvalidTransition { state: self, event }),
        }
    }

    pub fn dispatch_event(channel: PaymentChannel) -> CheckoutEvent {
        match channel {
            PaymentChannel::Gateway => CheckoutEvent::OpenGateway,
            PaymentChannel::ManualUpi => CheckoutEvent::ShowManualQr,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartCheckoutModel {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 7, max = 20))]
    pub phone: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub message: Option<String>,
    pub package_id: Uuid,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub coupon_code: Option<String>,
    pub channel: PaymentChannel,
}

/// Completion callback of the gateway widget.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyPaymentModel {
    #[validate(length(min = 1))]
    pub order_id: String,
    #[validate(length(min = 1))]
    pub payment_id: String,
    #[validate(length(min = 1))]
    pub signature: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum CheckoutDispatch {
    Gateway {
        order_id: String,
        /// Gateway amount in paise.
        amount: i64,
        currency: String,
        key_id: String,
    },
    ManualUpi {
        upi_uri: String,
        qr_svg: String,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckoutResponse {
    pub payment_id: Uuid,
    pub state: CheckoutState,
    pub quote: DiscountQuote,
    pub dispatch: CheckoutDispatch,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VerifyPaymentResponse {
    pub payment_id: Uuid,
    pub state: CheckoutState,
    pub status: PaymentStatus,
}
