use serde::Deserialize;
use validator::Validate;

use crate::domain::{
    entities::payment_trackings::{InsertPaymentTrackingEntity, UpdatePaymentTrackingEntity},
    value_objects::enums::{payment_channels::PaymentChannel, payment_statuses::PaymentStatus},
};

/// Admin-side payment record, used for manual entries and whole-record replace.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InsertPaymentTrackingModel {
    #[validate(length(min = 1, max = 120))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[validate(length(min = 7, max = 20))]
    pub customer_phone: String,
    #[validate(length(min = 1))]
    pub package_id: String,
    #[validate(length(min = 1, max = 120))]
    pub package_name: String,
    #[validate(range(min = 0))]
    pub amount: i64,
    #[serde(default)]
    pub coupon_code: Option<String>,
    pub channel: PaymentChannel,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub gateway_order_id: Option<String>,
    #[serde(default)]
    pub gateway_payment_id: Option<String>,
}

impl InsertPaymentTrackingModel {
    pub fn to_entity(&self) -> InsertPaymentTrackingEntity {
        InsertPaymentTrackingEntity {
            customer_name: self.customer_name.trim().to_string(),
            customer_email: self.customer_email.trim().to_lowercase(),
            customer_phone: self.customer_phone.trim().to_string(),
            package_id: self.package_id.clone(),
            package_name: self.package_name.clone(),
            amount: self.amount,
            coupon_code: self.coupon_code.clone(),
            channel: self.channel.to_string(),
            status: self.status.to_string(),
            gateway_order_id: self.gateway_order_id.clone(),
            gateway_payment_id: self.gateway_payment_id.clone(),
        }
    }

    pub fn to_update_entity(&self) -> UpdatePaymentTrackingEntity {
        UpdatePaymentTrackingEntity {
            customer_name: self.customer_name.trim().to_string(),
            customer_email: self.customer_email.trim().to_lowercase(),
            customer_phone: self.customer_phone.trim().to_string(),
            package_id: self.package_id.clone(),
            package_name: self.package_name.clone(),
            amount: self.amount,
            coupon_code: self.coupon_code.clone(),
            channel: self.channel.to_string(),
            status: self.status.to_string(),
            gateway_order_id: self.gateway_order_id.clone(),
            gateway_payment_id: self.gateway_payment_id.clone(),
            updated_at: chrono::Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePaymentStatusModel {
    pub status: PaymentStatus,
}
