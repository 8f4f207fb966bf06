use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::infra::db::postgres::schema::payment_trackings;

#[derive(Debug, Clone, Serialize, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payment_trackings)]
pub struct PaymentTrackingEntity {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub package_id: String,
    pub package_name: String,
    pub amount: i64,
    pub coupon_code: Option<String>,
    pub channel: String,
    pub status: String,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = payment_trackings)]
pub struct InsertPaymentTrackingEntity {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub package_id: String,
    pub package_name: String,
    pub amount: i64,
    pub coupon_code: Option<String>,
    pub channel: String,
    pub status: String,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = payment_trackings, treat_none_as_null = true)]
pub struct UpdatePaymentTrackingEntity {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub package_id: String,
    pub package_name: String,
    pub amount: i64,
    pub coupon_code: Option<String>,
    pub channel: String,
    pub status: String,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}
