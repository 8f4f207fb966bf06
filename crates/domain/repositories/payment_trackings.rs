use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::payment_trackings::{
        InsertPaymentTrackingEntity, PaymentTrackingEntity, UpdatePaymentTrackingEntity,
    },
    value_objects::enums::payment_statuses::PaymentStatus,
};

#[async_trait]
#[automock]
pub trait PaymentTrackingRepository {
    async fn list(&self) -> Result<Vec<PaymentTrackingEntity>>;
    async fn find_by_id(&self, payment_id: Uuid) -> Result<Option<PaymentTrackingEntity>>;
    async fn find_by_gateway_order_id(
        &self,
        gateway_order_id: String,
    ) -> Result<Option<PaymentTrackingEntity>>;
    async fn create(&self, payment: InsertPaymentTrackingEntity) -> Result<PaymentTrackingEntity>;
    async fn update(
        &self,
        payment_id: Uuid,
        payment: UpdatePaymentTrackingEntity,
    ) -> Result<Option<PaymentTrackingEntity>>;
    async fn attach_gateway_order(&self, payment_id: Uuid, gateway_order_id: String)
    -> Result<()>;
    async fn update_status(
        &self,
        payment_id: Uuid,
        status: PaymentStatus,
        gateway_payment_id: Option<String>,
    ) -> Result<Option<PaymentTrackingEntity>>;
    async fn delete(&self, payment_id: Uuid) -> Result<bool>;
}
