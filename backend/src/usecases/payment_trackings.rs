use std::sync::Arc;

use crates::domain::{
    entities::payment_trackings::PaymentTrackingEntity,
    repositories::payment_trackings::PaymentTrackingRepository,
    value_objects::{
        enums::payment_statuses::PaymentStatus,
        payment_trackings::InsertPaymentTrackingModel,
    },
};
use tracing::{error, info};
use uuid::Uuid;

use crate::usecases::{CrudError, CrudResult};

/// Admin view over payment records. Customer-facing writes go through checkout.
pub struct PaymentTrackingUseCase<T>
where
    T: PaymentTrackingRepository + Send + Sync,
{
    payment_tracking_repository: Arc<T>,
}

impl<T> PaymentTrackingUseCase<T>
where
    T: PaymentTrackingRepository + Send + Sync,
{
    pub fn new(payment_tracking_repository: Arc<T>) -> Self {
        Self {
            payment_tracking_repository,
        }
    }

    pub async fn list(&self) -> CrudResult<Vec<PaymentTrackingEntity>> {
        self.payment_tracking_repository
            .list()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "payments: failed to list payment records");
                CrudError::Internal(err)
            })
    }

    pub async fn find_by_id(&self, payment_id: Uuid) -> CrudResult<PaymentTrackingEntity> {
        self.payment_tracking_repository
            .find_by_id(payment_id)
            .await?
            .ok_or(CrudError::NotFound("Payment"))
    }

    pub async fn create(
        &self,
        insert_payment_model: InsertPaymentTrackingModel,
    ) -> CrudResult<PaymentTrackingEntity> {
        let payment = self
            .payment_tracking_repository
            .create(insert_payment_model.to_entity())
            .await?;

        info!(payment_id = %payment.id, status = %payment.status, "payments: recorded manually");
        Ok(payment)
    }

    pub async fn update(
        &self,
        payment_id: Uuid,
        insert_payment_model: InsertPaymentTrackingModel,
    ) -> CrudResult<PaymentTrackingEntity> {
        let payment = self
            .payment_tracking_repository
            .update(payment_id, insert_payment_model.to_update_entity())
            .await?
            .ok_or(CrudError::NotFound("Payment"))?;

        info!(%payment_id, "payments: replaced");
        Ok(payment)
    }

    /// Keeps any gateway payment id already on the record.
    pub async fn update_status(
        &self,
        payment_id: Uuid,
        status: PaymentStatus,
    ) -> CrudResult<PaymentTrackingEntity> {
        let payment = self
            .payment_tracking_repository
            .update_status(payment_id, status, None)
            .await
            .map_err(|err| {
                error!(%payment_id, %status, db_error = ?err, "payments: failed to update status");
                CrudError::Internal(err)
            })?
            .ok_or(CrudError::NotFound("Payment"))?;

        info!(%payment_id, %status, "payments: status updated by admin");
        Ok(payment)
    }

    pub async fn delete(&self, payment_id: Uuid) -> CrudResult<()> {
        if !self.payment_tracking_repository.delete(payment_id).await? {
            return Err(CrudError::NotFound("Payment"));
        }

        info!(%payment_id, "payments: deleted");
        Ok(())
    }
}
