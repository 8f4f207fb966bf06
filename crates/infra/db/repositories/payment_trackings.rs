use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain,
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::payment_trackings},
};
use domain::{
    entities::payment_trackings::{
        InsertPaymentTrackingEntity, PaymentTrackingEntity, UpdatePaymentTrackingEntity,
    },
    repositories::payment_trackings::PaymentTrackingRepository,
    value_objects::enums::payment_statuses::PaymentStatus,
};

pub struct PaymentTrackingPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PaymentTrackingPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PaymentTrackingRepository for PaymentTrackingPostgres {
    async fn list(&self) -> Result<Vec<PaymentTrackingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = payment_trackings::table
            .order(payment_trackings::created_at.desc())
            .select(PaymentTrackingEntity::as_select())
            .load::<PaymentTrackingEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn find_by_id(&self, payment_id: Uuid) -> Result<Option<PaymentTrackingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = payment_trackings::table
            .filter(payment_trackings::id.eq(payment_id))
            .select(PaymentTrackingEntity::as_select())
            .first::<PaymentTrackingEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn find_by_gateway_order_id(
        &self,
        gateway_order_id: String,
    ) -> Result<Option<PaymentTrackingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = payment_trackings::table
            .filter(payment_trackings::gateway_order_id.eq(gateway_order_id))
            .select(PaymentTrackingEntity::as_select())
            .first::<PaymentTrackingEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn create(&self, payment: InsertPaymentTrackingEntity) -> Result<PaymentTrackingEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = diesel::insert_into(payment_trackings::table)
            .values(&payment)
            .returning(PaymentTrackingEntity::as_returning())
            .get_result::<PaymentTrackingEntity>(&mut conn)?;

        Ok(row)
    }

    async fn update(
        &self,
        payment_id: Uuid,
        payment: UpdatePaymentTrackingEntity,
    ) -> Result<Option<PaymentTrackingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = diesel::update(
            payment_trackings::table.filter(payment_trackings::id.eq(payment_id)),
        )
        .set(&payment)
        .returning(PaymentTrackingEntity::as_returning())
        .get_result::<PaymentTrackingEntity>(&mut conn)
        .optional()?;

        Ok(row)
    }

    async fn attach_gateway_order(
        &self,
        payment_id: Uuid,
        gateway_order_id: String,
    ) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::update(payment_trackings::table.filter(payment_trackings::id.eq(payment_id)))
            .set((
                payment_trackings::gateway_order_id.eq(Some(gateway_order_id)),
                payment_trackings::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn update_status(
        &self,
        payment_id: Uuid,
        status: PaymentStatus,
        gateway_payment_id: Option<String>,
    ) -> Result<Option<PaymentTrackingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let target = payment_trackings::table.filter(payment_trackings::id.eq(payment_id));
        let now = Utc::now();

        // Admin status changes carry no payment id and must not wipe the stored one.
        let row = match gateway_payment_id {
            Some(gateway_payment_id) => diesel::update(target)
                .set((
                    payment_trackings::status.eq(status.to_string()),
                    payment_trackings::gateway_payment_id.eq(Some(gateway_payment_id)),
                    payment_trackings::updated_at.eq(now),
                ))
                .returning(PaymentTrackingEntity::as_returning())
                .get_result::<PaymentTrackingEntity>(&mut conn)
                .optional()?,
            None => diesel::update(target)
                .set((
                    payment_trackings::status.eq(status.to_string()),
                    payment_trackings::updated_at.eq(now),
                ))
                .returning(PaymentTrackingEntity::as_returning())
                .get_result::<PaymentTrackingEntity>(&mut conn)
                .optional()?,
        };

        Ok(row)
    }

    async fn delete(&self, payment_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted =
            diesel::delete(payment_trackings::table.filter(payment_trackings::id.eq(payment_id)))
                .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
