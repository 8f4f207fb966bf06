use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;

use crate::{
    domain,
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::leads},
};
use domain::{
    entities::leads::{InsertLeadEntity, LeadEntity},
    repositories::leads::LeadRepository,
};

pub struct LeadPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl LeadPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl LeadRepository for LeadPostgres {
    async fn insert(&self, lead: InsertLeadEntity) -> Result<LeadEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = insert_into(leads::table)
            .values(&lead)
            .returning(LeadEntity::as_returning())
            .get_result::<LeadEntity>(&mut conn)?;

        Ok(row)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<LeadEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = leads::table
            .order(leads::created_at.desc())
            .limit(limit)
            .select(LeadEntity::as_select())
            .load::<LeadEntity>(&mut conn)?;

        Ok(rows)
    }
}
