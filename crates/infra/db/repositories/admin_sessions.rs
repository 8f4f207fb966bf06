use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;

use crate::{
    domain,
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::admin_sessions},
};
use domain::{
    entities::admin_sessions::{AdminSessionEntity, InsertAdminSessionEntity},
    repositories::admin_sessions::AdminSessionRepository,
};

pub struct AdminSessionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AdminSessionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AdminSessionRepository for AdminSessionPostgres {
    async fn create(&self, session: InsertAdminSessionEntity) -> Result<AdminSessionEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = diesel::insert_into(admin_sessions::table)
            .values(&session)
            .returning(AdminSessionEntity::as_returning())
            .get_result::<AdminSessionEntity>(&mut conn)?;

        Ok(row)
    }

    async fn find_by_token_hash(&self, token_hash: String) -> Result<Option<AdminSessionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = admin_sessions::table
            .filter(admin_sessions::token_hash.eq(token_hash))
            .select(AdminSessionEntity::as_select())
            .first::<AdminSessionEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn delete_by_token_hash(&self, token_hash: String) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::delete(admin_sessions::table.filter(admin_sessions::token_hash.eq(token_hash)))
            .execute(&mut conn)?;

        Ok(())
    }
}
