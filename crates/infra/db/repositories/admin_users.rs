use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain,
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::admin_users},
};
use domain::{
    entities::admin_users::{AdminUserEntity, InsertAdminUserEntity},
    repositories::admin_users::AdminUserRepository,
};

pub struct AdminUserPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AdminUserPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AdminUserRepository for AdminUserPostgres {
    async fn find_by_username(&self, username: String) -> Result<Option<AdminUserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = admin_users::table
            .filter(admin_users::username.eq(username))
            .select(AdminUserEntity::as_select())
            .first::<AdminUserEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<AdminUserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = admin_users::table
            .filter(admin_users::id.eq(admin_id))
            .select(AdminUserEntity::as_select())
            .first::<AdminUserEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn create(&self, admin: InsertAdminUserEntity) -> Result<AdminUserEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = diesel::insert_into(admin_users::table)
            .values(&admin)
            .returning(AdminUserEntity::as_returning())
            .get_result::<AdminUserEntity>(&mut conn)?;

        Ok(row)
    }
}
