use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain;
use crate::infra::db::postgres::{postgres_connection::PgPoolSquad, schema::packages};
use domain::{
    entities::packages::{InsertPackageEntity, PackageEntity, PackageRow, UpdatePackageEntity},
    repositories::packages::PackageRepository,
};

pub struct PackagePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PackagePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PackageRepository for PackagePostgres {
    async fn list(&self) -> Result<Vec<PackageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = packages::table
            .order((packages::price.asc(), packages::created_at.asc()))
            .select(PackageRow::as_select())
            .load::<PackageRow>(&mut conn)?;

        Ok(rows.into_iter().map(PackageEntity::from).collect())
    }

    async fn find_by_id(&self, package_id: Uuid) -> Result<Option<PackageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = packages::table
            .filter(packages::id.eq(package_id))
            .select(PackageRow::as_select())
            .first::<PackageRow>(&mut conn)
            .optional()?;

        Ok(row.map(PackageEntity::from))
    }

    async fn create(&self, package: InsertPackageEntity) -> Result<PackageEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = diesel::insert_into(packages::table)
            .values(&package)
            .returning(PackageRow::as_returning())
            .get_result::<PackageRow>(&mut conn)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        package_id: Uuid,
        package: UpdatePackageEntity,
    ) -> Result<Option<PackageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = diesel::update(packages::table.filter(packages::id.eq(package_id)))
            .set(&package)
            .returning(PackageRow::as_returning())
            .get_result::<PackageRow>(&mut conn)
            .optional()?;

        Ok(row.map(PackageEntity::from))
    }

    async fn delete(&self, package_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = diesel::delete(packages::table.filter(packages::id.eq(package_id)))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
