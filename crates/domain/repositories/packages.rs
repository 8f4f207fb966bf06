use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::packages::{
    InsertPackageEntity, PackageEntity, UpdatePackageEntity,
};

#[async_trait]
#[automock]
pub trait PackageRepository {
    async fn list(&self) -> Result<Vec<PackageEntity>>;
    async fn find_by_id(&self, package_id: Uuid) -> Result<Option<PackageEntity>>;
    async fn create(&self, package: InsertPackageEntity) -> Result<PackageEntity>;
    async fn update(
        &self,
        package_id: Uuid,
        package: UpdatePackageEntity,
    ) -> Result<Option<PackageEntity>>;
    async fn delete(&self, package_id: Uuid) -> Result<bool>;
}
