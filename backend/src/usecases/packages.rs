use std::sync::Arc;

use crates::domain::{
    entities::packages::PackageEntity, repositories::packages::PackageRepository,
    value_objects::packages::InsertPackageModel,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::usecases::{CrudError, CrudResult};

pub struct PackageUseCase<T>
where
    T: PackageRepository + Send + Sync,
{
    package_repository: Arc<T>,
}

impl<T> PackageUseCase<T>
where
    T: PackageRepository + Send + Sync,
{
    pub fn new(package_repository: Arc<T>) -> Self {
        Self { package_repository }
    }

    pub async fn list(&self) -> CrudResult<Vec<PackageEntity>> {
        let packages = self.package_repository.list().await.map_err(|err| {
            error!(db_error = ?err, "packages: failed to list packages");
            CrudError::Internal(err)
        })?;

        info!(package_count = packages.len(), "packages: listed");
        Ok(packages)
    }

    pub async fn find_by_id(&self, package_id: Uuid) -> CrudResult<PackageEntity> {
        self.package_repository
            .find_by_id(package_id)
            .await?
            .ok_or(CrudError::NotFound("Package"))
    }

    pub async fn create(&self, insert_package_model: InsertPackageModel) -> CrudResult<PackageEntity> {
        let package = self
            .package_repository
            .create(insert_package_model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "packages: failed to create package");
                CrudError::Internal(err)
            })?;

        info!(package_id = %package.id, "packages: created");
        Ok(package)
    }

    pub async fn update(
        &self,
        package_id: Uuid,
        insert_package_model: InsertPackageModel,
    ) -> CrudResult<PackageEntity> {
        let package = self
            .package_repository
            .update(package_id, insert_package_model.to_update_entity())
            .await
            .map_err(|err| {
                error!(%package_id, db_error = ?err, "packages: failed to update package");
                CrudError::Internal(err)
            })?
            .ok_or(CrudError::NotFound("Package"))?;

        info!(%package_id, "packages: updated");
        Ok(package)
    }

    pub async fn delete(&self, package_id: Uuid) -> CrudResult<()> {
        let deleted = self.package_repository.delete(package_id).await.map_err(|err| {
            error!(%package_id, db_error = ?err, "packages: failed to delete package");
            CrudError::Internal(err)
        })?;

        if !deleted {
            return Err(CrudError::NotFound("Package"));
        }

        info!(%package_id, "packages: deleted");
        Ok(())
    }
}
