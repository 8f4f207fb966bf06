use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::admin_users::{AdminUserEntity, InsertAdminUserEntity};

#[async_trait]
#[automock]
pub trait AdminUserRepository {
    async fn find_by_username(&self, username: String) -> Result<Option<AdminUserEntity>>;
    async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<AdminUserEntity>>;
    async fn create(&self, admin: InsertAdminUserEntity) -> Result<AdminUserEntity>;
}
