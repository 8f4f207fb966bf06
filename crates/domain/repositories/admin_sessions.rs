use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::admin_sessions::{AdminSessionEntity, InsertAdminSessionEntity};

#[async_trait]
#[automock]
pub trait AdminSessionRepository {
    async fn create(&self, session: InsertAdminSessionEntity) -> Result<AdminSessionEntity>;
    async fn find_by_token_hash(&self, token_hash: String) -> Result<Option<AdminSessionEntity>>;
    async fn delete_by_token_hash(&self, token_hash: String) -> Result<()>;
}
