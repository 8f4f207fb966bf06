use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::leads::{InsertLeadEntity, LeadEntity};

/// Leads are append-only.
#[async_trait]
#[automock]
pub trait LeadRepository {
    async fn insert(&self, lead: InsertLeadEntity) -> Result<LeadEntity>;
    async fn list_recent(&self, limit: i64) -> Result<Vec<LeadEntity>>;
}
