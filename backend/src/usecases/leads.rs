use std::sync::Arc;

use crates::domain::{
    entities::leads::LeadEntity,
    repositories::leads::LeadRepository,
    value_objects::{enums::lead_sources::LeadSource, leads::InsertLeadModel},
};
use tracing::{error, info};

use crate::usecases::{CrudError, CrudResult};

const RECENT_LEADS_LIMIT: i64 = 500;

pub struct LeadUseCase<T>
where
    T: LeadRepository + Send + Sync,
{
    lead_repository: Arc<T>,
}

impl<T> LeadUseCase<T>
where
    T: LeadRepository + Send + Sync,
{
    pub fn new(lead_repository: Arc<T>) -> Self {
        Self { lead_repository }
    }

    pub async fn submit(&self, insert_lead_model: InsertLeadModel) -> CrudResult<LeadEntity> {
        let lead = self
            .lead_repository
            .insert(insert_lead_model.to_entity(LeadSource::ContactForm))
            .await
            .map_err(|err| {
                error!(db_error = ?err, "leads: failed to store contact submission");
                CrudError::Internal(err)
            })?;

        info!(lead_id = %lead.id, source = %lead.source, "leads: stored");
        Ok(lead)
    }

    pub async fn list_recent(&self) -> CrudResult<Vec<LeadEntity>> {
        Ok(self.lead_repository.list_recent(RECENT_LEADS_LIMIT).await?)
    }
}
