use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{
    entities::leads::InsertLeadEntity, value_objects::enums::lead_sources::LeadSource,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InsertLeadModel {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 7, max = 20))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub message: Option<String>,
}

impl InsertLeadModel {
    pub fn to_entity(&self, source: LeadSource) -> InsertLeadEntity {
        InsertLeadEntity {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: non_blank(self.phone.as_deref()),
            message: non_blank(self.message.as_deref()),
            source: source.to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Body returned by the public lead endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LeadSubmitted {
    pub success: bool,
    pub message: String,
}
