use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::infra::db::postgres::schema::packages;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PackageEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub duration: String,
    pub features: Vec<String>,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw row used for Diesel queries. Features stay as JSON and are parsed into a list.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = packages)]
pub struct PackageRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub duration: String,
    pub features: serde_json::Value,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PackageRow> for PackageEntity {
    fn from(value: PackageRow) -> Self {
        let features = serde_json::from_value(value.features).unwrap_or_default();

        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            duration: value.duration,
            features,
            is_popular: value.is_popular,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = packages)]
pub struct InsertPackageEntity {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub duration: String,
    pub features: serde_json::Value,
    pub is_popular: bool,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = packages)]
pub struct UpdatePackageEntity {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub duration: String,
    pub features: serde_json::Value,
    pub is_popular: bool,
    pub updated_at: DateTime<Utc>,
}
