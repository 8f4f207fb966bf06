use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::infra::db::postgres::schema::testimonials;

#[derive(Debug, Clone, Serialize, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = testimonials)]
pub struct TestimonialEntity {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = testimonials)]
pub struct InsertTestimonialEntity {
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub image_url: Option<String>,
}

// PUT replaces the whole record, so absent optionals clear the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = testimonials, treat_none_as_null = true)]
pub struct UpdateTestimonialEntity {
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub image_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}
