use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain;
use crate::infra::db::postgres::{postgres_connection::PgPoolSquad, schema::testimonials};
use domain::{
    entities::testimonials::{InsertTestimonialEntity, TestimonialEntity, UpdateTestimonialEntity},
    repositories::testimonials::TestimonialRepository,
};

pub struct TestimonialPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl TestimonialPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialPostgres {
    async fn list(&self) -> Result<Vec<TestimonialEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = testimonials::table
            .order(testimonials::created_at.desc())
            .select(TestimonialEntity::as_select())
            .load::<TestimonialEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn find_by_id(&self, testimonial_id: Uuid) -> Result<Option<TestimonialEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = testimonials::table
            .filter(testimonials::id.eq(testimonial_id))
            .select(TestimonialEntity::as_select())
            .first::<TestimonialEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn create(&self, testimonial: InsertTestimonialEntity) -> Result<TestimonialEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = diesel::insert_into(testimonials::table)
            .values(&testimonial)
            .returning(TestimonialEntity::as_returning())
            .get_result::<TestimonialEntity>(&mut conn)?;

        Ok(row)
    }

    async fn update(
        &self,
        testimonial_id: Uuid,
        testimonial: UpdateTestimonialEntity,
    ) -> Result<Option<TestimonialEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = diesel::update(testimonials::table.filter(testimonials::id.eq(testimonial_id)))
            .set(&testimonial)
            .returning(TestimonialEntity::as_returning())
            .get_result::<TestimonialEntity>(&mut conn)
            .optional()?;

        Ok(row)
    }

    async fn delete(&self, testimonial_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted =
            diesel::delete(testimonials::table.filter(testimonials::id.eq(testimonial_id)))
                .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
