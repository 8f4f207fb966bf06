use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::testimonials::{
    InsertTestimonialEntity, TestimonialEntity, UpdateTestimonialEntity,
};

#[async_trait]
#[automock]
pub trait TestimonialRepository {
    async fn list(&self) -> Result<Vec<TestimonialEntity>>;
    async fn find_by_id(&self, testimonial_id: Uuid) -> Result<Option<TestimonialEntity>>;
    async fn create(&self, testimonial: InsertTestimonialEntity) -> Result<TestimonialEntity>;
    async fn update(
        &self,
        testimonial_id: Uuid,
        testimonial: UpdateTestimonialEntity,
    ) -> Result<Option<TestimonialEntity>>;
    async fn delete(&self, testimonial_id: Uuid) -> Result<bool>;
}
