use std::sync::Arc;

use crates::domain::{
    entities::testimonials::TestimonialEntity, repositories::testimonials::TestimonialRepository,
    value_objects::testimonials::InsertTestimonialModel,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::usecases::{CrudError, CrudResult};

pub struct TestimonialUseCase<T>
where
    T: TestimonialRepository + Send + Sync,
{
    testimonial_repository: Arc<T>,
}

impl<T> TestimonialUseCase<T>
where
    T: TestimonialRepository + Send + Sync,
{
    pub fn new(testimonial_repository: Arc<T>) -> Self {
        Self {
            testimonial_repository,
        }
    }

    pub async fn list(&self) -> CrudResult<Vec<TestimonialEntity>> {
        self.testimonial_repository.list().await.map_err(|err| {
            error!(db_error = ?err, "testimonials: failed to list testimonials");
            CrudError::Internal(err)
        })
    }

    pub async fn find_by_id(&self, testimonial_id: Uuid) -> CrudResult<TestimonialEntity> {
        self.testimonial_repository
            .find_by_id(testimonial_id)
            .await?
            .ok_or(CrudError::NotFound("Testimonial"))
    }

    pub async fn create(
        &self,
        insert_testimonial_model: InsertTestimonialModel,
    ) -> CrudResult<TestimonialEntity> {
        let testimonial = self
            .testimonial_repository
            .create(insert_testimonial_model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "testimonials: failed to create testimonial");
                CrudError::Internal(err)
            })?;

        info!(testimonial_id = %testimonial.id, "testimonials: created");
        Ok(testimonial)
    }

    pub async fn update(
        &self,
        testimonial_id: Uuid,
        insert_testimonial_model: InsertTestimonialModel,
    ) -> CrudResult<TestimonialEntity> {
        let testimonial = self
            .testimonial_repository
            .update(testimonial_id, insert_testimonial_model.to_update_entity())
            .await?
            .ok_or(CrudError::NotFound("Testimonial"))?;

        info!(%testimonial_id, "testimonials: updated");
        Ok(testimonial)
    }

    pub async fn delete(&self, testimonial_id: Uuid) -> CrudResult<()> {
        if !self.testimonial_repository.delete(testimonial_id).await? {
            return Err(CrudError::NotFound("Testimonial"));
        }

        info!(%testimonial_id, "testimonials: deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::repositories::testimonials::MockTestimonialRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn missing_testimonial_is_not_found() {
        let testimonial_id = Uuid::new_v4();
        let mut testimonial_repository = MockTestimonialRepository::new();
        testimonial_repository
            .expect_find_by_id()
            .with(eq(testimonial_id))
            .returning(|_| Box::pin(async { Ok(None) }));
        testimonial_repository
            .expect_delete()
            .with(eq(testimonial_id))
            .returning(|_| Box::pin(async { Ok(false) }));

        let usecase = TestimonialUseCase::new(Arc::new(testimonial_repository));

        assert!(matches!(
            usecase.find_by_id(testimonial_id).await,
            Err(CrudError::NotFound("Testimonial"))
        ));
        assert!(matches!(
            usecase.delete(testimonial_id).await,
            Err(CrudError::NotFound("Testimonial"))
        ));
    }
}
