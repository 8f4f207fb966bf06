use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::testimonials::{InsertTestimonialEntity, UpdateTestimonialEntity};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InsertTestimonialModel {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 120))]
    pub role: Option<String>,
    #[validate(length(min = 1, max = 4000))]
    pub content: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[serde(default)]
    #[validate(url)]
    pub image_url: Option<String>,
}

impl InsertTestimonialModel {
    pub fn to_entity(&self) -> InsertTestimonialEntity {
        InsertTestimonialEntity {
            name: self.name.trim().to_string(),
            role: self.role.clone(),
            content: self.content.clone(),
            rating: self.rating,
            image_url: self.image_url.clone(),
        }
    }

    pub fn to_update_entity(&self) -> UpdateTestimonialEntity {
        UpdateTestimonialEntity {
            name: self.name.trim().to_string(),
            role: self.role.clone(),
            content: self.content.clone(),
            rating: self.rating,
            image_url: self.image_url.clone(),
            updated_at: chrono::Utc::now(),
        }
    }
}
