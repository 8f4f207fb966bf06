use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::blogs::{InsertBlogEntity, UpdateBlogEntity};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InsertBlogModel {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 200), custom(function = "validate_slug"))]
    pub slug: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub excerpt: Option<String>,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1, max = 120))]
    pub author: String,
    #[serde(default)]
    #[validate(url)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Lowercase ASCII words joined by single hyphens.
fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let well_formed = slug
        .split('-')
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_slug"))
    }
}

impl InsertBlogModel {
    // Publishing without a date stamps it now; drafts keep whatever was sent.
    fn resolved_published_at(&self) -> Option<DateTime<Utc>> {
        match (self.is_published, self.published_at) {
            (true, None) => Some(Utc::now()),
            (_, published_at) => published_at,
        }
    }

    pub fn to_entity(&self) -> InsertBlogEntity {
        InsertBlogEntity {
            title: self.title.trim().to_string(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            author: self.author.trim().to_string(),
            cover_image_url: self.cover_image_url.clone(),
            is_published: self.is_published,
            published_at: self.resolved_published_at(),
        }
    }

    pub fn to_update_entity(&self) -> UpdateBlogEntity {
        UpdateBlogEntity {
            title: self.title.trim().to_string(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            author: self.author.trim().to_string(),
            cover_image_url: self.cover_image_url.clone(),
            is_published: self.is_published,
            published_at: self.resolved_published_at(),
            updated_at: Utc::now(),
        }
    }
}
