use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::packages::{InsertPackageEntity, UpdatePackageEntity};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InsertPackageModel {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// Whole rupees, capped at ten crore.
    #[validate(range(min = 0, max = 100000000))]
    pub price: i64,
    #[validate(length(min = 1, max = 60))]
    pub duration: String,
    #[serde(default)]
    #[validate(custom(function = "validate_features"))]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
}

fn validate_features(features: &[String]) -> Result<(), ValidationError> {
    if features.iter().any(|feature| feature.trim().is_empty()) {
        return Err(ValidationError::new("empty_feature"));
    }
    Ok(())
}

impl InsertPackageModel {
    pub fn to_entity(&self) -> InsertPackageEntity {
        InsertPackageEntity {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            price: self.price,
            duration: self.duration.trim().to_string(),
            features: serde_json::json!(self.features),
            is_popular: self.is_popular,
        }
    }

    pub fn to_update_entity(&self) -> UpdatePackageEntity {
        UpdatePackageEntity {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            price: self.price,
            duration: self.duration.trim().to_string(),
            features: serde_json::json!(self.features),
            is_popular: self.is_popular,
            updated_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> InsertPackageModel {
        InsertPackageModel {
            name: "Inner Child Healing".to_string(),
            description: "Six guided sessions".to_string(),
            price: 15000,
            duration: "6 weeks".to_string(),
            features: vec!["Weekly call".to_string(), "Workbook".to_string()],
            is_popular: true,
        }
    }

    #[test]
    fn valid_package_passes() {
        assert!(model().validate().is_ok());
    }

    #[test]
    fn negative_price_and_blank_feature_are_rejected() {
        let mut package = model();
        package.price = -1;
        package.features.push("   ".to_string());

        let errors = package.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("features"));
    }

    #[test]
    fn price_above_ceiling_is_rejected() {
        let mut package = model();
        package.price = 100_000_000;
        assert!(package.validate().is_ok());

        package.price = 10_000_000_000_000_000;
        let errors = package.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn features_keep_their_order() {
        let entity = model().to_entity();
        assert_eq!(entity.features, serde_json::json!(["Weekly call", "Workbook"]));
    }
}
