use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::value_objects::enums::discount_types::DiscountType;

const BASIS_POINTS: i64 = 10_000;

/// Coupon document as stored in the CMS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CouponModel {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_amount: f64,
    #[serde(default, deserialize_with = "deserialize_expiry")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: bool,
}

// The CMS stores either a full datetime or a bare date; a bare date expires at
// midnight UTC.
fn deserialize_expiry<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Some(midnight.and_utc()))
        .ok_or_else(|| D::Error::custom(format!("invalid coupon expiry date: {raw}")))
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CouponRejection {
    #[error("Invalid coupon code")]
    Invalid,
    #[error("Coupon has expired")]
    Expired,
}

impl CouponModel {
    /// Codes are matched case-insensitively by storing and querying them uppercase.
    pub fn normalize_code(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Final charge for `price` (whole rupees) with this coupon applied at `now`.
    pub fn apply(&self, price: i64, now: DateTime<Utc>) -> Result<i64, CouponRejection> {
        if !self.is_active {
            return Err(CouponRejection::Invalid);
        }

        if let Some(expiry_date) = self.expiry_date {
            if expiry_date < now {
                return Err(CouponRejection::Expired);
            }
        }

        if !self.discount_amount.is_finite() || self.discount_amount < 0.0 {
            return Err(CouponRejection::Invalid);
        }

        match self.discount_type {
            DiscountType::Percentage => {
                let basis_points =
                    percent_to_basis_points(self.discount_amount).ok_or(CouponRejection::Invalid)?;
                Ok(percentage_discount(price, basis_points))
            }
            DiscountType::Flat => Ok(flat_discount(price, self.discount_amount)),
        }
    }
}

/// Percentages are accepted with at most two decimals. Anything finer has no
/// exact basis-point value and makes the coupon invalid.
pub fn percent_to_basis_points(percent: f64) -> Option<i64> {
    if !percent.is_finite() || percent < 0.0 {
        return None;
    }

    let scaled = percent.min(100.0) * 100.0;
    let rounded = scaled.round();
    // Tolerates the representation error of values such as 33.33.
    if (scaled - rounded).abs() > 1e-6 {
        return None;
    }
    Some(rounded as i64)
}

/// `floor(price * (1 - basis_points / 10_000))`. Widened to i128 so large
/// prices cannot overflow.
pub fn percentage_discount(price: i64, basis_points: i64) -> i64 {
    let basis_points = i128::from(basis_points.clamp(0, BASIS_POINTS));
    let discounted = (i128::from(price) * (i128::from(BASIS_POINTS) - basis_points))
        .div_euclid(i128::from(BASIS_POINTS));
    // Never above `price` for non-negative prices.
    i64::try_from(discounted).unwrap_or(price)
}

/// `max(0, price - amount)`. Flat amounts are whole rupees.
pub fn flat_discount(price: i64, amount: f64) -> i64 {
    let amount = amount.trunc() as i64;
    price.saturating_sub(amount).max(0)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ValidateCouponModel {
    pub package_id: Uuid,
    #[validate(length(min = 1, max = 64), custom(function = "validate_code_not_blank"))]
    pub code: String,
}

fn validate_code_not_blank(code: &str) -> Result<(), ValidationError> {
    if code.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Coupon code is required".into());
        return Err(error);
    }
    Ok(())
}

/// Price breakdown shown to the customer before dispatching a payment.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiscountQuote {
    pub package_id: Uuid,
    pub package_name: String,
    pub base_price: i64,
    pub discount: i64,
    pub final_price: i64,
    pub coupon_code: Option<String>,
}

impl DiscountQuote {
    pub fn new(
        package_id: Uuid,
        package_name: String,
        base_price: i64,
        final_price: i64,
        coupon_code: Option<String>,
    ) -> Self {
        Self {
            package_id,
            package_name,
            base_price,
            discount: base_price - final_price,
            final_price,
            coupon_code,
        }
    }
}
