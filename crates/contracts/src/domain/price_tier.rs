//! Price tiers: day-range to price-multiplier mappings
//!
//! Longer rentals get a discount through a multiplier below 1.0. A tier
//! with `days_to = None` is open-ended ("7+ days").

use crate::domain::attribute::Language;
use serde::{Deserialize, Serialize};

// ============================================================================
// Records
// ============================================================================

/// A price tier as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub id: i64,
    #[serde(rename = "tierName")]
    pub tier_name: String,
    #[serde(rename = "daysFrom")]
    pub days_from: u32,
    /// None means the range is open-ended
    #[serde(rename = "daysTo")]
    pub days_to: Option<u32>,
    pub multiplier: f64,
}

/// DTO for create/update forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceTierDto {
    pub id: Option<i64>,
    #[serde(rename = "tierName")]
    pub tier_name: String,
    #[serde(rename = "daysFrom")]
    pub days_from: u32,
    #[serde(rename = "daysTo")]
    pub days_to: Option<u32>,
    pub multiplier: f64,
}

// ============================================================================
// Validation
// ============================================================================

/// Per-field validation errors. All four checks are independent; every
/// failing one is populated so the form can mark all offending fields
/// at once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceTierErrors {
    pub tier_name: Option<String>,
    pub days_from: Option<String>,
    pub days_to: Option<String>,
    pub multiplier: Option<String>,
}

impl PriceTierErrors {
    pub fn is_empty(&self) -> bool {
        self.tier_name.is_none()
            && self.days_from.is_none()
            && self.days_to.is_none()
            && self.multiplier.is_none()
    }
}

/// Validate a tier DTO, collecting every failing check.
pub fn validate_price_tier(dto: &PriceTierDto) -> Result<(), PriceTierErrors> {
    let mut errors = PriceTierErrors::default();

    if dto.tier_name.trim().is_empty() {
        errors.tier_name = Some("Tier name is required".to_string());
    }
    if dto.days_from == 0 {
        errors.days_from = Some("Starting day must be greater than 0".to_string());
    }
    if let Some(days_to) = dto.days_to {
        if days_to <= dto.days_from {
            errors.days_to = Some("End day must be greater than the starting day".to_string());
        }
    }
    if dto.multiplier <= 0.0 {
        errors.multiplier = Some("Multiplier must be greater than 0".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ============================================================================
// Display helpers
// ============================================================================

/// Discount percentage implied by a multiplier: `round((1 - m) * 100)`,
/// floored at 0 so a multiplier >= 1 never shows a negative discount.
pub fn discount_percent(multiplier: f64) -> i32 {
    let pct = ((1.0 - multiplier) * 100.0).round() as i32;
    pct.max(0)
}

/// Render the discount for table cells: `"-20%"`, or `"0%"` when there is
/// no discount.
pub fn format_discount(multiplier: f64) -> String {
    let pct = discount_percent(multiplier);
    if pct > 0 {
        format!("-{}%", pct)
    } else {
        "0%".to_string()
    }
}

/// Localized day-range label: `"7+ days"` for open-ended tiers, otherwise
/// `"3–6 days"`.
pub fn format_day_range(tier: &PriceTier, lang: Language) -> String {
    let days_word = match lang {
        Language::Ar => "أيام",
        Language::En => "days",
    };
    match tier.days_to {
        Some(days_to) => format!("{}–{} {}", tier.days_from, days_to, days_word),
        None => format!("{}+ {}", tier.days_from, days_word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(tier_name: &str, days_from: u32, days_to: Option<u32>, multiplier: f64) -> PriceTierDto {
        PriceTierDto {
            id: None,
            tier_name: tier_name.to_string(),
            days_from,
            days_to,
            multiplier,
        }
    }

    #[test]
    fn test_missing_name_is_the_only_error() {
        let errors = validate_price_tier(&dto("", 5, None, 1.0)).unwrap_err();
        assert!(errors.tier_name.is_some());
        assert!(errors.days_from.is_none());
        assert!(errors.days_to.is_none());
        assert!(errors.multiplier.is_none());
    }

    #[test]
    fn test_days_to_must_exceed_days_from() {
        let errors = validate_price_tier(&dto("A", 10, Some(5), 1.0)).unwrap_err();
        assert!(errors.days_to.is_some());
        assert!(errors.tier_name.is_none());

        // equal bounds are rejected too
        assert!(validate_price_tier(&dto("A", 5, Some(5), 1.0)).is_err());
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let errors = validate_price_tier(&dto("A", 1, None, 0.0)).unwrap_err();
        assert!(errors.multiplier.is_some());
        assert!(errors.days_from.is_none());
    }

    #[test]
    fn test_all_errors_collected() {
        let errors = validate_price_tier(&dto("", 0, None, -1.0)).unwrap_err();
        assert!(errors.tier_name.is_some());
        assert!(errors.days_from.is_some());
        assert!(errors.multiplier.is_some());
    }

    #[test]
    fn test_valid_tier() {
        assert!(validate_price_tier(&dto("Weekly", 7, Some(29), 0.85)).is_ok());
        assert!(validate_price_tier(&dto("Monthly", 30, None, 0.7)).is_ok());
    }

    #[test]
    fn test_discount_formatting() {
        assert_eq!(format_discount(0.8), "-20%");
        assert_eq!(format_discount(1.0), "0%");
        assert_eq!(format_discount(1.2), "0%"); // never negative
        assert_eq!(discount_percent(0.85), 15);
    }

    #[test]
    fn test_day_range_labels() {
        let bounded = PriceTier {
            id: 1,
            tier_name: "Weekly".to_string(),
            days_from: 7,
            days_to: Some(29),
            multiplier: 0.85,
        };
        let open = PriceTier {
            days_to: None,
            days_from: 30,
            ..bounded.clone()
        };
        assert_eq!(format_day_range(&bounded, Language::En), "7–29 days");
        assert_eq!(format_day_range(&open, Language::En), "30+ days");
        assert_eq!(format_day_range(&open, Language::Ar), "30+ أيام");
    }
}
