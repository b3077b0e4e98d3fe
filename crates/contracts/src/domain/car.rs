//! Cars in the office's rental fleet

use serde::{Deserialize, Serialize};

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
    Hidden,
}

impl Default for CarStatus {
    fn default() -> Self {
        CarStatus::Available
    }
}

/// A car as returned by the backend. Attribute fields carry both the
/// option id (for editing) and the resolved bilingual labels (for display).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    #[serde(rename = "plateNumber")]
    pub plate_number: String,
    #[serde(rename = "brandId")]
    pub brand_id: i64,
    #[serde(rename = "modelId")]
    pub model_id: i64,
    #[serde(rename = "yearId")]
    pub year_id: i64,
    #[serde(rename = "colorId")]
    pub color_id: Option<i64>,
    #[serde(rename = "transmissionId")]
    pub transmission_id: Option<i64>,
    #[serde(rename = "bodyTypeId")]
    pub body_type_id: Option<i64>,
    #[serde(rename = "brandEn")]
    pub brand_en: String,
    #[serde(rename = "brandAr")]
    pub brand_ar: String,
    #[serde(rename = "modelEn")]
    pub model_en: String,
    #[serde(rename = "modelAr")]
    pub model_ar: String,
    #[serde(rename = "yearLabel")]
    pub year_label: String,
    #[serde(rename = "dailyPrice")]
    pub daily_price: f64,
    pub status: CarStatus,
}

/// DTO for the create/update form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CarDto {
    pub id: Option<i64>,
    #[serde(rename = "plateNumber")]
    pub plate_number: String,
    #[serde(rename = "brandId")]
    pub brand_id: Option<i64>,
    #[serde(rename = "modelId")]
    pub model_id: Option<i64>,
    #[serde(rename = "yearId")]
    pub year_id: Option<i64>,
    #[serde(rename = "colorId")]
    pub color_id: Option<i64>,
    #[serde(rename = "transmissionId")]
    pub transmission_id: Option<i64>,
    #[serde(rename = "bodyTypeId")]
    pub body_type_id: Option<i64>,
    #[serde(rename = "dailyPrice")]
    pub daily_price: f64,
}

// ============================================================================
// Validation
// ============================================================================

/// Per-field errors for the car form. Independent checks, all collected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarErrors {
    pub plate_number: Option<String>,
    pub brand_id: Option<String>,
    pub model_id: Option<String>,
    pub year_id: Option<String>,
    pub daily_price: Option<String>,
}

impl CarErrors {
    pub fn is_empty(&self) -> bool {
        self.plate_number.is_none()
            && self.brand_id.is_none()
            && self.model_id.is_none()
            && self.year_id.is_none()
            && self.daily_price.is_none()
    }
}

pub fn validate_car(dto: &CarDto) -> Result<(), CarErrors> {
    let mut errors = CarErrors::default();

    if dto.plate_number.trim().is_empty() {
        errors.plate_number = Some("Plate number is required".to_string());
    }
    if dto.brand_id.is_none() {
        errors.brand_id = Some("Brand is required".to_string());
    }
    if dto.model_id.is_none() {
        errors.model_id = Some("Model is required".to_string());
    }
    if dto.year_id.is_none() {
        errors.year_id = Some("Year is required".to_string());
    }
    if dto.daily_price <= 0.0 {
        errors.daily_price = Some("Daily price must be greater than 0".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_collects_all_errors() {
        let errors = validate_car(&CarDto::default()).unwrap_err();
        assert!(errors.plate_number.is_some());
        assert!(errors.brand_id.is_some());
        assert!(errors.model_id.is_some());
        assert!(errors.year_id.is_some());
        assert!(errors.daily_price.is_some());
    }

    #[test]
    fn test_valid_form() {
        let dto = CarDto {
            plate_number: "12345".to_string(),
            brand_id: Some(1),
            model_id: Some(10),
            year_id: Some(100),
            daily_price: 15.0,
            ..Default::default()
        };
        assert!(validate_car(&dto).is_ok());
    }
}
