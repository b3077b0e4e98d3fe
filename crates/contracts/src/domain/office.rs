//! Office configuration options

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OfficeConfig {
    #[serde(rename = "officeNameEn")]
    pub office_name_en: String,
    #[serde(rename = "officeNameAr")]
    pub office_name_ar: String,
    #[serde(rename = "addressEn")]
    pub address_en: String,
    #[serde(rename = "addressAr")]
    pub address_ar: String,
    #[serde(rename = "contactPhone")]
    pub contact_phone: String,
    /// Whether the office currently accepts incoming bookings
    #[serde(rename = "bookingEnabled")]
    pub booking_enabled: bool,
}

/// Per-field errors for the office config form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OfficeConfigErrors {
    pub office_name_en: Option<String>,
    pub contact_phone: Option<String>,
}

impl OfficeConfigErrors {
    pub fn is_empty(&self) -> bool {
        self.office_name_en.is_none() && self.contact_phone.is_none()
    }
}

pub fn validate_office_config(config: &OfficeConfig) -> Result<(), OfficeConfigErrors> {
    use crate::domain::phone::validate_kuwaiti_phone;

    let mut errors = OfficeConfigErrors::default();

    if config.office_name_en.trim().is_empty() {
        errors.office_name_en = Some("Office name is required".to_string());
    }
    if !validate_kuwaiti_phone(&config.contact_phone) {
        errors.contact_phone = Some("Contact phone must be a valid Kuwaiti number".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
