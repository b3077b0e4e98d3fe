//! Availability periods, maintenance schedules and quarterly planning

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date range during which a car is bookable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityPeriod {
    pub id: i64,
    #[serde(rename = "carId")]
    pub car_id: i64,
    #[serde(rename = "dateFrom")]
    pub date_from: NaiveDate,
    #[serde(rename = "dateTo")]
    pub date_to: NaiveDate,
}

/// A planned maintenance window; the car is not bookable inside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub id: i64,
    #[serde(rename = "carId")]
    pub car_id: i64,
    #[serde(rename = "dateFrom")]
    pub date_from: NaiveDate,
    #[serde(rename = "dateTo")]
    pub date_to: NaiveDate,
    pub reason: Option<String>,
}

/// Planned rental days per car per quarter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyPlan {
    pub id: i64,
    #[serde(rename = "carId")]
    pub car_id: i64,
    pub year: i32,
    /// 1..=4
    pub quarter: u8,
    #[serde(rename = "plannedDays")]
    pub planned_days: u32,
}

/// DTO shared by the availability and maintenance forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DateRangeDto {
    pub id: Option<i64>,
    #[serde(rename = "carId")]
    pub car_id: Option<i64>,
    #[serde(rename = "dateFrom")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "dateTo")]
    pub date_to: Option<NaiveDate>,
    pub reason: Option<String>,
}

/// Per-field errors for date-range forms
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DateRangeErrors {
    pub car_id: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl DateRangeErrors {
    pub fn is_empty(&self) -> bool {
        self.car_id.is_none() && self.date_from.is_none() && self.date_to.is_none()
    }
}

pub fn validate_date_range(dto: &DateRangeDto) -> Result<(), DateRangeErrors> {
    let mut errors = DateRangeErrors::default();

    if dto.car_id.is_none() {
        errors.car_id = Some("Car is required".to_string());
    }
    if dto.date_from.is_none() {
        errors.date_from = Some("Start date is required".to_string());
    }
    match (dto.date_from, dto.date_to) {
        (_, None) => errors.date_to = Some("End date is required".to_string()),
        (Some(from), Some(to)) if to <= from => {
            errors.date_to = Some("End date must be after the start date".to_string());
        }
        _ => {}
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

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_must_be_after_start() {
        let dto = DateRangeDto {
            car_id: Some(1),
            date_from: Some(date(2025, 3, 10)),
            date_to: Some(date(2025, 3, 5)),
            ..Default::default()
        };
        let errors = validate_date_range(&dto).unwrap_err();
        assert!(errors.date_to.is_some());
        assert!(errors.date_from.is_none());
    }

    #[test]
    fn test_valid_range() {
        let dto = DateRangeDto {
            car_id: Some(1),
            date_from: Some(date(2025, 3, 5)),
            date_to: Some(date(2025, 3, 10)),
            ..Default::default()
        };
        assert!(validate_date_range(&dto).is_ok());
    }
}
