use contracts::domain::availability::{
    AvailabilityPeriod, DateRangeDto, MaintenanceSchedule, QuarterlyPlan,
};

use crate::shared::api_utils;

pub async fn fetch_periods() -> Result<Vec<AvailabilityPeriod>, String> {
    api_utils::get_json("/availability/periods").await
}

pub async fn create_period(dto: &DateRangeDto) -> Result<(), String> {
    api_utils::post_json_no_response("/availability/periods", dto).await
}

pub async fn delete_period(id: i64) -> Result<(), String> {
    api_utils::delete(&format!("/availability/periods/{}", id)).await
}

pub async fn fetch_maintenance() -> Result<Vec<MaintenanceSchedule>, String> {
    api_utils::get_json("/availability/maintenance").await
}

pub async fn create_maintenance(dto: &DateRangeDto) -> Result<(), String> {
    api_utils::post_json_no_response("/availability/maintenance", dto).await
}

pub async fn delete_maintenance(id: i64) -> Result<(), String> {
    api_utils::delete(&format!("/availability/maintenance/{}", id)).await
}

pub async fn fetch_quarterly_plans() -> Result<Vec<QuarterlyPlan>, String> {
    api_utils::get_json("/availability/quarterly").await
}

/// Upsert keyed by (car, year, quarter) on the backend side
pub async fn save_quarterly_plan(
    car_id: i64,
    year: i32,
    quarter: u8,
    planned_days: u32,
) -> Result<(), String> {
    api_utils::put_json(
        "/availability/quarterly",
        &serde_json::json!({
            "carId": car_id,
            "year": year,
            "quarter": quarter,
            "plannedDays": planned_days,
        }),
    )
    .await
}
