use contracts::domain::price_tier::{PriceTier, PriceTierDto};

use crate::shared::api_utils;

/// The tier set is small and bounded, so the backend returns it whole.
pub async fn fetch_price_tiers() -> Result<Vec<PriceTier>, String> {
    api_utils::get_json("/price-tiers").await
}

pub async fn create_price_tier(dto: &PriceTierDto) -> Result<(), String> {
    api_utils::post_json_no_response("/price-tiers", dto).await
}

pub async fn update_price_tier(dto: &PriceTierDto) -> Result<(), String> {
    let id = dto.id.ok_or("Price tier id missing for update")?;
    api_utils::put_json(&format!("/price-tiers/{}", id), dto).await
}

pub async fn delete_price_tier(id: i64) -> Result<(), String> {
    api_utils::delete(&format!("/price-tiers/{}", id)).await
}

/// Replace the office's tiers with the platform defaults
pub async fn reset_price_tiers() -> Result<Vec<PriceTier>, String> {
    api_utils::post_json("/price-tiers/reset", &serde_json::json!({})).await
}
