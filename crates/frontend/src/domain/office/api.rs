use contracts::domain::office::OfficeConfig;

use crate::shared::api_utils;

pub async fn fetch_office_config() -> Result<OfficeConfig, String> {
    api_utils::get_json("/office/configs").await
}

pub async fn save_office_config(config: &OfficeConfig) -> Result<(), String> {
    api_utils::put_json("/office/configs", config).await
}
