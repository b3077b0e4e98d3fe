//! 4Sale integrations API: car attribute taxonomies
//!
//! Unlike the office backend this endpoint authenticates with an API
//! key/secret pair, not the bearer token.

use crate::shared::config;
use contracts::domain::attribute::AttributeCatalog;
use gloo_net::http::Request;

pub async fn fetch_catalog() -> Result<AttributeCatalog, String> {
    let url = format!(
        "{}/v1/integrations/attributes/fetch",
        config::forsale_api_base()
    );

    let response = Request::post(&url)
        .header("X-Api-Key", config::forsale_api_key())
        .header("X-Api-Secret", config::forsale_api_secret())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Attributes fetch failed: {}", response.status()));
    }

    response
        .json::<AttributeCatalog>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
