//! API utilities for frontend-backend communication
//!
//! JSON helpers over `gloo_net`. The bearer token from the session store is
//! attached when present. On a non-2xx status the backend's `message` field
//! is surfaced verbatim when the body carries one; otherwise a generic
//! "HTTP <status>" error is returned.

use crate::shared::config::api_base;
use crate::shared::session::SessionService;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/cars/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match SessionService::local().auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn check_status(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    // Prefer the backend-supplied message when the error body carries one
    if let Ok(body) = response.json::<serde_json::Value>().await {
        if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
            return Err(message.to_string());
        }
    }
    Err(format!("HTTP {}", status))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST where the response body does not matter
pub async fn post_json_no_response<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check_status(response).await.map(|_| ())
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = with_auth(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check_status(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check_status(response).await.map(|_| ())
}
