//! Deployment configuration
//!
//! Values are baked in at compile time via environment variables
//! (`API_URL`, `FORSALE_API_URL`, `FORSALE_API_KEY`, `FORSALE_API_SECRET`).
//! When `API_URL` is not set the backend is assumed to live on port 3000 of
//! the host serving the frontend.

/// Base URL for the rental-office backend API
pub fn api_base() -> String {
    if let Some(url) = option_env!("API_URL") {
        return url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Base URL of the 4Sale integrations API
pub fn forsale_api_base() -> &'static str {
    option_env!("FORSALE_API_URL").unwrap_or("https://api.q84sale.com")
}

pub fn forsale_api_key() -> &'static str {
    option_env!("FORSALE_API_KEY").unwrap_or("")
}

pub fn forsale_api_secret() -> &'static str {
    option_env!("FORSALE_API_SECRET").unwrap_or("")
}
