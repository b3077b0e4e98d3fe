use contracts::system::auth::{
    AuthResponse, LoginRequest, SignupRequest, VerifyOtpRequest, VerifyOtpResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with phone (canonical "+965 XXXX XXXX") and password
pub async fn login(phone: String, password: String) -> Result<AuthResponse, String> {
    let request = LoginRequest { phone, password };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a new office account
pub async fn signup(
    phone: String,
    password: String,
    office_name: String,
) -> Result<AuthResponse, String> {
    let request = SignupRequest {
        phone,
        password,
        office_name,
    };

    let response = Request::post(&api_url("/auth/signup"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Signup failed: {}", response.status()));
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Confirm the OTP sent to the phone; returns the session token
pub async fn verify_otp(phone: String, code: String) -> Result<VerifyOtpResponse, String> {
    let request = VerifyOtpRequest { phone, code };

    let response = Request::post(&api_url("/auth/verify-otp"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Verification failed: {}", response.status()));
    }

    response
        .json::<VerifyOtpResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
