//! Authentication endpoints.

use crate::net::http::{self, ApiResult};
use crate::net::types::{Ack, AuthResponse, LoginPayload, RegisterPayload, ResetPasswordPayload, User};

pub async fn register(payload: &RegisterPayload) -> ApiResult<AuthResponse> {
    http::post_json("/register", payload).await
}

pub async fn login(payload: &LoginPayload) -> ApiResult<AuthResponse> {
    http::post_json("/login", payload).await
}

pub async fn logout() -> ApiResult<Ack> {
    http::post_empty("/logout").await
}

/// Fetch the identity the current bearer token belongs to.
pub async fn current_user() -> ApiResult<User> {
    http::get_json("/user").await
}

pub async fn forgot_password(email: &str) -> ApiResult<Ack> {
    http::post_json("/forgot-password", &serde_json::json!({ "email": email })).await
}

pub async fn reset_password(payload: &ResetPasswordPayload) -> ApiResult<Ack> {
    http::post_json("/reset-password", payload).await
}

pub async fn verify_email(email: &str, otp: &str) -> ApiResult<Ack> {
    http::post_json("/verify-email", &serde_json::json!({ "email": email, "otp": otp })).await
}
