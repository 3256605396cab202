//! HTTP transport for the HeartCraft REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR) and native test builds: stubs returning `ApiError::NotBrowser`
//! since the API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response funnels through one handler: a 401 always removes the
//! stored token so a dead session cannot keep presenting a stale
//! credential, and non-2xx statuses become `ApiError::Status` for the
//! caller to surface. Nothing is retried.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of one API operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    NotBrowser,
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Base URL for the remote API, configurable at compile time.
pub fn api_base() -> &'static str {
    option_env!("HEARTCRAFT_API_BASE").unwrap_or("http://127.0.0.1:8000/api")
}

/// Join a resource path onto the API base URL.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(feature = "hydrate")]
fn authorize(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let req = req.header("Accept", "application/json");
    match super::token::get() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

#[cfg(feature = "hydrate")]
async fn handle<T: DeserializeOwned>(
    method: &str,
    path: &str,
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> ApiResult<T> {
    let resp = sent.map_err(|e| {
        log::error!("{method} {path}: {e}");
        ApiError::Network(e.to_string())
    })?;

    let status = resp.status();
    log::debug!("{method} {path} -> {status}");

    // A rejected credential is dead; drop it before the caller sees the error.
    if status == 401 {
        super::token::remove();
    }

    if !resp.ok() {
        let message = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, message });
    }

    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET a JSON resource.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorize(gloo_net::http::Request::get(&api_url(path)));
        handle("GET", path, req.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::NotBrowser)
    }
}

/// POST a JSON body and decode a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorize(gloo_net::http::Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle("POST", path, req.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::NotBrowser)
    }
}

/// POST with no body (logout, set-primary).
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorize(gloo_net::http::Request::post(&api_url(path)));
        handle("POST", path, req.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::NotBrowser)
    }
}

/// PUT a JSON body and decode a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorize(gloo_net::http::Request::put(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        handle("PUT", path, req.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::NotBrowser)
    }
}

/// DELETE a resource.
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorize(gloo_net::http::Request::delete(&api_url(path)));
        handle("DELETE", path, req.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::NotBrowser)
    }
}

/// POST multipart form data (photo upload and the POST+`_method=PUT`
/// override). The browser supplies the multipart content type.
#[cfg(feature = "hydrate")]
pub async fn post_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> ApiResult<T> {
    let req = authorize(gloo_net::http::Request::post(&api_url(path)))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle("POST", path, req.send().await).await
}
