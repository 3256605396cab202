//! Photo resource endpoints.
//!
//! Upload and edit go over multipart form data; the edit uses the
//! backend's POST + `_method=PUT` override. Both are browser-only
//! since they carry a `web_sys` form.

use crate::net::http::{self, ApiResult};
use crate::net::types::{Ack, Photo};

pub async fn list() -> ApiResult<Vec<Photo>> {
    http::get_json("/photos").await
}

pub async fn get(id: i64) -> ApiResult<Photo> {
    http::get_json(&format!("/photos/{id}")).await
}

/// Upload a new photo for the given member. The first photo a member
/// uploads is flagged primary by the caller.
#[cfg(feature = "hydrate")]
pub async fn upload(user_id: i64, file: &web_sys::File, is_primary: bool) -> ApiResult<Photo> {
    let form = new_form()?;
    append(&form, "user_id", &user_id.to_string())?;
    append(&form, "is_primary", if is_primary { "1" } else { "0" })?;
    form.append_with_blob("photo", file).map_err(|_| form_error())?;
    http::post_form("/photos", form).await
}

/// Edit caption/primary flag via the POST + `_method=PUT` override.
#[cfg(feature = "hydrate")]
pub async fn update(id: i64, caption: Option<&str>, is_primary: Option<bool>) -> ApiResult<Photo> {
    let form = new_form()?;
    append(&form, "_method", "PUT")?;
    if let Some(caption) = caption {
        append(&form, "caption", caption)?;
    }
    if let Some(primary) = is_primary {
        append(&form, "is_primary", if primary { "1" } else { "0" })?;
    }
    http::post_form(&format!("/photos/{id}"), form).await
}

pub async fn set_primary(id: i64) -> ApiResult<Ack> {
    http::post_empty(&format!("/photos/{id}/set-primary")).await
}

pub async fn delete(id: i64) -> ApiResult<Ack> {
    http::delete_json(&format!("/photos/{id}")).await
}

#[cfg(feature = "hydrate")]
fn new_form() -> ApiResult<web_sys::FormData> {
    web_sys::FormData::new().map_err(|_| form_error())
}

#[cfg(feature = "hydrate")]
fn append(form: &web_sys::FormData, key: &str, value: &str) -> ApiResult<()> {
    form.append_with_str(key, value).map_err(|_| form_error())
}

#[cfg(feature = "hydrate")]
fn form_error() -> crate::net::http::ApiError {
    crate::net::http::ApiError::Network("failed to build form data".to_owned())
}
