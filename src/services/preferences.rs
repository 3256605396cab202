//! Preference resource endpoints.

use crate::net::http::{self, ApiResult};
use crate::net::types::{Ack, Preference, PreferenceUpsert};

pub async fn list() -> ApiResult<Vec<Preference>> {
    http::get_json("/preferences").await
}

pub async fn get(id: i64) -> ApiResult<Preference> {
    http::get_json(&format!("/preferences/{id}")).await
}

pub async fn create(payload: &PreferenceUpsert) -> ApiResult<Preference> {
    http::post_json("/preferences", payload).await
}

pub async fn update(id: i64, payload: &PreferenceUpsert) -> ApiResult<Preference> {
    http::put_json(&format!("/preferences/{id}"), payload).await
}

pub async fn delete(id: i64) -> ApiResult<Ack> {
    http::delete_json(&format!("/preferences/{id}")).await
}
