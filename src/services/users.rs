//! User resource endpoints.

use crate::net::http::{self, ApiResult};
use crate::net::types::{Ack, User, UserUpdate};

pub async fn list() -> ApiResult<Vec<User>> {
    http::get_json("/users").await
}

pub async fn get(id: i64) -> ApiResult<User> {
    http::get_json(&format!("/users/{id}")).await
}

pub async fn update(id: i64, payload: &UserUpdate) -> ApiResult<User> {
    http::put_json(&format!("/users/{id}"), payload).await
}

pub async fn delete(id: i64) -> ApiResult<Ack> {
    http::delete_json(&format!("/users/{id}")).await
}
