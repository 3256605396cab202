//! Message resource endpoints.

use crate::net::http::{self, ApiResult};
use crate::net::types::{Ack, Message, MessageUpdate};

pub async fn list() -> ApiResult<Vec<Message>> {
    http::get_json("/messages").await
}

pub async fn get(id: i64) -> ApiResult<Message> {
    http::get_json(&format!("/messages/{id}")).await
}

pub async fn create(receiver_id: i64, content: &str) -> ApiResult<Message> {
    let body = serde_json::json!({ "receiver_id": receiver_id, "content": content });
    http::post_json("/messages", &body).await
}

pub async fn update(id: i64, payload: &MessageUpdate) -> ApiResult<Message> {
    http::put_json(&format!("/messages/{id}"), payload).await
}

/// Flip the read flag and nothing else.
pub async fn mark_read(id: i64) -> ApiResult<Message> {
    update(id, &MessageUpdate { is_read: Some(true), ..MessageUpdate::default() }).await
}

pub async fn delete(id: i64) -> ApiResult<Ack> {
    http::delete_json(&format!("/messages/{id}")).await
}
