//! Match resource endpoints.

use crate::net::http::{self, ApiResult};
use crate::net::types::{Ack, Match, MatchStatus};

pub async fn list() -> ApiResult<Vec<Match>> {
    http::get_json("/matches").await
}

pub async fn get(id: i64) -> ApiResult<Match> {
    http::get_json(&format!("/matches/{id}")).await
}

/// Propose a pairing between two members (staff operation).
pub async fn create(user_id_1: i64, user_id_2: i64) -> ApiResult<Match> {
    let body = serde_json::json!({ "user_id": user_id_1, "matched_user_id": user_id_2 });
    http::post_json("/matches", &body).await
}

/// Accept or decline a proposed match.
pub async fn update_status(id: i64, status: MatchStatus) -> ApiResult<Match> {
    http::put_json(&format!("/matches/{id}"), &serde_json::json!({ "status": status })).await
}

pub async fn delete(id: i64) -> ApiResult<Ack> {
    http::delete_json(&format!("/matches/{id}")).await
}
