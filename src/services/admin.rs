//! Admin-only email template endpoints.

use crate::net::http::{self, ApiResult};
use crate::net::types::{Ack, EmailTemplate, EmailTemplateUpdate};

pub async fn list_templates() -> ApiResult<Vec<EmailTemplate>> {
    http::get_json("/admin/email-templates").await
}

pub async fn get_template(id: i64) -> ApiResult<EmailTemplate> {
    http::get_json(&format!("/admin/email-templates/{id}")).await
}

pub async fn update_template(id: i64, payload: &EmailTemplateUpdate) -> ApiResult<EmailTemplate> {
    http::put_json(&format!("/admin/email-templates/{id}"), payload).await
}

pub async fn delete_template(id: i64) -> ApiResult<Ack> {
    http::delete_json(&format!("/admin/email-templates/{id}")).await
}
