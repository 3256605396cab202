//! AI profile analysis endpoint.

use crate::net::http::{self, ApiResult};
use crate::net::types::{AiAnalysis, AnalyzeProfilePayload};

pub async fn analyze_profile(payload: &AnalyzeProfilePayload) -> ApiResult<AiAnalysis> {
    http::post_json("/ai/analyze-profile", payload).await
}
