//! Canonical wire types mirrored from the HeartCraft REST API.
//!
//! The backend contract historically carried duplicated field
//! spellings (`user_id_1`/`user_id_2`, `image_url`, message `title`).
//! This client pins one canonical schema per entity and does not
//! deserialize the legacy spellings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A member identity with profile attributes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub profile_summary: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// First word of the display name, for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Uppercase initial for avatar fallbacks.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
    }
}

/// A profile photo owned by one member.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Photo {
    pub id: i64,
    pub user_id: i64,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// The photo shown as the main profile image: the one flagged primary,
/// falling back to the first in the list.
pub fn primary_photo(photos: &[Photo]) -> Option<&Photo> {
    photos.iter().find(|p| p.is_primary).or_else(|| photos.first())
}

/// Age/location/interest filters for curated matching.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Preference {
    pub id: i64,
    pub user_id: i64,
    pub age_min: u32,
    pub age_max: u32,
    pub location_radius_km: u32,
    #[serde(default)]
    pub desired_interests: Vec<String>,
}

/// Create/update body for a preference record. `user_id` is only sent
/// on create.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreferenceUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub age_min: u32,
    pub age_max: u32,
    pub location_radius_km: u32,
    pub desired_interests: Vec<String>,
}

/// Lifecycle of a curated match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Proposed,
    Accepted,
    Declined,
}

impl MatchStatus {
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Proposed => "Proposed",
            MatchStatus::Accepted => "Accepted",
            MatchStatus::Declined => "Declined",
        }
    }
}

/// A staff-curated pairing between the current member and another.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Match {
    pub id: i64,
    pub user_id: i64,
    pub matched_user_id: i64,
    pub status: MatchStatus,
    #[serde(default)]
    pub matchmaker_note: Option<String>,
    #[serde(default)]
    pub matched_at: Option<String>,
    /// Nested profile of the other member, when the API expands it.
    #[serde(default)]
    pub matched_user: Option<User>,
}

/// Count of matches the member has accepted.
pub fn accepted_count(matches: &[Match]) -> usize {
    matches.iter().filter(|m| m.status == MatchStatus::Accepted).count()
}

/// A message from platform staff to the member.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub read_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Count of messages not yet read.
pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| !m.is_read).count()
}

/// Partial update body for a message. Marking a message read sends
/// `{"is_read": true}` and nothing else, so no other field can change.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MessageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
}

/// An admin-editable notification email template.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EmailTemplate {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub body: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Subject/body update for an email template.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmailTemplateUpdate {
    pub subject: String,
    pub body: String,
}

/// Successful login/registration response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// Login credentials.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Registration details.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Password reset submission for the OTP flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResetPasswordPayload {
    pub email: String,
    pub otp: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Full profile-edit body; the form submits every editable field.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub age: u32,
    pub location: String,
    pub occupation: String,
    pub education: String,
    pub quote: String,
    pub profile_summary: String,
    pub interests: Vec<String>,
}

/// Request body for AI profile analysis.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AnalyzeProfilePayload {
    pub profile_summary: String,
    pub interests: Vec<String>,
}

/// AI profile analysis result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AiAnalysis {
    pub suggested_improvements: String,
}

/// Plain `{"message": ...}` acknowledgement.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Ack {
    pub message: String,
}
