use super::*;

// =============================================================
// Deserialization of canonical payloads
// =============================================================

#[test]
fn auth_response_decodes() {
    let json = r#"{
        "access_token": "tok-123",
        "token_type": "Bearer",
        "user": { "id": 7, "name": "Ada Lovelace", "email": "ada@example.com", "is_admin": false }
    }"#;
    let resp: AuthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.access_token, "tok-123");
    assert_eq!(resp.user.id, 7);
    assert!(!resp.user.is_admin);
}

#[test]
fn user_optional_fields_default() {
    let json = r#"{ "id": 1, "name": "Sam", "email": "sam@example.com" }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.age, None);
    assert!(user.interests.is_empty());
    assert!(!user.is_admin);
}

#[test]
fn user_ignores_unknown_fields() {
    let json = r#"{ "id": 1, "name": "Sam", "email": "s@e.com", "created_at": "2024-01-01", "bio": "x" }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.name, "Sam");
}

#[test]
fn match_decodes_with_nested_user() {
    let json = r#"{
        "id": 3,
        "user_id": 1,
        "matched_user_id": 2,
        "status": "accepted",
        "matchmaker_note": "Shared love of hiking.",
        "matched_user": { "id": 2, "name": "Riley Chen", "email": "riley@example.com" }
    }"#;
    let m: Match = serde_json::from_str(json).unwrap();
    assert_eq!(m.status, MatchStatus::Accepted);
    assert_eq!(m.matched_user.as_ref().unwrap().name, "Riley Chen");
}

#[test]
fn match_status_rejects_unknown_variant() {
    let json = r#"{ "id": 3, "user_id": 1, "matched_user_id": 2, "status": "pending" }"#;
    assert!(serde_json::from_str::<Match>(json).is_err());
}

#[test]
fn message_decodes_canonical_fields() {
    let json = r#"{ "id": 9, "sender_id": 1, "receiver_id": 2, "content": "Hello", "is_read": false }"#;
    let msg: Message = serde_json::from_str(json).unwrap();
    assert_eq!(msg.sender_id, 1);
    assert!(!msg.is_read);
}

#[test]
fn email_template_maps_type_field() {
    let json = r#"{ "id": 1, "name": "welcome", "subject": "Hi", "body": "<p>Hi</p>", "type": "onboarding" }"#;
    let tpl: EmailTemplate = serde_json::from_str(json).unwrap();
    assert_eq!(tpl.kind, "onboarding");
}

// =============================================================
// Serialization of request bodies
// =============================================================

#[test]
fn mark_read_body_touches_only_the_read_flag() {
    let body = MessageUpdate { is_read: Some(true), ..MessageUpdate::default() };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value, serde_json::json!({ "is_read": true }));
}

#[test]
fn preference_upsert_omits_user_id_on_update() {
    let body = PreferenceUpsert {
        user_id: None,
        age_min: 25,
        age_max: 40,
        location_radius_km: 50,
        desired_interests: vec!["Travel".into()],
    };
    let value = serde_json::to_value(&body).unwrap();
    assert!(value.get("user_id").is_none());
    assert_eq!(value["age_min"], 25);
}

#[test]
fn preference_upsert_includes_user_id_on_create() {
    let body = PreferenceUpsert {
        user_id: Some(4),
        age_min: 18,
        age_max: 99,
        location_radius_km: 25,
        desired_interests: vec![],
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["user_id"], 4);
}

// =============================================================
// Pure helpers over fetched lists
// =============================================================

fn photo(id: i64, primary: bool) -> Photo {
    Photo { id, user_id: 1, url: format!("/p/{id}.jpg"), caption: None, is_primary: primary }
}

#[test]
fn primary_photo_prefers_flag() {
    let photos = vec![photo(1, false), photo(2, true), photo(3, false)];
    assert_eq!(primary_photo(&photos).unwrap().id, 2);
}

#[test]
fn primary_photo_falls_back_to_first() {
    let photos = vec![photo(1, false), photo(2, false)];
    assert_eq!(primary_photo(&photos).unwrap().id, 1);
}

#[test]
fn primary_photo_empty_is_none() {
    assert!(primary_photo(&[]).is_none());
}

fn message(id: i64, read: bool) -> Message {
    Message {
        id,
        sender_id: 1,
        receiver_id: 2,
        content: String::new(),
        is_read: read,
        read_at: None,
        created_at: None,
    }
}

#[test]
fn unread_count_counts_only_unread() {
    let messages = vec![message(1, true), message(2, false), message(3, false)];
    assert_eq!(unread_count(&messages), 2);
}

fn curated(id: i64, status: MatchStatus) -> Match {
    Match {
        id,
        user_id: 1,
        matched_user_id: 2,
        status,
        matchmaker_note: None,
        matched_at: None,
        matched_user: None,
    }
}

#[test]
fn accepted_count_ignores_other_statuses() {
    let matches = vec![
        curated(1, MatchStatus::Proposed),
        curated(2, MatchStatus::Accepted),
        curated(3, MatchStatus::Declined),
    ];
    assert_eq!(accepted_count(&matches), 1);
}

#[test]
fn first_name_takes_first_word() {
    let user = User { name: "Ada Lovelace".into(), ..User::default() };
    assert_eq!(user.first_name(), "Ada");
    assert_eq!(user.initial(), "A");
}
