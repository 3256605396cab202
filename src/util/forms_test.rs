use super::*;

fn valid_profile() -> ProfileForm {
    ProfileForm {
        name: "Ada Lovelace".into(),
        age: "32".into(),
        location: "London".into(),
        occupation: "Engineer".into(),
        education: "Cambridge".into(),
        quote: "Counting on love.".into(),
        profile_summary: "I enjoy long walks and longer proofs.".into(),
        interests: "Mathematics, Hiking".into(),
    }
}

// =============================================================
// Profile validation
// =============================================================

#[test]
fn valid_profile_produces_payload() {
    let payload = validate_profile(&valid_profile()).unwrap();
    assert_eq!(payload.age, 32);
    assert_eq!(payload.interests, vec!["Mathematics", "Hiking"]);
}

#[test]
fn summary_under_minimum_is_rejected_before_any_request() {
    let mut form = valid_profile();
    form.profile_summary = "Too short".into();
    let errors = validate_profile(&form).unwrap_err();
    assert!(errors.iter().any(|e| e.contains("Summary")));
}

#[test]
fn underage_is_rejected() {
    let mut form = valid_profile();
    form.age = "17".into();
    assert!(validate_profile(&form).is_err());
}

#[test]
fn non_numeric_age_is_rejected() {
    let mut form = valid_profile();
    form.age = "old enough".into();
    assert!(validate_profile(&form).is_err());
}

#[test]
fn quote_bounds_are_enforced() {
    let mut form = valid_profile();
    form.quote = "Hi".into();
    assert!(validate_profile(&form).is_err());
    form.quote = "x".repeat(101);
    assert!(validate_profile(&form).is_err());
}

#[test]
fn at_least_one_interest_required() {
    let mut form = valid_profile();
    form.interests = " , ,".into();
    let errors = validate_profile(&form).unwrap_err();
    assert!(errors.iter().any(|e| e.contains("interest")));
}

#[test]
fn all_failures_are_reported_together() {
    let form = ProfileForm::default();
    let errors = validate_profile(&form).unwrap_err();
    assert!(errors.len() >= 5);
}

// =============================================================
// Interest splitting
// =============================================================

#[test]
fn split_interests_trims_and_drops_blanks() {
    assert_eq!(split_interests(" Hiking , Cooking,, Live Music "), vec![
        "Hiking",
        "Cooking",
        "Live Music"
    ]);
}

#[test]
fn split_interests_empty_input() {
    assert!(split_interests("").is_empty());
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn login_requires_plausible_email() {
    assert!(validate_login("not-an-email", "secret").is_err());
    assert!(validate_login("ada@example.com", "secret").is_ok());
}

#[test]
fn login_requires_password() {
    assert!(validate_login("ada@example.com", "").is_err());
}

#[test]
fn registration_rejects_mismatched_confirmation() {
    let errors =
        validate_registration("Ada", "ada@example.com", "password123", "password124").unwrap_err();
    assert!(errors.iter().any(|e| e.contains("match")));
}

#[test]
fn registration_rejects_short_password() {
    assert!(validate_registration("Ada", "ada@example.com", "short", "short").is_err());
}

#[test]
fn registration_valid_payload_round_trips_fields() {
    let payload =
        validate_registration(" Ada Lovelace ", "ada@example.com", "password123", "password123")
            .unwrap();
    assert_eq!(payload.name, "Ada Lovelace");
    assert_eq!(payload.password_confirmation, "password123");
}

#[test]
fn email_shape_check() {
    assert!(looks_like_email("a@b.com"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@b.com"));
    assert!(!looks_like_email("plain"));
}
