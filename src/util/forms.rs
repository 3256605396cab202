//! Client-side form validation.
//!
//! Forms are validated here before any network call is made; a form
//! that fails validation never constructs a request. Field values
//! arrive as raw input strings and leave as typed payloads.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{LoginPayload, RegisterPayload, UserUpdate};

/// Raw profile-edit form fields as typed into the inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub location: String,
    pub occupation: String,
    pub education: String,
    pub quote: String,
    pub profile_summary: String,
    pub interests: String,
}

/// Minimum length of the free-text profile summary.
pub const SUMMARY_MIN: usize = 10;

/// Split a comma-separated interest list, trimming and dropping blanks.
pub fn split_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Lightweight shape check; real validation is the server's job.
pub fn looks_like_email(value: &str) -> bool {
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

/// Validate the profile form; returns the update payload or every
/// failing field's message.
pub fn validate_profile(form: &ProfileForm) -> Result<UserUpdate, Vec<String>> {
    let mut errors = Vec::new();

    if form.name.trim().len() < 2 {
        errors.push("Name must be at least 2 characters.".to_owned());
    }
    let age: u32 = match form.age.trim().parse() {
        Ok(age) if age >= 18 => age,
        Ok(_) | Err(_) => {
            errors.push("You must be at least 18.".to_owned());
            0
        }
    };
    if form.location.trim().len() < 2 {
        errors.push("Location is required.".to_owned());
    }
    if form.occupation.trim().len() < 2 {
        errors.push("Occupation is required.".to_owned());
    }
    if form.education.trim().len() < 2 {
        errors.push("Education is required.".to_owned());
    }
    let quote_len = form.quote.trim().chars().count();
    if quote_len < 5 || quote_len > 100 {
        errors.push("Quote must be between 5 and 100 characters.".to_owned());
    }
    if form.profile_summary.trim().chars().count() < SUMMARY_MIN {
        errors.push(format!("Summary must be at least {SUMMARY_MIN} characters."));
    }
    let interests = split_interests(&form.interests);
    if interests.is_empty() {
        errors.push("Please list at least one interest, separated by commas.".to_owned());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UserUpdate {
        name: form.name.trim().to_owned(),
        age,
        location: form.location.trim().to_owned(),
        occupation: form.occupation.trim().to_owned(),
        education: form.education.trim().to_owned(),
        quote: form.quote.trim().to_owned(),
        profile_summary: form.profile_summary.trim().to_owned(),
        interests,
    })
}

/// Validate login credentials.
pub fn validate_login(email: &str, password: &str) -> Result<LoginPayload, Vec<String>> {
    let mut errors = Vec::new();
    if !looks_like_email(email) {
        errors.push("Please enter a valid email.".to_owned());
    }
    if password.is_empty() {
        errors.push("Password is required.".to_owned());
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginPayload { email: email.trim().to_owned(), password: password.to_owned() })
}

/// Validate registration details, including the confirmation match.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<RegisterPayload, Vec<String>> {
    let mut errors = Vec::new();
    if name.trim().len() < 2 {
        errors.push("Name must be at least 2 characters.".to_owned());
    }
    if !looks_like_email(email) {
        errors.push("Please enter a valid email.".to_owned());
    }
    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters.".to_owned());
    }
    if password != confirmation {
        errors.push("Passwords do not match.".to_owned());
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RegisterPayload {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
        password_confirmation: confirmation.to_owned(),
    })
}
