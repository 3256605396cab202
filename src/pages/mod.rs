//! Page components: marketing, auth flows, and the member dashboard.

pub mod about;
pub mod contact;
pub mod dashboard;
pub mod email_templates;
pub mod forgot_password;
pub mod home;
pub mod how_it_works;
pub mod login;
pub mod matches;
pub mod messages;
pub mod privacy;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod settings;
pub mod terms;
pub mod verify_email;
