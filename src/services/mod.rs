//! Thin typed wrappers around the REST API, one module per resource.
//!
//! These do request shaping only; no business logic lives here. All
//! calls go through `net::http`, which attaches the bearer token.

pub mod admin;
pub mod ai;
pub mod auth;
pub mod matches;
pub mod messages;
pub mod photos;
pub mod preferences;
pub mod users;
