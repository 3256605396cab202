//! Network layer: token storage, HTTP transport, and wire types.
//!
//! DESIGN
//! ======
//! `token` is the single persisted piece of client state. `http` is the
//! one place that attaches the bearer header, logs traffic, and maps
//! failures to `ApiError`. `types` pins the canonical API schema.

pub mod http;
pub mod token;
pub mod types;
