//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the single in-memory source of truth for "who is
//! logged in"; toasts are the transient error/notice surface pages
//! push into. Both live in `RwSignal` contexts provided at the root.

pub mod session;
pub mod toast;
