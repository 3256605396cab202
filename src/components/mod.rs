//! Shared UI components: marketing chrome, the dashboard shell, and
//! the toast host.

pub mod footer;
pub mod header;
pub mod logo;
pub mod shell;
pub mod toast_host;
