//! Pure helpers: form validation and static site copy.

pub mod content;
pub mod forms;
