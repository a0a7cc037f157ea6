//! UI Components
//!
//! Leptos markup shared across pages.

mod confirm_modal;

pub use confirm_modal::{ids, ConfirmModal};
