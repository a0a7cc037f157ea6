//! Todo UI Client Core
//!
//! Browser-side layer shared by the todo and tag pages: one way to call the
//! REST API, one error shape, form submission with inline field errors,
//! toast notifications and a confirmation gate.

pub mod client;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod connectivity;
pub mod context;
pub mod error;
pub mod form;
pub mod messages;
pub mod models;
pub mod notify;
pub mod runtime;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use client::{ApiClient, CallOptions, Method, ReqwestTransport, Transport};
pub use config::ClientConfig;
pub use confirm::{ConfirmDialog, ConfirmOptions};
pub use context::Toolkit;
pub use error::{ApiError, Error, ErrorKind, FieldDetail, Result};
pub use form::{FormSubmitter, FormView};
pub use messages::{Locale, Messages};
pub use notify::{Notifier, Notify, Severity};
