//! REST Command Wrappers
//!
//! Typed bindings to the backend's todo/tag endpoints, organized by resource.
//! Every mutation is followed by a reload at the caller; nothing is cached here.

mod tag;
mod todo;

pub use tag::*;
pub use todo::*;
