//! Request handlers.
//!
//! Each submodule provides the async handler functions for one route group.
//! Handlers delegate to `akrin_core`, `akrin_mail` and `akrin_clients` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod content;
pub mod forms;
pub mod seo;
pub mod site;
