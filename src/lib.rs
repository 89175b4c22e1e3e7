//! Quarry UI
//!
//! Reusable Leptos components for web interfaces: modal dialogs, form
//! fields, layout primitives and navigation steps, plus a small axum server
//! that renders a gallery and a checkout demo with them.
//!
//! # Modules
//!
//! - [`ui`]: components, form fields and demo pages
//! - [`config`]: layered configuration of the server
//! - [`server`]: HTTP routes and page rendering
//! - [`error`]: library error type

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod server;
pub mod ui;

use crate::config::AppConfig;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
