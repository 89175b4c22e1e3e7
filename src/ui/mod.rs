//! UI components and demo pages.
//!
//! # Structure
//!
//! - [`components`]: layout primitives, buttons, modal and steps
//! - [`form`]: form fields and form state
//! - [`app`]: gallery and checkout pages served by the demo server
//! - [`utils`]: class and callback helpers shared by the components

pub mod app;
pub mod components;
pub mod form;
pub mod utils;
