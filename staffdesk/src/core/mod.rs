//! Core module - configuration, kernel state and the application object
//!
//! # Module layout
//!
//! - [`Config`] - environment configuration
//! - [`AppState`] - store, session and router
//! - [`App`] - intent dispatch bound to a [`crate::view::View`]

pub mod app;
pub mod config;
pub mod state;

pub use app::App;
pub use config::Config;
pub use state::AppState;
