//! Hearting TUI - A terminal client for the Hearting heart-board service
//!
//! The binary in `main.rs` is the entry point; the library crate exists so
//! integration tests can drive the app and API clients directly.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod models;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
