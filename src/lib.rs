//! # prefsui - session preferences TUI
//!
//! A terminal user interface for editing a client's session preferences:
//! when to be automatically logged out, and which color scheme to use.
//!
//! ## Architecture Overview
//!
//! State lives in small Elm-like modules under [`model`]: each one exposes a
//! `Message` enum describing what happened and an `update` function that is
//! the only mutation path. Components under [`components`] own the models,
//! translate dispatched [`action::Action`]s into model messages, and draw
//! render-only [`widgets`]. The [`app`] event loop wires keybindings to
//! actions and broadcasts every action to every component.
//!
//! ## Example Usage
//!
//! ```rust
//! use prefsui::model::autologout::{AutoLogoutMode, AutoLogoutPreference, Message};
//!
//! let mut preference = AutoLogoutPreference::default();
//! preference.update(Message::EnabledToggled);
//! preference.update(Message::ModeChanged(AutoLogoutMode::SpecificDate));
//!
//! assert!(preference.enabled());
//! assert!(preference.specific_date().is_some());
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Elm-style state modules (auto-logout core, appearance,
//!   sidebar, dialog, status bar, debug stats)
//! - [`components`] - views owning the models
//! - [`widgets`] - render-only drawing primitives
//! - [`app`] - the event loop
//! - [`config`] - keybindings and styles
//! - [`persistence`] - the preferences file

#![allow(dead_code)]

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod domain;
pub mod mode;
pub mod model;
pub mod persistence;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use action::Action;
pub use app::App;
pub use mode::Mode;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
