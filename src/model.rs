//! Application state models
//!
//! Every module in here follows the same Elm-like pattern:
//! - State changes only through the module's `update` function
//! - All transitions are explicitly defined as `Message` variants, named in
//!   past tense to describe what happened rather than what to do
//! - Modules are self-contained and know nothing about rendering

pub mod appearance;
pub mod autologout;
pub mod debug;
pub mod dialog;
pub mod sidebar;
pub mod status_bar;
