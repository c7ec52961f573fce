//! Render-only widgets
//!
//! Widgets take references to model state plus the active palette and draw
//! into a buffer. They hold no state of their own; the components own the
//! models and decide when and where to render.

pub mod dialog;
pub mod preset_list;
pub mod schedule;
pub mod status_bar;
pub mod switch;
