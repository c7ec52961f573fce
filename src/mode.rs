use serde::{Deserialize, Serialize};

/// Keybinding context. Each mode has its own keymap in the configuration;
/// `Confirm` is active while a modal dialog captures input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Preferences,
    Appearance,
    Confirm,
}
