//! Sidebar state
//!
//! Tracks whether the navigation sidebar is visible and which panel is
//! selected. Closing the sidebar never changes the selection.

use serde::{Deserialize, Serialize};
use strum::Display;

/// The panels reachable from the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Panel {
    #[default]
    #[strum(serialize = "Auto-logout")]
    Preferences,
    #[strum(serialize = "Appearance")]
    Appearance,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Preferences, Panel::Appearance];

    pub fn next(self) -> Self {
        match self {
            Panel::Preferences => Panel::Appearance,
            Panel::Appearance => Panel::Preferences,
        }
    }

    pub fn prev(self) -> Self {
        // Two entries, so cycling backward equals cycling forward.
        self.next()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    VisibilityToggled,
    PanelSelected(Panel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
    selected: Panel,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            open: true,
            selected: Panel::Preferences,
        }
    }
}

impl Sidebar {
    pub fn open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Panel {
        self.selected
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::VisibilityToggled => {
                self.open = !self.open;
            }
            Message::PanelSelected(panel) => {
                self.selected = panel;
            }
        }
    }
}
