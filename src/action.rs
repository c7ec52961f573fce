use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::model::{appearance::ColorScheme, autologout::AutoLogoutPreference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    Key(KeyEvent),
    SystemMessage(String),
    ErrorMessage(String),

    // Navigation
    ToggleSidebar,
    NextPanel,
    PrevPanel,
    ShowPreferences,
    ShowAppearance,

    // Auto-logout panel
    ToggleEnabled,
    SelectDurationMode,
    SelectDateMode,
    SelectScheduleMode,
    SelectNext,
    SelectPrev,
    Apply,
    IncrementDay,
    DecrementDay,
    IncrementHour,
    DecrementHour,
    SwitchField,
    ClearSelection,
    ConfirmReset,
    ResetPreferences,
    SavePreferences,

    // Dialog
    Confirm,
    Cancel,

    // Debug overlay
    ToggleDebugOverlay,

    // State broadcasts, so every component sees the latest values
    AutoLogoutChanged(AutoLogoutPreference),
    SchemeChanged(ColorScheme),
}
