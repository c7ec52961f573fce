//! Auto-logout preference state
//!
//! The preference is a small state machine with three mutually exclusive
//! logout rules (fixed duration, specific date, custom schedule) and an
//! independent enabled flag. Each rule variant carries only its own payload,
//! so a mode switch can never leave stale data from another mode behind.
//!
//! All updates go through [`AutoLogoutPreference::update`]; the owning view
//! holds the value and feeds user intents in as [`Message`]s.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::format::{format_day, format_duration, format_instant};

/// Hours seeded when the duration rule is (re)created.
pub const DEFAULT_DURATION_HOURS: u32 = 8;

/// Days between the seeded start and end of a fresh custom schedule.
pub const DEFAULT_SCHEDULE_DAYS: i64 = 7;

/// Hour counts offered by the duration editor.
pub const DURATION_PRESETS: [u32; 9] = [1, 2, 4, 8, 12, 24, 48, 72, 168];

/// The three logout strategies a user can pick between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum AutoLogoutMode {
    #[strum(serialize = "Fixed duration")]
    Duration,
    #[strum(serialize = "Specific date")]
    SpecificDate,
    #[strum(serialize = "Custom schedule")]
    CustomSchedule,
}

impl AutoLogoutMode {
    pub const ALL: [AutoLogoutMode; 3] = [
        AutoLogoutMode::Duration,
        AutoLogoutMode::SpecificDate,
        AutoLogoutMode::CustomSchedule,
    ];
}

/// A closed date range; construction orders the endpoints so that
/// `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRange {
    start: DateTime<Local>,
    end: DateTime<Local>,
}

impl ScheduleRange {
    pub fn new(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    pub fn end(&self) -> DateTime<Local> {
        self.end
    }
}

/// The active logout rule. One variant per mode, each carrying only the
/// payload that mode needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum LogoutRule {
    Duration { hours: u32 },
    SpecificDate { at: DateTime<Local> },
    CustomSchedule { schedule: ScheduleRange },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A different logout mode was picked; the payload is reseeded with
    /// that mode's defaults.
    ModeChanged(AutoLogoutMode),
    /// The enabled switch was flipped.
    EnabledToggled,
    /// A duration preset was chosen. Zero hours is ignored.
    DurationSelected { hours: u32 },
    /// A logout instant was chosen. `None` (no date picked yet) is ignored
    /// so an incomplete selection never erases a valid one.
    DateSelected { at: Option<DateTime<Local>> },
    /// A schedule range was chosen. Unless both endpoints are present the
    /// previous complete schedule is kept.
    ScheduleSelected {
        start: Option<DateTime<Local>>,
        end: Option<DateTime<Local>>,
    },
}

/// The auto-logout configuration of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoLogoutPreference {
    enabled: bool,
    #[serde(flatten)]
    rule: LogoutRule,
}

impl Default for AutoLogoutPreference {
    fn default() -> Self {
        Self {
            enabled: false,
            rule: LogoutRule::Duration {
                hours: DEFAULT_DURATION_HOURS,
            },
        }
    }
}

impl AutoLogoutPreference {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn rule(&self) -> &LogoutRule {
        &self.rule
    }

    pub fn mode(&self) -> AutoLogoutMode {
        match self.rule {
            LogoutRule::Duration { .. } => AutoLogoutMode::Duration,
            LogoutRule::SpecificDate { .. } => AutoLogoutMode::SpecificDate,
            LogoutRule::CustomSchedule { .. } => AutoLogoutMode::CustomSchedule,
        }
    }

    /// The configured hour count, when the duration rule is active.
    pub fn duration_hours(&self) -> Option<u32> {
        match self.rule {
            LogoutRule::Duration { hours } => Some(hours),
            _ => None,
        }
    }

    /// The configured logout instant, when the specific-date rule is active.
    pub fn specific_date(&self) -> Option<DateTime<Local>> {
        match self.rule {
            LogoutRule::SpecificDate { at } => Some(at),
            _ => None,
        }
    }

    /// The configured range, when the custom-schedule rule is active.
    pub fn custom_schedule(&self) -> Option<ScheduleRange> {
        match self.rule {
            LogoutRule::CustomSchedule { schedule } => Some(schedule),
            _ => None,
        }
    }

    /// One-line human summary of the current configuration.
    pub fn preview_text(&self) -> String {
        if !self.enabled {
            return String::from("Auto-logout disabled");
        }

        match self.rule {
            LogoutRule::Duration { hours } => {
                format!("Auto-logout after {}", format_duration(hours))
            }
            LogoutRule::SpecificDate { at } => {
                format!("Auto-logout at {}", format_instant(at))
            }
            LogoutRule::CustomSchedule { schedule } => format!(
                "Auto-logout from {} to {}",
                format_day(schedule.start()),
                format_day(schedule.end())
            ),
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ModeChanged(mode) => {
                self.rule = match mode {
                    AutoLogoutMode::Duration => LogoutRule::Duration {
                        hours: DEFAULT_DURATION_HOURS,
                    },
                    AutoLogoutMode::SpecificDate => LogoutRule::SpecificDate { at: Local::now() },
                    AutoLogoutMode::CustomSchedule => {
                        let start = Local::now();
                        LogoutRule::CustomSchedule {
                            schedule: ScheduleRange::new(
                                start,
                                start + Duration::days(DEFAULT_SCHEDULE_DAYS),
                            ),
                        }
                    }
                };
            }
            Message::EnabledToggled => {
                // The rule is left untouched in both directions, so
                // disabling and re-enabling restores the exact prior
                // configuration.
                self.enabled = !self.enabled;
            }
            Message::DurationSelected { hours } => {
                if hours == 0 {
                    return;
                }
                if let LogoutRule::Duration { hours: current } = &mut self.rule {
                    *current = hours;
                }
            }
            Message::DateSelected { at } => {
                let Some(at) = at else {
                    return;
                };
                if let LogoutRule::SpecificDate { at: current } = &mut self.rule {
                    *current = at;
                }
            }
            Message::ScheduleSelected { start, end } => {
                let (Some(start), Some(end)) = (start, end) else {
                    return;
                };
                if let LogoutRule::CustomSchedule { schedule } = &mut self.rule {
                    *schedule = ScheduleRange::new(start, end);
                }
            }
        }
    }
}
