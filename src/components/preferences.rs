//! Auto-logout preferences panel
//!
//! The owning view of the auto-logout preference value. Dispatched actions
//! are translated into preference messages; date edits accumulate in
//! view-local pending state and are only committed to the preference with
//! an explicit apply, so the preference value only ever sees discrete,
//! complete intents.

use chrono::{DateTime, Duration, Local};
use color_eyre::eyre::Result;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};
use tokio::sync::mpsc::UnboundedSender;

use super::{content_area, Component};
use crate::{
    action::Action,
    model::{
        appearance::{ColorScheme, Palette},
        autologout::{AutoLogoutMode, AutoLogoutPreference, Message, DURATION_PRESETS},
    },
    tui::Frame,
    widgets::{preset_list::PresetListWidget, schedule::DateFieldWidget, switch::SwitchWidget},
};

/// Which schedule endpoint the day-adjustment keys act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Start,
    End,
}

pub struct PreferencesPanel {
    command_tx: Option<UnboundedSender<Action>>,
    preference: AutoLogoutPreference,
    palette: Palette,
    visible: bool,
    sidebar_open: bool,
    preset_cursor: usize,
    pending_at: Option<DateTime<Local>>,
    pending_start: Option<DateTime<Local>>,
    pending_end: Option<DateTime<Local>>,
    focused_endpoint: Endpoint,
}

impl PreferencesPanel {
    pub fn new(preference: AutoLogoutPreference, scheme: ColorScheme) -> Self {
        let mut panel = Self {
            command_tx: None,
            preference,
            palette: scheme.palette(),
            visible: true,
            sidebar_open: true,
            preset_cursor: 0,
            pending_at: None,
            pending_start: None,
            pending_end: None,
            focused_endpoint: Endpoint::Start,
        };
        panel.sync_pending();
        panel
    }

    /// The current preference value (the panel is its owner).
    pub fn preference(&self) -> &AutoLogoutPreference {
        &self.preference
    }

    /// Reload the pending edit state from the committed preference.
    fn sync_pending(&mut self) {
        self.pending_at = self.preference.specific_date();
        match self.preference.custom_schedule() {
            Some(schedule) => {
                self.pending_start = Some(schedule.start());
                self.pending_end = Some(schedule.end());
            }
            None => {
                self.pending_start = None;
                self.pending_end = None;
            }
        }
        if let Some(hours) = self.preference.duration_hours() {
            self.preset_cursor = DURATION_PRESETS
                .iter()
                .position(|h| *h == hours)
                .unwrap_or(0);
        }
    }

    fn apply_message(&mut self, message: Message) -> Result<()> {
        let before = self.preference;
        self.preference.update(message);
        if self.preference != before {
            if let Some(tx) = &self.command_tx {
                tx.send(Action::AutoLogoutChanged(self.preference))?;
            }
        }
        Ok(())
    }

    fn change_mode(&mut self, mode: AutoLogoutMode) -> Result<()> {
        // The preference reseeds defaults on every mode change, so only
        // forward an actual change.
        if self.preference.mode() != mode {
            self.apply_message(Message::ModeChanged(mode))?;
            self.sync_pending();
        }
        Ok(())
    }

    fn apply_selection(&mut self) -> Result<()> {
        match self.preference.mode() {
            AutoLogoutMode::Duration => {
                let hours = DURATION_PRESETS[self.preset_cursor.min(DURATION_PRESETS.len() - 1)];
                self.apply_message(Message::DurationSelected { hours })?;
            }
            AutoLogoutMode::SpecificDate => {
                self.apply_message(Message::DateSelected {
                    at: self.pending_at,
                })?;
            }
            AutoLogoutMode::CustomSchedule => {
                self.apply_message(Message::ScheduleSelected {
                    start: self.pending_start,
                    end: self.pending_end,
                })?;
            }
        }
        // An incomplete selection leaves the preference untouched; resyncing
        // makes the kept value visible again.
        self.sync_pending();
        Ok(())
    }

    fn adjust_pending(&mut self, delta: Duration) {
        match self.preference.mode() {
            AutoLogoutMode::Duration => {}
            AutoLogoutMode::SpecificDate => {
                let base = self
                    .pending_at
                    .or_else(|| self.preference.specific_date())
                    .unwrap_or_else(Local::now);
                self.pending_at = Some(base + delta);
            }
            AutoLogoutMode::CustomSchedule => {
                let committed = self.preference.custom_schedule();
                let (pending, committed_value) = match self.focused_endpoint {
                    Endpoint::Start => (&mut self.pending_start, committed.map(|s| s.start())),
                    Endpoint::End => (&mut self.pending_end, committed.map(|s| s.end())),
                };
                let base = (*pending).or(committed_value).unwrap_or_else(Local::now);
                *pending = Some(base + delta);
            }
        }
    }

    fn clear_pending(&mut self) {
        match self.preference.mode() {
            AutoLogoutMode::Duration => {}
            AutoLogoutMode::SpecificDate => {
                self.pending_at = None;
            }
            AutoLogoutMode::CustomSchedule => match self.focused_endpoint {
                Endpoint::Start => self.pending_start = None,
                Endpoint::End => self.pending_end = None,
            },
        }
    }

    fn mode_selector_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, mode) in AutoLogoutMode::ALL.iter().enumerate() {
            let label = format!(" [{}] {} ", i + 1, mode);
            let style = if *mode == self.preference.mode() {
                Style::default().fg(self.palette.accent).reversed()
            } else {
                Style::default().fg(self.palette.muted)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn hint_text(&self) -> &'static str {
        match self.preference.mode() {
            AutoLogoutMode::Duration => "j/k move, enter apply",
            AutoLogoutMode::SpecificDate => "h/l day, +/- hour, x clear, enter apply",
            AutoLogoutMode::CustomSchedule => "tab endpoint, h/l day, x clear, enter apply",
        }
    }
}

impl Component for PreferencesPanel {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            Action::ShowPreferences => self.visible = true,
            Action::ShowAppearance => self.visible = false,
            Action::SchemeChanged(scheme) => self.palette = scheme.palette(),
            Action::ResetPreferences => {
                self.preference = AutoLogoutPreference::default();
                self.sync_pending();
                if let Some(tx) = &self.command_tx {
                    tx.send(Action::AutoLogoutChanged(self.preference))?;
                    tx.send(Action::SystemMessage(String::from(
                        "Preferences reset to defaults",
                    )))?;
                }
            }
            _ if !self.visible => {}
            Action::ToggleEnabled => self.apply_message(Message::EnabledToggled)?,
            Action::SelectDurationMode => self.change_mode(AutoLogoutMode::Duration)?,
            Action::SelectDateMode => self.change_mode(AutoLogoutMode::SpecificDate)?,
            Action::SelectScheduleMode => self.change_mode(AutoLogoutMode::CustomSchedule)?,
            Action::SelectNext => {
                if self.preference.mode() == AutoLogoutMode::Duration
                    && self.preset_cursor + 1 < DURATION_PRESETS.len()
                {
                    self.preset_cursor += 1;
                }
            }
            Action::SelectPrev => {
                if self.preference.mode() == AutoLogoutMode::Duration {
                    self.preset_cursor = self.preset_cursor.saturating_sub(1);
                }
            }
            Action::Apply => self.apply_selection()?,
            Action::IncrementDay => self.adjust_pending(Duration::days(1)),
            Action::DecrementDay => self.adjust_pending(Duration::days(-1)),
            Action::IncrementHour => self.adjust_pending(Duration::hours(1)),
            Action::DecrementHour => self.adjust_pending(Duration::hours(-1)),
            Action::SwitchField => {
                if self.preference.mode() == AutoLogoutMode::CustomSchedule {
                    self.focused_endpoint = match self.focused_endpoint {
                        Endpoint::Start => Endpoint::End,
                        Endpoint::End => Endpoint::Start,
                    };
                }
            }
            Action::ClearSelection => self.clear_pending(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if !self.visible {
            return Ok(());
        }

        let area = content_area(area, self.sidebar_open);
        if area.width == 0 || area.height == 0 {
            return Ok(());
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.muted))
            .padding(Padding::horizontal(1))
            .title(" Auto-logout ")
            .title_style(Style::default().fg(self.palette.accent).bold());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1), // enabled switch
                Constraint::Length(1),
                Constraint::Length(1), // mode selector
                Constraint::Length(1),
                Constraint::Min(4),    // mode-specific editor
                Constraint::Length(1), // hint
                Constraint::Length(1), // preview
            ],
        )
        .split(inner);

        f.render_widget(
            SwitchWidget::new("Enabled", self.preference.enabled(), self.palette),
            layout[0],
        );
        f.render_widget(Paragraph::new(self.mode_selector_line()), layout[2]);

        if layout[4].height == 0 {
            return Ok(());
        }

        match self.preference.mode() {
            AutoLogoutMode::Duration => {
                f.render_widget(
                    PresetListWidget::new(
                        &DURATION_PRESETS,
                        self.preset_cursor,
                        self.preference.duration_hours(),
                        self.palette,
                    ),
                    layout[4],
                );
            }
            AutoLogoutMode::SpecificDate => {
                let row = Rect::new(layout[4].x, layout[4].y, layout[4].width, 1);
                f.render_widget(
                    DateFieldWidget::new("Logout", self.pending_at, true, self.palette),
                    row,
                );
            }
            AutoLogoutMode::CustomSchedule => {
                let start_row = Rect::new(layout[4].x, layout[4].y, layout[4].width, 1);
                f.render_widget(
                    DateFieldWidget::new(
                        "Start",
                        self.pending_start,
                        self.focused_endpoint == Endpoint::Start,
                        self.palette,
                    ),
                    start_row,
                );
                if layout[4].height > 1 {
                    let end_row = Rect::new(layout[4].x, layout[4].y + 1, layout[4].width, 1);
                    f.render_widget(
                        DateFieldWidget::new(
                            "End",
                            self.pending_end,
                            self.focused_endpoint == Endpoint::End,
                            self.palette,
                        ),
                        end_row,
                    );
                }
            }
        }

        f.render_widget(
            Paragraph::new(self.hint_text()).style(Style::default().fg(self.palette.muted)),
            layout[5],
        );
        f.render_widget(
            Paragraph::new(self.preference.preview_text())
                .style(Style::default().fg(self.palette.accent)),
            layout[6],
        );

        Ok(())
    }
}
