//! Status bar component
//!
//! Collects feedback messages from the action stream and renders the bottom
//! two lines of the frame. The base style comes from the configuration so
//! users can restyle it per keybinding mode.

use color_eyre::eyre::Result;
use ratatui::prelude::*;

use super::Component;
use crate::{
    action::Action,
    config::Config,
    mode::Mode,
    model::{
        appearance::{ColorScheme, Palette},
        status_bar::{Level, Message, StatusBar},
    },
    tui::Frame,
    widgets::status_bar::StatusBarWidget,
};

pub struct StatusBarView {
    config: Config,
    status_bar: StatusBar,
    scheme: ColorScheme,
    palette: Palette,
    mode: Mode,
    panel_mode: Mode,
}

impl StatusBarView {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            config: Config::default(),
            status_bar: StatusBar::default(),
            scheme,
            palette: scheme.palette(),
            mode: Mode::default(),
            panel_mode: Mode::default(),
        }
    }

    fn base_style(&self) -> Style {
        self.config
            .styles
            .get(&self.mode)
            .and_then(|styles| styles.get("status_bar"))
            .copied()
            .unwrap_or_default()
    }
}

impl Component for StatusBarView {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SystemMessage(text) => self.status_bar.update(Message::MessageShown {
                level: Level::Info,
                text,
            }),
            Action::ErrorMessage(text) | Action::Error(text) => {
                self.status_bar.update(Message::MessageShown {
                    level: Level::Error,
                    text,
                });
            }
            Action::ShowPreferences => {
                self.mode = Mode::Preferences;
                self.panel_mode = Mode::Preferences;
                self.status_bar.update(Message::MessageCleared);
            }
            Action::ShowAppearance => {
                self.mode = Mode::Appearance;
                self.panel_mode = Mode::Appearance;
                self.status_bar.update(Message::MessageCleared);
            }
            Action::ConfirmReset => self.mode = Mode::Confirm,
            Action::Confirm | Action::Cancel => self.mode = self.panel_mode,
            Action::SchemeChanged(scheme) => {
                self.scheme = scheme;
                self.palette = scheme.palette();
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        f.render_widget(
            StatusBarWidget::new(&self.status_bar, self.scheme, self.palette, self.base_style()),
            area,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_message_is_recorded_as_info() {
        let mut view = StatusBarView::new(ColorScheme::Dark);
        view.update(Action::SystemMessage("saved".to_string()))
            .expect("update ok");
        assert_eq!(
            view.status_bar.message(),
            Some(&(Level::Info, "saved".to_string()))
        );
    }

    #[test]
    fn test_error_actions_are_recorded_as_errors() {
        let mut view = StatusBarView::new(ColorScheme::Dark);
        view.update(Action::Error("boom".to_string()))
            .expect("update ok");
        let (level, _) = view.status_bar.message().expect("message set");
        assert_eq!(*level, Level::Error);
    }

    #[test]
    fn test_panel_switch_clears_message() {
        let mut view = StatusBarView::new(ColorScheme::Dark);
        view.update(Action::SystemMessage("saved".to_string()))
            .expect("update ok");
        view.update(Action::ShowAppearance).expect("update ok");
        assert_eq!(view.status_bar.message(), None);
    }

    #[test]
    fn test_dialog_mode_round_trip() {
        let mut view = StatusBarView::new(ColorScheme::Dark);
        view.update(Action::ShowAppearance).expect("update ok");
        view.update(Action::ConfirmReset).expect("update ok");
        assert_eq!(view.mode, Mode::Confirm);
        view.update(Action::Cancel).expect("update ok");
        assert_eq!(view.mode, Mode::Appearance);
    }
}
