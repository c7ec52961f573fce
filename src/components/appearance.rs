//! Appearance panel
//!
//! Lets the user pick the color scheme. Applying a scheme broadcasts
//! `SchemeChanged` so every component restyles immediately.

use color_eyre::eyre::Result;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};
use tokio::sync::mpsc::UnboundedSender;

use super::{content_area, Component};
use crate::{
    action::Action,
    model::appearance::{Appearance, ColorScheme, Message},
    tui::Frame,
};

pub struct AppearancePanel {
    command_tx: Option<UnboundedSender<Action>>,
    appearance: Appearance,
    cursor: usize,
    visible: bool,
    sidebar_open: bool,
}

impl AppearancePanel {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            command_tx: None,
            appearance: Appearance::new(scheme),
            cursor: ColorScheme::ALL
                .iter()
                .position(|s| *s == scheme)
                .unwrap_or(0),
            visible: false,
            sidebar_open: true,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.appearance.scheme()
    }

    fn apply_scheme(&mut self, scheme: ColorScheme) -> Result<()> {
        if self.appearance.scheme() != scheme {
            self.appearance.update(Message::SchemeSelected(scheme));
            if let Some(tx) = &self.command_tx {
                tx.send(Action::SchemeChanged(scheme))?;
            }
        }
        Ok(())
    }
}

impl Component for AppearancePanel {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            Action::ShowAppearance => self.visible = true,
            Action::ShowPreferences => self.visible = false,
            Action::ResetPreferences => {
                self.cursor = 0;
                self.apply_scheme(ColorScheme::default())?;
            }
            _ if !self.visible => {}
            Action::SelectNext => {
                if self.cursor + 1 < ColorScheme::ALL.len() {
                    self.cursor += 1;
                }
            }
            Action::SelectPrev => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::Apply => self.apply_scheme(ColorScheme::ALL[self.cursor])?,
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

        let palette = self.appearance.palette();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .padding(Padding::horizontal(1))
            .title(" Appearance ")
            .title_style(Style::default().fg(palette.accent).bold());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        for (i, scheme) in ColorScheme::ALL.iter().enumerate() {
            let marker = if *scheme == self.appearance.scheme() {
                "* "
            } else {
                "  "
            };
            let style = if i == self.cursor {
                Style::default().fg(palette.accent).reversed()
            } else {
                Style::default().fg(palette.text)
            };
            lines.push(Line::styled(format!("{marker}{scheme}"), style));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Active scheme: {}", self.appearance.scheme()),
            Style::default().fg(palette.accent),
        ));
        f.render_widget(Paragraph::new(lines), inner);

        Ok(())
    }
}
