//! Development inspection overlay
//!
//! A toggleable floating box showing measured tick/render rates and the raw
//! preference value currently held by the panel. Off by default.

use color_eyre::eyre::Result;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::Component;
use crate::{
    action::Action,
    model::{
        appearance::{ColorScheme, Palette},
        autologout::AutoLogoutPreference,
        debug::{DebugStats, Message},
    },
    tui::Frame,
};

const OVERLAY_WIDTH: u16 = 44;
const OVERLAY_HEIGHT: u16 = 6;

pub struct DebugOverlay {
    stats: DebugStats,
    visible: bool,
    palette: Palette,
    latest: AutoLogoutPreference,
}

impl DebugOverlay {
    pub fn new(preference: AutoLogoutPreference, scheme: ColorScheme) -> Self {
        Self {
            stats: DebugStats::new(),
            visible: false,
            palette: scheme.palette(),
            latest: preference,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    fn rate_line(label: &str, rate: Option<f64>) -> String {
        match rate {
            Some(rate) => format!("{label}: {rate:.1}/s"),
            None => format!("{label}: measuring"),
        }
    }
}

impl Component for DebugOverlay {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => self.stats.update(Message::TickRecorded { now: None }),
            Action::Render => self.stats.update(Message::FrameRecorded { now: None }),
            Action::ToggleDebugOverlay => self.visible = !self.visible,
            Action::AutoLogoutChanged(preference) => self.latest = preference,
            Action::SchemeChanged(scheme) => self.palette = scheme.palette(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if !self.visible {
            return Ok(());
        }

        let width = OVERLAY_WIDTH.min(area.width);
        let height = OVERLAY_HEIGHT.min(area.height);
        let overlay = Rect::new(
            area.x + area.width.saturating_sub(width),
            area.y,
            width,
            height,
        );

        f.render_widget(Clear, overlay);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.muted))
            .title(" debug ");
        let inner = block.inner(overlay);
        f.render_widget(block, overlay);

        let lines = vec![
            Line::raw(Self::rate_line("tick", self.stats.tick_rate())),
            Line::raw(Self::rate_line("frame", self.stats.frame_rate())),
            Line::raw(format!("enabled: {}", self.latest.enabled())),
            Line::raw(format!("rule: {:?}", self.latest.rule())),
        ];
        f.render_widget(
            Paragraph::new(lines).style(Style::default().fg(self.palette.muted)),
            inner,
        );

        Ok(())
    }
}
