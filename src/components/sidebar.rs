//! Navigation sidebar
//!
//! Shows the available panels and highlights the active one. The sidebar is
//! an indicator, not a focus target: panel switching is bound to keys, and
//! the sidebar merely reflects the result.

use color_eyre::eyre::Result;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::{sidebar_area, Component};
use crate::{
    action::Action,
    model::{
        appearance::{ColorScheme, Palette},
        sidebar::{Message, Panel, Sidebar},
    },
    tui::Frame,
};

pub struct SidebarNav {
    sidebar: Sidebar,
    palette: Palette,
}

impl SidebarNav {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            sidebar: Sidebar::default(),
            palette: scheme.palette(),
        }
    }

    pub fn open(&self) -> bool {
        self.sidebar.open()
    }
}

impl Component for SidebarNav {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ToggleSidebar => self.sidebar.update(Message::VisibilityToggled),
            Action::ShowPreferences => {
                self.sidebar.update(Message::PanelSelected(Panel::Preferences));
            }
            Action::ShowAppearance => {
                self.sidebar.update(Message::PanelSelected(Panel::Appearance));
            }
            Action::SchemeChanged(scheme) => self.palette = scheme.palette(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if !self.sidebar.open() {
            return Ok(());
        }

        let area = sidebar_area(area);
        if area.width == 0 || area.height == 0 {
            return Ok(());
        }

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(self.palette.muted))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = vec![
            Line::styled(
                "Session",
                Style::default().fg(self.palette.muted).bold(),
            ),
            Line::raw(""),
        ];
        for panel in Panel::ALL {
            let style = if panel == self.sidebar.selected() {
                Style::default().fg(self.palette.accent).reversed()
            } else {
                Style::default().fg(self.palette.text)
            };
            lines.push(Line::styled(format!(" {panel} "), style));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "[ / ] switch",
            Style::default().fg(self.palette.muted),
        ));
        lines.push(Line::styled(
            "<b> hide",
            Style::default().fg(self.palette.muted),
        ));
        f.render_widget(Paragraph::new(lines), inner);

        Ok(())
    }
}
