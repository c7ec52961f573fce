use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::appearance::Palette;

/// A labeled on/off switch line.
pub struct SwitchWidget<'a> {
    label: &'a str,
    on: bool,
    palette: Palette,
}

impl<'a> SwitchWidget<'a> {
    pub fn new(label: &'a str, on: bool, palette: Palette) -> Self {
        Self { label, on, palette }
    }
}

impl Widget for SwitchWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let marker = if self.on { "[x]" } else { "[ ]" };
        let marker_style = if self.on {
            Style::default().fg(self.palette.accent).bold()
        } else {
            Style::default().fg(self.palette.muted)
        };
        let line = Line::from(vec![
            Span::styled(marker, marker_style),
            Span::raw(" "),
            Span::styled(self.label, Style::default().fg(self.palette.text)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
