use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::domain::text::wrap_text;
use crate::model::appearance::Palette;
use crate::model::dialog::Dialog;

const DIALOG_WIDTH: u16 = 46;

/// Centered modal confirmation popup.
pub struct DialogWidget<'a> {
    dialog: &'a Dialog,
    palette: Palette,
}

impl<'a> DialogWidget<'a> {
    pub fn new(dialog: &'a Dialog, palette: Palette) -> Self {
        Self { dialog, palette }
    }
}

/// Center a `width` x `height` rectangle inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl Widget for DialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if !self.dialog.visible() {
            return;
        }

        let inner_width = DIALOG_WIDTH.saturating_sub(4).max(1);
        let body = wrap_text(self.dialog.body(), inner_width as usize);
        let body_height = body.lines().count() as u16;
        // borders + padding + body + blank + answer line
        let height = body_height + 5;
        let popup = centered_rect(area, DIALOG_WIDTH, height);

        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.warning))
            .padding(Padding::horizontal(1))
            .title(format!(" {} ", self.dialog.title()))
            .style(Style::default().bg(self.palette.surface));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines: Vec<Line> = body
            .lines()
            .map(|l| Line::styled(l.to_string(), Style::default().fg(self.palette.text)))
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("[y]", Style::default().fg(self.palette.accent).bold()),
            Span::styled(" confirm   ", Style::default().fg(self.palette.text)),
            Span::styled("[n]", Style::default().fg(self.palette.accent).bold()),
            Span::styled(" cancel", Style::default().fg(self.palette.text)),
        ]));
        Paragraph::new(lines).render(inner, buf);
    }
}
