use chrono::{DateTime, Local};
use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::format::format_instant;
use crate::model::appearance::Palette;

/// A single date field line: label, pending value (or a placeholder when
/// cleared), and a focus marker.
pub struct DateFieldWidget<'a> {
    label: &'a str,
    value: Option<DateTime<Local>>,
    focused: bool,
    palette: Palette,
}

impl<'a> DateFieldWidget<'a> {
    pub fn new(
        label: &'a str,
        value: Option<DateTime<Local>>,
        focused: bool,
        palette: Palette,
    ) -> Self {
        Self {
            label,
            value,
            focused,
            palette,
        }
    }
}

impl Widget for DateFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let marker = if self.focused { "> " } else { "  " };
        let value = match self.value {
            Some(at) => format_instant(at),
            None => String::from("not set"),
        };
        let value_style = if self.value.is_some() {
            Style::default().fg(self.palette.text)
        } else {
            Style::default().fg(self.palette.muted).italic()
        };
        let label_style = if self.focused {
            Style::default().fg(self.palette.accent).bold()
        } else {
            Style::default().fg(self.palette.muted)
        };

        let line = Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<7}", self.label), label_style),
            Span::styled(value, value_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
