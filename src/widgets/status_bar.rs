use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::appearance::{ColorScheme, Palette};
use crate::model::status_bar::{Level, StatusBar};

/// Bottom-of-screen status area: an info line with the application name,
/// version and active scheme, and a message line below it.
///
/// The widget splits the full frame itself and only paints the bottom two
/// rows, so it can be handed the same area as every other component.
pub struct StatusBarWidget<'a> {
    status_bar: &'a StatusBar,
    scheme: ColorScheme,
    palette: Palette,
    base_style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(
        status_bar: &'a StatusBar,
        scheme: ColorScheme,
        palette: Palette,
        base_style: Style,
    ) -> Self {
        Self {
            status_bar,
            scheme,
            palette,
            base_style,
        }
    }

    fn info_line(&self) -> Line<'static> {
        let name = env!("CARGO_PKG_NAME");
        let version = crate::VERSION;
        Line::from(vec![
            Span::styled(
                format!("{name} v{version}"),
                Style::default().fg(self.palette.accent).bold(),
            ),
            Span::raw("  "),
            Span::styled(
                format!("scheme: {}", self.scheme),
                Style::default().fg(self.palette.muted),
            ),
            Span::raw("  "),
            Span::styled(
                "<space> toggle  <enter> apply  <s> save  <q> quit",
                Style::default().fg(self.palette.muted),
            ),
        ])
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),    // Main content area (not used by the status bar)
                Constraint::Length(1), // Info line
                Constraint::Length(1), // Message line
            ],
        )
        .split(area);

        Paragraph::new(self.info_line())
            .style(self.base_style)
            .render(layout[1], buf);

        if let Some((level, text)) = self.status_bar.message() {
            let style = match level {
                Level::Info => Style::default().fg(self.palette.text),
                Level::Error => Style::default().fg(self.palette.warning).bold(),
            };
            let prefix = match level {
                Level::Info => "",
                Level::Error => "error: ",
            };
            Paragraph::new(format!("{prefix}{text}")).style(style).render(layout[2], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status_bar::Message;

    fn row_text(buffer: &Buffer, y: u16) -> String {
        let area = *buffer.area();
        (0..area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
    }

    fn widget<'a>(status_bar: &'a StatusBar) -> StatusBarWidget<'a> {
        StatusBarWidget::new(
            status_bar,
            ColorScheme::Dark,
            ColorScheme::Dark.palette(),
            Style::default(),
        )
    }

    #[test]
    fn test_info_line_shows_name_and_scheme() {
        let area = Rect::new(0, 0, 80, 5);
        let mut buffer = Buffer::empty(area);
        let status_bar = StatusBar::default();
        widget(&status_bar).render(area, &mut buffer);

        let info = row_text(&buffer, 3);
        assert!(info.contains("prefsui"));
        assert!(info.contains("scheme: Dark"));
    }

    #[test]
    fn test_message_line_empty_by_default() {
        let area = Rect::new(0, 0, 80, 5);
        let mut buffer = Buffer::empty(area);
        let status_bar = StatusBar::default();
        widget(&status_bar).render(area, &mut buffer);
        assert_eq!(row_text(&buffer, 4).trim(), "");
    }

    #[test]
    fn test_info_message_is_rendered() {
        let area = Rect::new(0, 0, 80, 5);
        let mut buffer = Buffer::empty(area);
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::MessageShown {
            level: Level::Info,
            text: "Preferences saved".to_string(),
        });
        widget(&status_bar).render(area, &mut buffer);
        assert!(row_text(&buffer, 4).contains("Preferences saved"));
    }

    #[test]
    fn test_error_message_is_prefixed() {
        let area = Rect::new(0, 0, 80, 5);
        let mut buffer = Buffer::empty(area);
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::MessageShown {
            level: Level::Error,
            text: "disk full".to_string(),
        });
        widget(&status_bar).render(area, &mut buffer);
        assert!(row_text(&buffer, 4).contains("error: disk full"));
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buffer = Buffer::empty(area);
        let status_bar = StatusBar::default();
        widget(&status_bar).render(area, &mut buffer);
    }
}
