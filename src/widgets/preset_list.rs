use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::format::format_duration;
use crate::model::appearance::Palette;

/// The selectable list of duration presets.
///
/// The cursor row is highlighted; the currently applied preset carries a
/// marker so both are visible while browsing.
pub struct PresetListWidget<'a> {
    presets: &'a [u32],
    cursor: usize,
    applied: Option<u32>,
    palette: Palette,
}

impl<'a> PresetListWidget<'a> {
    pub fn new(presets: &'a [u32], cursor: usize, applied: Option<u32>, palette: Palette) -> Self {
        Self {
            presets,
            cursor,
            applied,
            palette,
        }
    }
}

impl Widget for PresetListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let lines: Vec<Line> = self
            .presets
            .iter()
            .enumerate()
            .map(|(i, hours)| {
                let marker = if Some(*hours) == self.applied {
                    "* "
                } else {
                    "  "
                };
                let label = format!("{marker}{}", format_duration(*hours));
                let style = if i == self.cursor {
                    Style::default().fg(self.palette.accent).reversed()
                } else if Some(*hours) == self.applied {
                    Style::default().fg(self.palette.accent)
                } else {
                    Style::default().fg(self.palette.text)
                };
                Line::styled(label, style)
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
