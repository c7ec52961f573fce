//! Appearance state
//!
//! Holds the active color scheme and maps it to the concrete terminal
//! colors the widgets draw with.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Colors shared by every widget, resolved from the active scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub warning: Color,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
    #[strum(serialize = "High contrast")]
    HighContrast,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [
        ColorScheme::Dark,
        ColorScheme::Light,
        ColorScheme::HighContrast,
    ];

    pub fn next(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::HighContrast,
            ColorScheme::HighContrast => ColorScheme::Dark,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::HighContrast,
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::HighContrast => ColorScheme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ColorScheme::Dark => Palette {
                background: Color::Reset,
                surface: Color::Black,
                text: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                warning: Color::Yellow,
            },
            ColorScheme::Light => Palette {
                background: Color::White,
                surface: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                warning: Color::LightRed,
            },
            ColorScheme::HighContrast => Palette {
                background: Color::Black,
                surface: Color::Black,
                text: Color::White,
                muted: Color::White,
                accent: Color::LightYellow,
                warning: Color::LightRed,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SchemeSelected(ColorScheme),
    NextSchemeSelected,
    PrevSchemeSelected,
}

/// Manages the active color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Appearance {
    scheme: ColorScheme,
}

impl Appearance {
    pub fn new(scheme: ColorScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn palette(&self) -> Palette {
        self.scheme.palette()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::SchemeSelected(scheme) => {
                self.scheme = scheme;
            }
            Message::NextSchemeSelected => {
                self.scheme = self.scheme.next();
            }
            Message::PrevSchemeSelected => {
                self.scheme = self.scheme.prev();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_scheme() {
        let appearance = Appearance::default();
        assert_eq!(appearance.scheme(), ColorScheme::Dark);
    }

    #[test]
    fn test_scheme_selected() {
        let mut appearance = Appearance::default();
        appearance.update(Message::SchemeSelected(ColorScheme::Light));
        assert_eq!(appearance.scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_cycle_forward_wraps() {
        let mut appearance = Appearance::default();
        for expected in [
            ColorScheme::Light,
            ColorScheme::HighContrast,
            ColorScheme::Dark,
        ] {
            appearance.update(Message::NextSchemeSelected);
            assert_eq!(appearance.scheme(), expected);
        }
    }

    #[test]
    fn test_cycle_backward_wraps() {
        let mut appearance = Appearance::default();
        appearance.update(Message::PrevSchemeSelected);
        assert_eq!(appearance.scheme(), ColorScheme::HighContrast);
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.next().prev(), scheme);
        }
    }

    #[test]
    fn test_palettes_differ_per_scheme() {
        assert_ne!(
            ColorScheme::Dark.palette().text,
            ColorScheme::Light.palette().text
        );
        assert_ne!(
            ColorScheme::Dark.palette().accent,
            ColorScheme::HighContrast.palette().accent
        );
    }

    #[test]
    fn test_scheme_display_names() {
        assert_eq!(ColorScheme::Dark.to_string(), "Dark");
        assert_eq!(ColorScheme::HighContrast.to_string(), "High contrast");
    }
}
