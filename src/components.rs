pub mod appearance;
pub mod confirm;
pub mod debug_overlay;
pub mod preferences;
pub mod sidebar;
pub mod status_bar;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    config::Config,
    tui::{Event, Frame},
};

pub use appearance::AppearancePanel;
pub use confirm::ConfirmDialog;
pub use debug_overlay::DebugOverlay;
pub use preferences::PreferencesPanel;
pub use sidebar::SidebarNav;
pub use status_bar::StatusBarView;

/// Width of the navigation sidebar when it is open.
pub const SIDEBAR_WIDTH: u16 = 22;

/// Rows reserved at the bottom of the frame for the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// The area a panel may draw into: the full frame minus the sidebar column
/// (when open) and the status bar rows.
///
/// Every component receives the full frame and carves out its own region,
/// so they can be driven from a single draw loop.
pub fn content_area(area: Rect, sidebar_open: bool) -> Rect {
    let x_offset = if sidebar_open {
        SIDEBAR_WIDTH.min(area.width)
    } else {
        0
    };
    Rect::new(
        area.x + x_offset,
        area.y,
        area.width.saturating_sub(x_offset),
        area.height.saturating_sub(STATUS_BAR_HEIGHT),
    )
}

/// The sidebar column.
pub fn sidebar_area(area: Rect) -> Rect {
    Rect::new(
        area.x,
        area.y,
        SIDEBAR_WIDTH.min(area.width),
        area.height.saturating_sub(STATUS_BAR_HEIGHT),
    )
}

pub trait Component {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        let _ = tx;
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        let _ = config;
        Ok(())
    }

    fn init(&mut self, area: Rect) -> Result<()> {
        let _ = area;
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<Action>> {
        let r = match event {
            Some(Event::Key(key_event)) => self.handle_key_events(key_event)?,
            Some(Event::Mouse(mouse_event)) => self.handle_mouse_events(mouse_event)?,
            _ => None,
        };
        Ok(r)
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_content_area_reserves_sidebar_and_status_bar() {
        let area = Rect::new(0, 0, 80, 24);
        let content = content_area(area, true);
        assert_eq!(content, Rect::new(22, 0, 58, 22));
    }

    #[test]
    fn test_content_area_with_sidebar_closed() {
        let area = Rect::new(0, 0, 80, 24);
        let content = content_area(area, false);
        assert_eq!(content, Rect::new(0, 0, 80, 22));
    }

    #[test]
    fn test_content_area_narrow_terminal() {
        let area = Rect::new(0, 0, 10, 1);
        let content = content_area(area, true);
        assert_eq!(content.width, 0);
        assert_eq!(content.height, 0);
    }

    #[test]
    fn test_sidebar_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(sidebar_area(area), Rect::new(0, 0, 22, 22));
    }
}
