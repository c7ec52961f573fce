// Rendering integration tests
// Draws the components into a test terminal and asserts on the buffer
// contents, the same way the app's draw loop invokes them.

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use tokio::sync::mpsc;

use prefsui::{
    action::Action,
    components::{
        Component, ConfirmDialog, DebugOverlay, PreferencesPanel, SidebarNav, StatusBarView,
    },
    model::{appearance::ColorScheme, autologout::AutoLogoutPreference},
};

fn buffer_text(buffer: &Buffer) -> String {
    let area = *buffer.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(components: &mut [&mut dyn Component]) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|f| {
            for component in components.iter_mut() {
                component.draw(f, f.area()).expect("draw succeeds");
            }
        })
        .expect("draw");
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_preferences_panel_duration_view() {
    let mut panel = PreferencesPanel::new(AutoLogoutPreference::default(), ColorScheme::Dark);
    let text = render(&mut [&mut panel]);

    assert!(text.contains("Auto-logout"));
    assert!(text.contains("[ ] Enabled"));
    assert!(text.contains("Fixed duration"));
    assert!(text.contains("* 8 hours"));
    assert!(text.contains("Auto-logout disabled"));
}

#[test]
fn test_preferences_panel_schedule_view() {
    let mut panel = PreferencesPanel::new(AutoLogoutPreference::default(), ColorScheme::Dark);
    panel.update(Action::ToggleEnabled).expect("update ok");
    panel.update(Action::SelectScheduleMode).expect("update ok");
    let text = render(&mut [&mut panel]);

    assert!(text.contains("Start"));
    assert!(text.contains("End"));
    assert!(text.contains("Auto-logout from"));
}

#[test]
fn test_sidebar_and_panel_compose() {
    let mut sidebar = SidebarNav::new(ColorScheme::Dark);
    let mut panel = PreferencesPanel::new(AutoLogoutPreference::default(), ColorScheme::Dark);
    let text = render(&mut [&mut sidebar, &mut panel]);

    assert!(text.contains("Session"));
    assert!(text.contains("Appearance"));
    assert!(text.contains("Auto-logout"));
}

#[test]
fn test_hidden_sidebar_leaves_full_width_to_panel() {
    let mut sidebar = SidebarNav::new(ColorScheme::Dark);
    let mut panel = PreferencesPanel::new(AutoLogoutPreference::default(), ColorScheme::Dark);
    sidebar.update(Action::ToggleSidebar).expect("update ok");
    panel.update(Action::ToggleSidebar).expect("update ok");
    let text = render(&mut [&mut sidebar, &mut panel]);

    assert!(!text.contains("Session"));
    let first_line = text.lines().next().expect("first line");
    // The panel border now starts in the first column.
    assert!(first_line.trim_start().starts_with('┌'));
}

#[test]
fn test_status_bar_renders_feedback() {
    let mut status_bar = StatusBarView::new(ColorScheme::Dark);
    status_bar
        .update(Action::SystemMessage("Preferences saved".to_string()))
        .expect("update ok");
    let text = render(&mut [&mut status_bar]);

    assert!(text.contains("prefsui"));
    assert!(text.contains("Preferences saved"));
}

#[test]
fn test_dialog_overlays_panel() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut panel = PreferencesPanel::new(AutoLogoutPreference::default(), ColorScheme::Dark);
    let mut dialog = ConfirmDialog::new(ColorScheme::Dark);
    dialog.register_action_handler(tx).expect("handler registers");
    dialog.update(Action::ConfirmReset).expect("update ok");

    let text = render(&mut [&mut panel, &mut dialog]);
    assert!(text.contains("Reset preferences"));
    assert!(text.contains("[y] confirm"));
}

#[test]
fn test_debug_overlay_toggles_into_view() {
    let mut panel = PreferencesPanel::new(AutoLogoutPreference::default(), ColorScheme::Dark);
    let mut overlay = DebugOverlay::new(AutoLogoutPreference::default(), ColorScheme::Dark);

    let text = render(&mut [&mut panel, &mut overlay]);
    assert!(!text.contains("debug"));

    overlay
        .update(Action::ToggleDebugOverlay)
        .expect("update ok");
    let text = render(&mut [&mut panel, &mut overlay]);
    assert!(text.contains("debug"));
    assert!(text.contains("tick: measuring"));
}
