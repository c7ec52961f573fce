// Integration test for the auto-logout preferences flow
// Drives the preferences panel through dispatched actions the way the app
// event loop does, and checks the emitted state broadcasts.

use chrono::Duration;
use tokio::sync::mpsc;

use prefsui::{
    action::Action,
    components::{Component, ConfirmDialog, PreferencesPanel},
    model::{
        appearance::ColorScheme,
        autologout::{
            AutoLogoutMode, AutoLogoutPreference, DEFAULT_DURATION_HOURS, DEFAULT_SCHEDULE_DAYS,
        },
    },
};

fn panel_with_channel() -> (PreferencesPanel, mpsc::UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut panel = PreferencesPanel::new(AutoLogoutPreference::default(), ColorScheme::Dark);
    panel.register_action_handler(tx).expect("handler registers");
    (panel, rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<Action>) -> Vec<Action> {
    let mut actions = Vec::new();
    while let Ok(action) = rx.try_recv() {
        actions.push(action);
    }
    actions
}

#[test]
fn test_full_configuration_scenario() {
    let (mut panel, mut rx) = panel_with_channel();

    // Fresh panel: disabled, duration mode, 8 hours.
    let p = *panel.preference();
    assert!(!p.enabled());
    assert_eq!(p.mode(), AutoLogoutMode::Duration);
    assert_eq!(p.duration_hours(), Some(DEFAULT_DURATION_HOURS));

    // Enable: duration setting must be untouched.
    panel.update(Action::ToggleEnabled).expect("update ok");
    let p = *panel.preference();
    assert!(p.enabled());
    assert_eq!(p.duration_hours(), Some(DEFAULT_DURATION_HOURS));

    // Switch to a custom schedule: seeded with a one-week range, duration
    // payload gone.
    panel.update(Action::SelectScheduleMode).expect("update ok");
    let p = *panel.preference();
    assert_eq!(p.duration_hours(), None);
    let seeded = p.custom_schedule().expect("schedule seeded");
    assert_eq!(
        seeded.end() - seeded.start(),
        Duration::days(DEFAULT_SCHEDULE_DAYS)
    );

    // Push the end endpoint out two days and apply.
    panel.update(Action::SwitchField).expect("update ok");
    panel.update(Action::IncrementDay).expect("update ok");
    panel.update(Action::IncrementDay).expect("update ok");
    panel.update(Action::Apply).expect("update ok");
    let configured = panel
        .preference()
        .custom_schedule()
        .expect("schedule applied");
    assert_eq!(configured.end() - seeded.end(), Duration::days(2));

    // Disable: only the flag flips, the schedule is retained.
    panel.update(Action::ToggleEnabled).expect("update ok");
    let p = *panel.preference();
    assert!(!p.enabled());
    assert_eq!(p.custom_schedule(), Some(configured));

    // Re-enable: the exact configuration is restored.
    panel.update(Action::ToggleEnabled).expect("update ok");
    let p = *panel.preference();
    assert!(p.enabled());
    assert_eq!(p.custom_schedule(), Some(configured));

    // Every mutation above was broadcast.
    let broadcasts = drain(&mut rx)
        .into_iter()
        .filter(|a| matches!(a, Action::AutoLogoutChanged(_)))
        .count();
    assert_eq!(broadcasts, 5);
}

#[test]
fn test_partial_schedule_never_clobbers_configuration() {
    let (mut panel, mut rx) = panel_with_channel();
    panel.update(Action::SelectScheduleMode).expect("update ok");
    panel.update(Action::Apply).expect("update ok");
    let committed = panel.preference().custom_schedule().expect("committed");
    drain(&mut rx);

    // Clear one endpoint mid-selection and try to apply: the committed
    // schedule must survive and nothing may be broadcast.
    panel.update(Action::ClearSelection).expect("update ok");
    panel.update(Action::Apply).expect("update ok");

    assert_eq!(
        panel.preference().custom_schedule(),
        Some(committed),
        "partial selection must be a no-op"
    );
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_mode_round_trip_reseeds_defaults() {
    let (mut panel, mut rx) = panel_with_channel();

    // Pick a non-default preset (cursor starts on 8 hours at index 3).
    for _ in 0..3 {
        panel.update(Action::SelectNext).expect("update ok");
    }
    panel.update(Action::Apply).expect("update ok");
    assert_eq!(panel.preference().duration_hours(), Some(48));

    // Leaving duration mode and coming back reseeds the default hours;
    // stale values must not survive a mode change.
    panel.update(Action::SelectDateMode).expect("update ok");
    panel.update(Action::SelectDurationMode).expect("update ok");
    assert_eq!(
        panel.preference().duration_hours(),
        Some(DEFAULT_DURATION_HOURS)
    );
    drain(&mut rx);
}

#[test]
fn test_reset_flow_through_confirm_dialog() {
    let (dialog_tx, mut dialog_rx) = mpsc::unbounded_channel();
    let mut dialog = ConfirmDialog::new(ColorScheme::Dark);
    dialog
        .register_action_handler(dialog_tx)
        .expect("handler registers");

    let (mut panel, mut panel_rx) = panel_with_channel();
    panel.update(Action::ToggleEnabled).expect("update ok");
    panel.update(Action::SelectDateMode).expect("update ok");
    drain(&mut panel_rx);

    // The reset intent opens the dialog but changes nothing yet.
    dialog.update(Action::ConfirmReset).expect("update ok");
    assert!(dialog.visible());
    assert!(panel.preference().enabled());

    // Canceling drops the intent entirely.
    dialog.update(Action::Cancel).expect("update ok");
    assert!(dialog_rx.try_recv().is_err());

    // Confirming dispatches the reset, which the panel then applies.
    dialog.update(Action::ConfirmReset).expect("update ok");
    dialog.update(Action::Confirm).expect("update ok");
    let dispatched = dialog_rx.try_recv().expect("reset dispatched");
    assert_eq!(dispatched, Action::ResetPreferences);

    panel.update(dispatched).expect("update ok");
    assert_eq!(panel.preference(), &AutoLogoutPreference::default());
}
