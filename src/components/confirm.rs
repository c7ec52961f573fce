//! Confirmation dialog component
//!
//! Opens on destructive intents and holds the action to dispatch when the
//! user confirms. While visible, the app routes input through the dialog
//! keymap, so the answer keys are the only way out.

use color_eyre::eyre::Result;
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use super::Component;
use crate::{
    action::Action,
    model::{
        appearance::{ColorScheme, Palette},
        dialog::{Dialog, Message},
    },
    tui::Frame,
    widgets::dialog::DialogWidget,
};

pub struct ConfirmDialog {
    command_tx: Option<UnboundedSender<Action>>,
    dialog: Dialog,
    pending: Option<Action>,
    palette: Palette,
}

impl ConfirmDialog {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            command_tx: None,
            dialog: Dialog::default(),
            pending: None,
            palette: scheme.palette(),
        }
    }

    pub fn visible(&self) -> bool {
        self.dialog.visible()
    }
}

impl Component for ConfirmDialog {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ConfirmReset => {
                self.dialog.update(Message::Opened {
                    title: String::from("Reset preferences"),
                    body: String::from(
                        "Restore the default auto-logout and appearance settings? \
                         Unsaved changes are lost.",
                    ),
                });
                self.pending = Some(Action::ResetPreferences);
            }
            Action::Confirm => {
                if self.dialog.visible() {
                    self.dialog.update(Message::Confirmed);
                    if let (Some(tx), Some(pending)) = (&self.command_tx, self.pending.take()) {
                        tx.send(pending)?;
                    }
                }
            }
            Action::Cancel => {
                if self.dialog.visible() {
                    self.dialog.update(Message::Canceled);
                    self.pending = None;
                }
            }
            Action::SchemeChanged(scheme) => self.palette = scheme.palette(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        f.render_widget(DialogWidget::new(&self.dialog, self.palette), area);
        Ok(())
    }
}
