//! Confirmation dialog state
//!
//! A modal yes/no prompt. Opening seeds the title and body; confirming and
//! canceling both close it. What happens on confirm is the concern of the
//! component that opened the dialog, not of this state.

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Opened { title: String, body: String },
    Confirmed,
    Canceled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dialog {
    visible: bool,
    title: String,
    body: String,
}

impl Dialog {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Opened { title, body } => {
                self.title = title;
                self.body = body;
                self.visible = true;
            }
            Message::Confirmed | Message::Canceled => {
                self.visible = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open_dialog() -> Dialog {
        let mut dialog = Dialog::default();
        dialog.update(Message::Opened {
            title: "Reset preferences".to_string(),
            body: "Restore defaults?".to_string(),
        });
        dialog
    }

    #[test]
    fn test_default_is_hidden() {
        let dialog = Dialog::default();
        assert!(!dialog.visible());
        assert_eq!(dialog.title(), "");
        assert_eq!(dialog.body(), "");
    }

    #[test]
    fn test_opened_seeds_content() {
        let dialog = open_dialog();
        assert!(dialog.visible());
        assert_eq!(dialog.title(), "Reset preferences");
        assert_eq!(dialog.body(), "Restore defaults?");
    }

    #[test]
    fn test_confirmed_hides() {
        let mut dialog = open_dialog();
        dialog.update(Message::Confirmed);
        assert!(!dialog.visible());
    }

    #[test]
    fn test_canceled_hides() {
        let mut dialog = open_dialog();
        dialog.update(Message::Canceled);
        assert!(!dialog.visible());
    }

    #[test]
    fn test_reopen_replaces_content() {
        let mut dialog = open_dialog();
        dialog.update(Message::Canceled);
        dialog.update(Message::Opened {
            title: "Quit".to_string(),
            body: "Discard changes?".to_string(),
        });
        assert!(dialog.visible());
        assert_eq!(dialog.title(), "Quit");
        assert_eq!(dialog.body(), "Discard changes?");
    }
}
