//! Status bar state
//!
//! Holds the single feedback line shown at the bottom of the screen.
//! Messages carry a level so the widget can style errors differently;
//! embedded newlines are normalized to spaces.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    MessageShown { level: Level, text: String },
    MessageCleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    message: Option<(Level, String)>,
}

impl StatusBar {
    pub fn message(&self) -> Option<&(Level, String)> {
        self.message.as_ref()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::MessageShown { level, text } => {
                let normalized = text.replace('\n', " ");
                self.message = Some((level, normalized));
            }
            Message::MessageCleared => {
                self.message = None;
            }
        }
    }
}
