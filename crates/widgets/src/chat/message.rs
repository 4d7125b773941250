/// Class carried by every rendered message.
pub const MESSAGE_CLASS: &str = "message";
/// Class added to assistant messages the server flagged as crisis content.
pub const CRISIS_CLASS: &str = "crisis";

/// Chat speaker role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Class naming the sender on the rendered element.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "ai",
        }
    }
}

/// Ephemeral display record; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub crisis: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            crisis: false,
        }
    }

    pub fn assistant(text: impl Into<String>, crisis: bool) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
            crisis,
        }
    }

    /// Classes for the rendered element, in the order they are applied.
    pub fn css_classes(&self) -> Vec<&'static str> {
        let mut classes = vec![MESSAGE_CLASS, self.sender.css_class()];
        if self.crisis {
            classes.push(CRISIS_CLASS);
        }
        classes
    }
}
