#![deny(unsafe_code)]

/// Page widgets for the mood tracker.
///
/// This crate holds the target-independent behavior of the dashboard widgets: mood selection
/// and chat submission. Page access goes through the [`mood::MoodBoard`] and
/// [`chat::ChatSurface`] traits, network access through [`chat::ChatTransport`], so the same
/// logic runs against the browser DOM and against in-memory fakes.
pub mod chat;
/// Widget configuration with defaults matching the dashboard markup.
pub mod config;
pub mod error;
/// Mood option selection state.
pub mod mood;

pub use chat::{
    ChatMessage, ChatReply, ChatRequest, ChatSurface, ChatTransport, ChatWidget, Sender,
};
pub use config::WidgetConfig;
pub use error::{ChatError, ChatResult};
pub use mood::{MoodBoard, MoodSelection, MoodSelector};
