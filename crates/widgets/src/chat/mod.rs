/// Display records appended to the message list.
pub mod message;
pub mod transport;
pub mod widget;
/// JSON bodies exchanged with the chat endpoint.
pub mod wire;

pub use message::{ChatMessage, CRISIS_CLASS, MESSAGE_CLASS, Sender};
pub use transport::ChatTransport;
pub use widget::{ChatSurface, ChatWidget};
pub use wire::{ChatReply, ChatRequest};
