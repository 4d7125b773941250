use futures::future::LocalBoxFuture;

use super::wire::{ChatReply, ChatRequest};
use crate::error::ChatResult;

/// One request/response exchange with the chat endpoint.
///
/// Futures are `!Send`: the browser transport runs on the page's single event loop.
pub trait ChatTransport {
    fn send(&self, request: ChatRequest) -> LocalBoxFuture<'_, ChatResult<ChatReply>>;
}
