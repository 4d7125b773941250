use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::message::ChatMessage;
use super::transport::ChatTransport;
use super::wire::ChatRequest;

/// Page access needed by the chat widget.
pub trait ChatSurface {
    /// Current, untrimmed text of the message input.
    fn input_text(&self) -> String;

    fn clear_input(&self);

    fn append_message(&self, message: &ChatMessage);

    /// Moves the message list's scroll position to its full scroll height.
    fn scroll_to_bottom(&self);
}

pub struct ChatWidget<S, T> {
    surface: S,
    transport: T,
    fallback_message: String,
}

impl<S: ChatSurface, T: ChatTransport> ChatWidget<S, T> {
    pub fn new(surface: S, transport: T, fallback_message: impl Into<String>) -> Self {
        Self {
            surface,
            transport,
            fallback_message: fallback_message.into(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Moves the typed text into the message list.
    ///
    /// Returns the trimmed text, or `None` without touching the page when it is blank.
    pub fn take_input(&self) -> Option<String> {
        let text = self.surface.input_text().trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.render(&ChatMessage::user(text.clone()));
        self.surface.clear_input();
        Some(text)
    }

    /// Sends one message and renders whatever comes back.
    ///
    /// Any failure renders the fallback message instead; there is no retry.
    pub async fn deliver(&self, text: String) -> ChatMessage {
        let reply = match self.transport.send(ChatRequest::new(text)).await {
            Ok(reply) => ChatMessage::assistant(reply.response, reply.is_crisis),
            Err(error) => {
                tracing::error!("chat request failed: {}", error);
                ChatMessage::assistant(self.fallback_message.clone(), false)
            }
        };

        self.render(&reply);
        reply
    }

    fn render(&self, message: &ChatMessage) {
        self.surface.append_message(message);
        self.surface.scroll_to_bottom();
    }
}

impl<S, T> ChatWidget<S, T>
where
    S: ChatSurface + 'static,
    T: ChatTransport + 'static,
{
    /// Handles one form submission.
    ///
    /// The user message is rendered before this returns; the returned future performs the
    /// round trip. Submissions are not serialized, so replies land in completion order.
    pub fn submit(self: &Rc<Self>) -> Option<LocalBoxFuture<'static, ChatMessage>> {
        let text = self.take_input()?;
        let widget = Rc::clone(self);
        Some(async move { widget.deliver(text).await }.boxed_local())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;

    use super::*;
    use crate::chat::message::Sender;
    use crate::chat::wire::ChatReply;
    use crate::config::DEFAULT_FALLBACK_MESSAGE;
    use crate::error::{ChatError, ChatResult};

    const ROW_HEIGHT: i32 = 24;

    #[derive(Default)]
    struct FakeSurface {
        input: RefCell<String>,
        messages: RefCell<Vec<ChatMessage>>,
        scroll_height: Cell<i32>,
        scroll_top: Cell<i32>,
        scroll_calls: Cell<usize>,
    }

    impl FakeSurface {
        fn type_text(&self, text: &str) {
            *self.input.borrow_mut() = text.to_string();
        }

        fn messages(&self) -> Vec<ChatMessage> {
            self.messages.borrow().clone()
        }
    }

    impl ChatSurface for FakeSurface {
        fn input_text(&self) -> String {
            self.input.borrow().clone()
        }

        fn clear_input(&self) {
            self.input.borrow_mut().clear();
        }

        fn append_message(&self, message: &ChatMessage) {
            self.messages.borrow_mut().push(message.clone());
            self.scroll_height.set(self.scroll_height.get() + ROW_HEIGHT);
        }

        fn scroll_to_bottom(&self) {
            self.scroll_top.set(self.scroll_height.get());
            self.scroll_calls.set(self.scroll_calls.get() + 1);
        }
    }

    /// Hands out scripted replies in request order.
    #[derive(Default)]
    struct ScriptedTransport {
        requests: RefCell<Vec<ChatRequest>>,
        replies: RefCell<VecDeque<oneshot::Receiver<ChatResult<ChatReply>>>>,
    }

    impl ScriptedTransport {
        fn reply_with(&self, result: ChatResult<ChatReply>) {
            let (sender, receiver) = oneshot::channel();
            let _ = sender.send(result);
            self.replies.borrow_mut().push_back(receiver);
        }

        fn reply_later(&self) -> oneshot::Sender<ChatResult<ChatReply>> {
            let (sender, receiver) = oneshot::channel();
            self.replies.borrow_mut().push_back(receiver);
            sender
        }

        fn requests(&self) -> Vec<ChatRequest> {
            self.requests.borrow().clone()
        }
    }

    impl ChatTransport for ScriptedTransport {
        fn send(&self, request: ChatRequest) -> LocalBoxFuture<'_, ChatResult<ChatReply>> {
            self.requests.borrow_mut().push(request);
            let receiver = self.replies.borrow_mut().pop_front();
            async move {
                match receiver {
                    Some(receiver) => receiver.await.unwrap_or_else(|_| {
                        Err(ChatError::Request {
                            stage: "scripted-reply",
                            endpoint: "/api/chat".to_string(),
                            message: "reply dropped".to_string(),
                        })
                    }),
                    None => Err(ChatError::Request {
                        stage: "scripted-reply",
                        endpoint: "/api/chat".to_string(),
                        message: "connection refused".to_string(),
                    }),
                }
            }
            .boxed_local()
        }
    }

    fn widget() -> Rc<ChatWidget<FakeSurface, ScriptedTransport>> {
        Rc::new(ChatWidget::new(
            FakeSurface::default(),
            ScriptedTransport::default(),
            DEFAULT_FALLBACK_MESSAGE,
        ))
    }

    fn reply(text: &str, is_crisis: bool) -> ChatResult<ChatReply> {
        Ok(ChatReply {
            response: text.to_string(),
            is_crisis,
        })
    }

    #[test]
    fn blank_input_is_ignored() {
        let widget = widget();

        for text in ["", "   ", "\t\n "] {
            widget.surface().type_text(text);

            assert!(widget.submit().is_none());
            assert_eq!(*widget.surface().input.borrow(), text);
        }

        assert!(widget.surface().messages().is_empty());
        assert!(widget.transport().requests().is_empty());
        assert_eq!(widget.surface().scroll_calls.get(), 0);
    }

    #[test]
    fn submit_renders_trimmed_user_message_and_sends_it() {
        let widget = widget();
        widget.transport().reply_with(reply("I'm here for you", false));
        widget.surface().type_text("  hello  ");

        let pending = widget.submit().expect("non-blank input should submit");

        assert_eq!(widget.surface().messages(), vec![ChatMessage::user("hello")]);
        assert!(widget.surface().input.borrow().is_empty());

        block_on(pending);

        let requests = widget.transport().requests();
        assert_eq!(requests, vec![ChatRequest::new("hello")]);
        assert_eq!(
            serde_json::to_string(&requests[0]).unwrap(),
            r#"{"message":"hello"}"#
        );
    }

    #[test]
    fn successful_reply_is_rendered_as_assistant_message() {
        let widget = widget();
        widget.transport().reply_with(reply("I'm here for you", false));
        widget.surface().type_text("hello");

        let rendered = block_on(widget.submit().unwrap());

        assert_eq!(rendered, ChatMessage::assistant("I'm here for you", false));
        let messages = widget.surface().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert!(!messages[1].crisis);
    }

    #[test]
    fn crisis_reply_carries_crisis_marker() {
        let widget = widget();
        widget.transport().reply_with(reply("Please seek help", true));
        widget.surface().type_text("I can't go on");

        block_on(widget.submit().unwrap());

        let last = widget.surface().messages().pop().unwrap();
        assert_eq!(last.text, "Please seek help");
        assert!(last.crisis);
        assert!(last.css_classes().contains(&"crisis"));
    }

    #[test]
    fn every_failure_kind_renders_the_fallback() {
        let failures = [
            ChatError::Request {
                stage: "send-chat-request",
                endpoint: "/api/chat".to_string(),
                message: "network unreachable".to_string(),
            },
            ChatError::Status {
                stage: "check-chat-status",
                endpoint: "/api/chat".to_string(),
                status: 500,
            },
            ChatError::Decode {
                stage: "decode-chat-reply",
                message: "expected value at line 1 column 1".to_string(),
            },
        ];

        for failure in failures {
            let widget = widget();
            widget.transport().reply_with(Err(failure));
            widget.surface().type_text("hello");

            let rendered = block_on(widget.submit().unwrap());

            assert_eq!(rendered, ChatMessage::assistant(DEFAULT_FALLBACK_MESSAGE, false));
            assert_eq!(widget.surface().messages().len(), 2);
            assert_eq!(widget.transport().requests().len(), 1);
        }
    }

    #[test]
    fn list_is_scrolled_to_bottom_after_every_append() {
        let widget = widget();
        widget.transport().reply_with(reply("first", false));
        widget.surface().type_text("one");

        let pending = widget.submit().unwrap();
        let surface = widget.surface();
        assert_eq!(surface.scroll_top.get(), surface.scroll_height.get());

        block_on(pending);
        assert_eq!(surface.scroll_top.get(), surface.scroll_height.get());
        assert_eq!(surface.scroll_top.get(), 2 * ROW_HEIGHT);
        assert_eq!(surface.scroll_calls.get(), surface.messages().len());
    }

    #[test]
    fn overlapping_submissions_render_in_completion_order() {
        let widget = widget();
        let first_reply = widget.transport().reply_later();
        let second_reply = widget.transport().reply_later();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for text in ["first", "second"] {
            widget.surface().type_text(text);
            let pending = widget.submit().unwrap();
            spawner
                .spawn_local(async move {
                    pending.await;
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert_eq!(
            widget.transport().requests(),
            vec![ChatRequest::new("first"), ChatRequest::new("second")]
        );

        second_reply.send(reply("reply to second", false)).unwrap();
        pool.run_until_stalled();
        first_reply.send(reply("reply to first", false)).unwrap();
        pool.run_until_stalled();

        let texts = widget
            .surface()
            .messages()
            .into_iter()
            .map(|message| message.text)
            .collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec!["first", "second", "reply to second", "reply to first"]
        );
    }
}
