use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use mindful_widgets::{ChatError, ChatReply, ChatRequest, ChatResult, ChatTransport};

/// Posts chat messages to the page's own backend with `fetch`.
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn exchange(&self, request: ChatRequest) -> ChatResult<ChatReply> {
        let response = Request::post(&self.endpoint)
            .json(&request)
            .map_err(|source| self.request_error("encode-chat-request", source))?
            .send()
            .await
            .map_err(|source| self.request_error("send-chat-request", source))?;

        if !response.ok() {
            return Err(ChatError::Status {
                stage: "check-chat-status",
                endpoint: self.endpoint.clone(),
                status: response.status(),
            });
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|source| ChatError::Decode {
                stage: "decode-chat-reply",
                message: source.to_string(),
            })
    }

    fn request_error(&self, stage: &'static str, source: gloo_net::Error) -> ChatError {
        ChatError::Request {
            stage,
            endpoint: self.endpoint.clone(),
            message: source.to_string(),
        }
    }
}

impl ChatTransport for FetchTransport {
    fn send(&self, request: ChatRequest) -> LocalBoxFuture<'_, ChatResult<ChatReply>> {
        self.exchange(request).boxed_local()
    }
}
