//! The single outbound call: `POST {endpoint}` with `{ "message": ... }`.

use crate::errors::ChatError;
use crate::models::{ChatRequest, ChatResponse};

/// Performs one chat exchange against the configured endpoint.
///
/// Implementations must map every failure into a [`ChatError`]: non-2xx
/// statuses to [`ChatError::Status`], connection failures to
/// [`ChatError::Transport`] and unreadable bodies to [`ChatError::Decode`].
/// No timeout is applied; the call waits for a response or a network error.
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    async fn send(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, ChatError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use tracing::{debug, error, info};

    use super::ChatTransport;
    use crate::errors::ChatError;
    use crate::models::{ChatRequest, ChatResponse};

    /// reqwest-backed transport for native clients.
    #[derive(Clone, Debug, Default)]
    pub struct HttpTransport {
        client: reqwest::Client,
    }

    impl HttpTransport {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl ChatTransport for HttpTransport {
        async fn send(
            &self,
            endpoint: &str,
            request: &ChatRequest,
        ) -> Result<ChatResponse, ChatError> {
            debug!(endpoint, message = %request.message, "Sending chat request");

            let resp = self
                .client
                .post(endpoint)
                .json(request)
                .send()
                .await
                .map_err(|e| {
                    error!("Chat request to {endpoint} failed: {e}");
                    ChatError::Transport(e.to_string())
                })?;

            let status = resp.status();
            info!(status = status.as_u16(), "Chat response received");
            if !status.is_success() {
                return Err(ChatError::Status { status: status.as_u16() });
            }

            resp.json::<ChatResponse>().await.map_err(|e| {
                error!("Failed to decode chat response: {e}");
                ChatError::Decode(e.to_string())
            })
        }
    }
}
