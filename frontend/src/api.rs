use gloo_net::http::Request;
use mosdac_chat::{ChatError, ChatRequest, ChatResponse, ChatTransport};

/// Browser transport over `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl ChatTransport for GlooTransport {
    async fn send(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        log::debug!("Sending request to: {endpoint}");

        let resp = Request::post(endpoint)
            .json(request)
            .map_err(|e| ChatError::Transport(format!("Serialize error: {e}")))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        log::debug!("Response status: {}", resp.status());
        if !resp.ok() {
            return Err(ChatError::Status { status: resp.status() });
        }

        resp.json::<ChatResponse>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }
}
