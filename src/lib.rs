//! Client core for the MOSDAC AI chat: an in-memory transcript and a
//! single-flight request controller that posts each message to a chat
//! endpoint and records the answer, or the failure, as a bot message.

pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod store;
pub mod transport;

pub use config::{ClientConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use controller::{ChatController, PendingRequest, RequestState, SubmitOutcome};
pub use errors::ChatError;
pub use models::{ChatRequest, ChatResponse, Message, Sender};
pub use store::{ConversationStore, StoreEvent};
#[cfg(not(target_arch = "wasm32"))]
pub use transport::HttpTransport;
pub use transport::ChatTransport;
