//! Request lifecycle: Idle → Sending → Settled → Idle, one request at a time.

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::ChatError;
use crate::models::{ChatRequest, ChatResponse, Message};
use crate::store::ConversationStore;
use crate::transport::ChatTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Sending,
    /// Passed through on the way back to `Idle` once a request completes.
    Settled,
}

/// Ticket for the accepted, in-flight submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    seq: u64,
    request: ChatRequest,
}

impl PendingRequest {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn text(&self) -> &str {
        &self.request.message
    }

    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// Result of one submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guard refused the submission; nothing changed.
    Rejected,
    /// The endpoint answered; the bot message holds the answer verbatim.
    Answered(Message),
    /// The exchange failed; the bot message holds the normalized error text.
    Failed { error: ChatError, message: Message },
}

impl SubmitOutcome {
    pub fn message(&self) -> Option<&Message> {
        match self {
            SubmitOutcome::Rejected => None,
            SubmitOutcome::Answered(message) | SubmitOutcome::Failed { message, .. } => {
                Some(message)
            }
        }
    }
}

/// Owns the transcript, the draft and the request state for one session.
///
/// [`begin_submit`](Self::begin_submit) and [`settle`](Self::settle) are the
/// synchronous halves of a cycle, so an event-loop adapter can drop its borrow
/// while the network call is suspended. [`submit`](Self::submit) runs a whole
/// cycle through the owned transport.
#[derive(Debug)]
pub struct ChatController<T> {
    config: ClientConfig,
    transport: T,
    store: ConversationStore,
    draft: String,
    state: RequestState,
    next_seq: u64,
    in_flight: Option<u64>,
}

impl<T> ChatController<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self::with_store(config, transport, ConversationStore::new())
    }

    /// Uses a store that may already carry rendering subscriptions.
    pub fn with_store(config: ClientConfig, transport: T, store: ConversationStore) -> Self {
        Self {
            config,
            transport,
            store,
            draft: String::new(),
            state: RequestState::Idle,
            next_seq: 0,
            in_flight: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == RequestState::Sending
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn transcript(&self) -> &[Message] {
        self.store.all()
    }

    /// Starts a new conversation. The request state is left untouched.
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Accepts the current draft if it is non-blank and nothing is in flight.
    ///
    /// On acceptance the trimmed text is appended as a user message, the draft
    /// is cleared and the controller enters `Sending`.
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        if self.state != RequestState::Idle {
            debug!("Submission rejected: a request is already in flight");
            return None;
        }
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }

        let text = text.to_string();
        self.draft.clear();
        self.store.append(Message::user(text.clone()));

        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        self.state = RequestState::Sending;

        Some(PendingRequest {
            seq: self.next_seq,
            request: ChatRequest { message: text },
        })
    }

    /// Records the outcome of `pending` and returns to `Idle`.
    ///
    /// A ticket that does not match the in-flight request is ignored.
    pub fn settle(
        &mut self,
        pending: PendingRequest,
        outcome: Result<ChatResponse, ChatError>,
    ) -> SubmitOutcome {
        if self.in_flight != Some(pending.seq()) {
            warn!(seq = pending.seq(), "Ignoring result for a request that is not in flight");
            return SubmitOutcome::Rejected;
        }

        let result = outcome.and_then(|resp| resp.answer.ok_or(ChatError::MissingAnswer));
        let settled = match result {
            Ok(answer) => {
                let message = Message::bot(answer);
                self.store.append(message.clone());
                SubmitOutcome::Answered(message)
            }
            Err(error) => {
                warn!("Chat request failed: {error}");
                let message = Message::bot(error.user_facing());
                self.store.append(message.clone());
                SubmitOutcome::Failed { error, message }
            }
        };

        self.state = RequestState::Settled;
        self.in_flight = None;
        self.state = RequestState::Idle;
        settled
    }
}

impl<T: ChatTransport> ChatController<T> {
    /// Runs one full cycle: guard, network call, settle.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(pending) = self.begin_submit() else {
            return SubmitOutcome::Rejected;
        };
        let outcome = self.transport.send(self.config.endpoint(), pending.request()).await;
        self.settle(pending, outcome)
    }
}
