use leptos::prelude::*;
use leptos::task::spawn_local;
use mosdac_chat::{ChatController, ChatTransport, ClientConfig, ConversationStore, Message, SubmitOutcome};

use crate::api::GlooTransport;

/// Which top-level view is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Chat,
}

/// Shared application state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Landing page dismissed, chat view shown.
    pub chat_active: RwSignal<bool>,
    /// Mirror of the controller's transcript, kept current by a store subscription.
    pub messages: ReadSignal<Vec<Message>>,
    pub is_sending: RwSignal<bool>,
    pub draft: RwSignal<String>,
    controller: StoredValue<ChatController<GlooTransport>>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let config = ClientConfig::from_override(option_env!("MOSDAC_API_URL")).unwrap_or_else(|e| {
            log::error!("{e}; using the default endpoint");
            ClientConfig::default()
        });
        log::info!("API endpoint: {}", config.endpoint());

        let (messages, set_messages) = signal(Vec::<Message>::new());
        let mut store = ConversationStore::new();
        store.subscribe(move |_, transcript| set_messages.set(transcript.to_vec()));

        let state = Self {
            chat_active: RwSignal::new(false),
            messages,
            is_sending: RwSignal::new(false),
            draft: RwSignal::new(String::new()),
            controller: StoredValue::new(ChatController::with_store(config, GlooTransport, store)),
        };

        provide_context(state);
        state
    }

    pub fn screen(&self) -> Screen {
        if self.chat_active.get() { Screen::Chat } else { Screen::Landing }
    }

    pub fn open_chat(&self) {
        self.chat_active.set(true);
    }

    /// Start a new conversation.
    pub fn reset_chat(&self) {
        self.controller.update_value(|ctl| ctl.reset());
    }

    /// Submit the current draft. Blank drafts and submissions made while a
    /// request is outstanding are ignored.
    pub fn send_message(&self) {
        let draft = self.draft.get_untracked();
        let accepted = self.controller.try_update_value(|ctl| {
            ctl.set_draft(draft);
            ctl.begin_submit()
                .map(|pending| (pending, ctl.endpoint().to_string()))
        });
        let Some(Some((pending, endpoint))) = accepted else {
            return;
        };

        log::debug!("Submitting message: {}", pending.text());
        self.draft.set(String::new());
        self.is_sending.set(true);

        let state = *self;
        spawn_local(async move {
            let outcome = GlooTransport.send(&endpoint, pending.request()).await;
            let settled = state
                .controller
                .try_update_value(|ctl| ctl.settle(pending, outcome));
            if let Some(SubmitOutcome::Failed { error, .. }) = settled {
                log::error!("Chat request failed: {error}");
            }
            state.is_sending.set(false);
        });
    }
}
