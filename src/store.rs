//! In-memory transcript for one session.

use tracing::debug;

use crate::models::Message;

/// Change notification delivered to store subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A message was added at `index`.
    Appended { index: usize },
    /// The transcript was cleared.
    Reset,
}

type Listener = Box<dyn Fn(StoreEvent, &[Message]) + Send + Sync>;

/// Ordered, append-only sequence of messages.
///
/// Individual messages are never edited or removed; only [`reset`](Self::reset)
/// clears the whole transcript.
#[derive(Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
    listeners: Vec<Listener>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rendering callback, invoked after every mutation with the
    /// full transcript.
    pub fn subscribe(&mut self, listener: impl Fn(StoreEvent, &[Message]) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn append(&mut self, message: Message) {
        let index = self.messages.len();
        debug!(index, sender = %message.sender, "Appending message");
        self.messages.push(message);
        self.notify(StoreEvent::Appended { index });
    }

    pub fn reset(&mut self) {
        self.messages.clear();
        self.notify(StoreEvent::Reset);
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn notify(&self, event: StoreEvent) {
        for listener in &self.listeners {
            listener(event, &self.messages);
        }
    }
}

impl std::fmt::Debug for ConversationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationStore")
            .field("messages", &self.messages)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::models::Sender;

    #[test]
    fn append_preserves_order() {
        let mut store = ConversationStore::new();
        store.append(Message::user("one"));
        store.append(Message::bot("two"));
        store.append(Message::user("three"));

        let texts: Vec<_> = store.all().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
        assert_eq!(store.last().map(|m| m.sender), Some(Sender::User));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut store = ConversationStore::new();
        store.append(Message::user("hi"));
        for _ in 0..3 {
            store.reset();
            assert!(store.is_empty());
            assert_eq!(store.len(), 0);
        }
    }

    #[test]
    fn subscribers_see_every_mutation() {
        let seen: Arc<Mutex<Vec<(StoreEvent, usize)>>> = Arc::default();
        let mut store = ConversationStore::new();
        let sink = seen.clone();
        store.subscribe(move |event, msgs| sink.lock().unwrap().push((event, msgs.len())));

        store.append(Message::user("a"));
        store.append(Message::bot("b"));
        store.reset();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (StoreEvent::Appended { index: 0 }, 1),
                (StoreEvent::Appended { index: 1 }, 2),
                (StoreEvent::Reset, 0),
            ]
        );
    }
}
