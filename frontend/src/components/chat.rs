use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use mosdac_chat::{Message, Sender};

use crate::state::AppState;

/// Chat view: header, transcript and input.
#[component]
pub fn ChatInterface() -> impl IntoView {
    let state = expect_context::<AppState>();
    let end_ref = NodeRef::<html::Div>::new();

    // Keep the latest message (or the typing indicator) in view
    Effect::new(move |_| {
        state.messages.track();
        state.is_sending.track();
        if let Some(end) = end_ref.get() {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });

    view! {
        <section id="chat-interface">
            <header class="chat-header">
                <div class="chat-header-title">
                    <span>"MOSDAC AI"</span>
                </div>
                <button id="new-chat-btn" on:click=move |_| state.reset_chat()>
                    "New Chat"
                </button>
            </header>

            <div id="messages-container">
                {move || {
                    (state.messages.get().is_empty() && !state.is_sending.get())
                        .then(|| view! { <WelcomeView /> })
                }}
                {move || {
                    state
                        .messages
                        .get()
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message /> })
                        .collect_view()
                }}
                {move || state.is_sending.get().then(|| view! { <TypingIndicator /> })}
                <div node_ref=end_ref />
            </div>

            <ChatInput />
        </section>
    }
}

/// A single transcript entry, rendered verbatim.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = format!("message {}-message", message.sender);
    let avatar = match message.sender {
        Sender::User => "You",
        Sender::Bot => "AI",
    };

    view! {
        <div class=css_class>
            <div class="message-avatar">{avatar}</div>
            <div class="message-content">
                <div class="message-text">{message.text}</div>
                {message.time.map(|time| view! { <div class="message-time">{time}</div> })}
            </div>
        </div>
    }
}

#[component]
fn WelcomeView() -> impl IntoView {
    view! {
        <div class="chat-welcome-view">
            <h2>"How can I help you today?"</h2>
            <p>"Ask me anything about MOSDAC services and data."</p>
        </div>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message bot-message">
            <div class="message-avatar">"AI"</div>
            <div class="message-content">
                <div class="typing-indicator">
                    <div class="typing-dot"></div>
                    <div class="typing-dot"></div>
                    <div class="typing-dot"></div>
                </div>
            </div>
        </div>
    }
}

/// Textarea and send button. Enter sends, Shift+Enter inserts a newline.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();

    let is_sending = move || state.is_sending.get();

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            state.send_message();
        }
    };

    view! {
        <div class="chat-input-area">
            <div class="chat-input-wrapper">
                <textarea
                    id="chat-input"
                    rows="1"
                    placeholder="Ask about satellite data..."
                    prop:value=move || state.draft.get()
                    on:input=move |ev| state.draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=is_sending
                />
                <button
                    id="send-btn"
                    on:click=move |_| state.send_message()
                    disabled=move || is_sending() || state.draft.get().trim().is_empty()
                >
                    {move || if is_sending() { "Sending…" } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
