use leptos::prelude::*;

use crate::state::AppState;

/// Landing hero with the entry point into the chat view.
#[component]
pub fn LandingPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <main id="landing-page">
            <div class="landing-content">
                <div class="landing-logo">
                    <h1 class="landing-title animated-gradient-text">"MOSDAC AI"</h1>
                </div>
                <p class="landing-subtitle">
                    "Your intelligent assistant for satellite data, geospatial research, and mission analysis. "
                    "Ask questions in natural language and get insights instantly."
                </p>
                <button id="try-chatbot-btn" on:click=move |_| state.open_chat()>
                    <span>"Try MOSDAC AI"</span>
                </button>
            </div>
        </main>
    }
}
