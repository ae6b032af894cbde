mod api;
mod components;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatInterface;
use components::landing::LandingPage;
use state::{AppState, Screen};

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide();

    view! {
        <div id="app-wrapper">
            <Show
                when=move || state.screen() == Screen::Chat
                fallback=|| view! { <LandingPage /> }
            >
                <ChatInterface />
            </Show>
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
