use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use mosdac_chat::{
    ChatController, ClientConfig, ConversationStore, HttpTransport, Message, Sender, StoreEvent,
};

const BOT_NAME: &str = "MOSDAC AI";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mosdac_chat=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Configuration ─────────────────────────────────────────────────────────
    let config = ClientConfig::from_env().context("Failed to load chat endpoint configuration")?;
    info!("Chat endpoint: {}", config.endpoint());

    // ── Rendering adapter ─────────────────────────────────────────────────────
    let mut store = ConversationStore::new();
    store.subscribe(|event, messages| match event {
        StoreEvent::Appended { index } => {
            if let Some(message) = messages.get(index) {
                println!("{}", render_line(message));
            }
        }
        StoreEvent::Reset => println!("── New conversation ──"),
    });

    let mut controller = ChatController::with_store(config, HttpTransport::new(), store);

    println!("{BOT_NAME}: How can I help you today? (/new to start over, /quit to exit)");

    // ── Input loop ────────────────────────────────────────────────────────────
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "/quit" => break,
            "/new" => controller.reset(),
            _ => {
                controller.set_draft(line);
                controller.submit().await;
            }
        }
    }

    info!("Session ended");
    Ok(())
}

fn render_line(message: &Message) -> String {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Bot => BOT_NAME,
    };
    match &message.time {
        Some(time) => format!("[{time}] {who}: {}", message.text),
        None => format!("{who}: {}", message.text),
    }
}
