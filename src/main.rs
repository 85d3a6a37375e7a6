use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod error;
mod lang;
mod store;
mod translate;
mod tts;

use api::routes::{create_router, AppState};
use store::AudioStore;
use translate::MarianTranslator;
use tts::GttsSynthesizer;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a number");
    let audio_dir = std::env::var("AUDIO_DIR").unwrap_or_else(|_| "output_audio".to_string());
    let translator_url = std::env::var("TRANSLATOR_URL")
        .unwrap_or_else(|_| translate::marian::DEFAULT_ENDPOINT.to_string());
    let api_token = std::env::var("HF_API_TOKEN").ok();
    let tts_url =
        std::env::var("TTS_URL").unwrap_or_else(|_| tts::gtts::DEFAULT_ENDPOINT.to_string());

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Translate TTS Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Audio directory: {}", audio_dir);
    tracing::info!("Translator endpoint: {}", translator_url);

    // Audio store directory is created once at startup
    let store = AudioStore::new(audio_dir.into());
    store.init().expect("Failed to create audio directory");

    // Create app state
    let state = Arc::new(AppState {
        translator: Arc::new(MarianTranslator::new(translator_url, api_token)),
        tts: Arc::new(GttsSynthesizer::new(tts_url)),
        store,
    });

    // Create router
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
