use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::store::AudioStore;
use crate::translate::Translator;
use crate::tts::Synthesizer;

pub struct AppState {
    pub translator: Arc<dyn Translator>,
    pub tts: Arc<dyn Synthesizer>,
    pub store: AudioStore,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::root))
        .route("/translate-audio", post(handlers::translate_audio))
        .route("/audio/:file", get(handlers::get_audio))
        .route("/health", get(handlers::health))
        .route("/languages", get(handlers::list_languages))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
