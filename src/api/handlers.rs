use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{
    HealthResponse, LanguageInfo, LanguagesResponse, TranslateAudioRequest,
    TranslateAudioResponse,
};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::lang;

pub async fn translate_audio(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranslateAudioRequest>,
) -> Result<Json<TranslateAudioResponse>, AppError> {
    // Validate input
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".into()));
    }

    if request.text.len() > 10000 {
        return Err(AppError::BadRequest(
            "Text too long (max 10000 chars)".into(),
        ));
    }

    // Translation direction is fixed by the loaded model; target_lang only
    // selects the synthesis voice.
    let translated_text = state.translator.translate(&request.text).await?;

    let artifact = state.store.allocate();
    let voice = lang::voice_code(&request.target_lang);

    let audio = state.tts.synthesize(&translated_text, voice).await?;
    state.store.write(&artifact.path, &audio).await?;

    tracing::info!(
        "Generated {} ({} bytes, voice {})",
        artifact.file_name,
        audio.len(),
        voice
    );

    Ok(Json(TranslateAudioResponse {
        audio_url: artifact.url(),
        translated_text,
    }))
}

pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
) -> Result<Response, AppError> {
    let path = state
        .store
        .resolve(&file)
        .ok_or_else(|| AppError::FileNotFound(file.clone()))?;

    let bytes = match state.store.read(&path).await {
        Ok(bytes) => bytes,
        Err(AppError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::FileNotFound(file));
        }
        Err(e) => return Err(e),
    };

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "audio/mpeg")],
        bytes,
    )
        .into_response())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "translator".to_string(),
    })
}

pub async fn list_languages() -> Json<LanguagesResponse> {
    let languages = lang::supported()
        .into_iter()
        .map(|(code, voice)| LanguageInfo {
            code: code.to_string(),
            voice: voice.to_string(),
        })
        .collect();

    Json(LanguagesResponse {
        languages,
        default: lang::DEFAULT_VOICE.to_string(),
    })
}

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "Translation & TTS Service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/translate-audio": "POST - Translate text and generate audio",
            "/audio/{file}": "GET - Download audio file",
            "/languages": "GET - List supported voice languages",
            "/health": "GET - Health check"
        }
    }))
}
