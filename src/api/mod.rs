pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TranslateAudioRequest {
    pub text: String,
    /// Short code ("hi", "fr", "es", ...); selects the synthesis voice.
    pub target_lang: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateAudioResponse {
    pub translated_text: String,
    pub audio_url: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: String,
    pub voice: String,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
    pub default: String,
}
