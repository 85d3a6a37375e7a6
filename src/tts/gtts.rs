use async_trait::async_trait;

use super::Synthesizer;
use crate::error::AppError;

/// Google Translate's TTS endpoint, the backend the gTTS library wraps.
pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Client for the Google Translate text-to-speech endpoint.
///
/// Sends the `client=tw-ob` request form and receives MP3 audio back.
pub struct GttsSynthesizer {
    client: reqwest::Client,
    endpoint: String,
}

impl GttsSynthesizer {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl Synthesizer for GttsSynthesizer {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", voice),
                ("client", "tw-ob"),
            ])
            .send()
            .await
            .map_err(|e| AppError::TtsError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::TtsError(format!(
                "TTS endpoint returned {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::TtsError(e.to_string()))?;

        if bytes.is_empty() {
            return Err(AppError::TtsError("TTS endpoint returned no audio".into()));
        }

        Ok(bytes.to_vec())
    }
}
