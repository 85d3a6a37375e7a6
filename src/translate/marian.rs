use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Translator;
use crate::error::AppError;

/// Default hosted inference endpoint for the English -> Hindi Marian model.
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/Helsinki-NLP/opus-mt-en-hi";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct InferenceOutput {
    translation_text: String,
}

/// Client for a hosted Marian seq2seq translation model.
pub struct MarianTranslator {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl MarianTranslator {
    pub fn new(endpoint: String, api_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_token,
        }
    }
}

#[async_trait]
impl Translator for MarianTranslator {
    async fn translate(&self, text: &str) -> Result<String, AppError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { inputs: text });

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::TranslationError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::TranslationError(format!(
                "model endpoint returned {}: {}",
                status, body
            )));
        }

        // The inference API wraps seq2seq output in a one-element array.
        let outputs: Vec<InferenceOutput> = response
            .json()
            .await
            .map_err(|e| AppError::TranslationError(e.to_string()))?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.translation_text)
            .ok_or_else(|| AppError::TranslationError("model returned no output".to_string()))
    }
}
