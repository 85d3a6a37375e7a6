pub mod gtts;

use async_trait::async_trait;

use crate::error::AppError;

pub use gtts::GttsSynthesizer;

/// Text-to-speech producing MPEG audio bytes for a given voice code.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, AppError>;
}
