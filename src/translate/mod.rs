pub mod marian;

use async_trait::async_trait;

use crate::error::AppError;

pub use marian::MarianTranslator;

/// Text-to-text translation behind a pretrained model.
///
/// The translation direction is fixed by whatever model the implementation
/// loads; callers cannot select it per request.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, AppError>;
}
