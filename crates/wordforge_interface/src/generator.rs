//! Text-generation driver trait.

use async_trait::async_trait;
use wordforge_core::{GenerateRequest, GenerateResponse};
use wordforge_error::WordforgeResult;

/// A chat-completion backend.
///
/// Implementations perform exactly one outbound call per `generate`
/// invocation. A returned error means the model could not be asked or the
/// provider envelope was broken -- never that the completion text failed to
/// match a shape (shape interpretation happens in `wordforge_extract`).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Request a single completion for the given prompt list.
    async fn generate(&self, request: &GenerateRequest) -> WordforgeResult<GenerateResponse>;

    /// Name of the backing provider, for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier in use.
    fn model_name(&self) -> &str;
}

// Lets shared router state (`Arc<dyn TextGenerator>`) feed generic
// consumers like the extractor.
#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    async fn generate(&self, request: &GenerateRequest) -> WordforgeResult<GenerateResponse> {
        (**self).generate(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
