//! Dictionary lookup trait.

use async_trait::async_trait;
use wordforge_error::WordforgeResult;

/// A word-definition provider.
///
/// Responses are provider-defined JSON documents passed through untouched;
/// the backend does not reshape them. This seam carries exactly what the
/// router relays; richer provider endpoints stay on the concrete clients.
#[async_trait]
pub trait DictionaryLookup: Send + Sync {
    /// Definitions document for a word.
    async fn definitions(&self, word: &str) -> WordforgeResult<serde_json::Value>;

    /// Name of the backing provider, for logging.
    fn provider_name(&self) -> &'static str;
}
