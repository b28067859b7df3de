//! Extraction orchestration.

use crate::{parse, prompt};
use tracing::{debug, instrument, warn};
use wordforge_core::{Definition, Extraction, Quiz, Shape, VocabList};
use wordforge_error::WordforgeResult;
use wordforge_interface::TextGenerator;

/// Turns free-text completions into typed payloads.
///
/// Each operation builds its intent's prompt, dispatches exactly once
/// through the generator, and interprets the returned text. There is no
/// retry and no state carried between invocations; the only suspension
/// point is the outbound call itself.
///
/// A dispatch failure (network, non-2xx status, broken envelope) propagates
/// as an error. Only a *delivered* completion that fails its shape becomes
/// an [`Extraction::Fallback`].
pub struct Extractor<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> Extractor<G> {
    /// Create an extractor over the given generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Request a vocabulary list of `count` words.
    #[instrument(skip(self))]
    pub async fn vocab_list(&self, count: usize) -> WordforgeResult<Extraction<VocabList>> {
        let request = prompt::vocab_list(count);
        let response = self.generator.generate(&request).await?;

        let outcome = parse::vocab_list(response.text());
        self.note_outcome(Shape::VocabList, &outcome, response.text());
        Ok(outcome)
    }

    /// Request a definition of `word`.
    #[instrument(skip(self))]
    pub async fn definition(&self, word: &str) -> WordforgeResult<Extraction<Definition>> {
        let request = prompt::definition(word);
        let response = self.generator.generate(&request).await?;

        let outcome = parse::definition(word, response.text());
        self.note_outcome(Shape::Definition, &outcome, response.text());
        Ok(outcome)
    }

    /// Request a multiple-choice quiz question on `word`.
    #[instrument(skip(self))]
    pub async fn quiz(&self, word: &str) -> WordforgeResult<Extraction<Quiz>> {
        let request = prompt::quiz(word);
        let response = self.generator.generate(&request).await?;

        let outcome = parse::quiz(response.text());
        self.note_outcome(Shape::Quiz, &outcome, response.text());
        Ok(outcome)
    }

    /// Get a reference to the underlying generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    fn note_outcome<T>(&self, shape: Shape, outcome: &Extraction<T>, raw: &str) {
        if outcome.is_success() {
            debug!(
                shape = %shape,
                provider = self.generator.provider_name(),
                "Completion satisfied its shape"
            );
        } else {
            warn!(
                shape = %shape,
                provider = self.generator.provider_name(),
                raw_length = raw.len(),
                "Completion failed shape validation, falling back"
            );
        }
    }
}
