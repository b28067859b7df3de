//! Outcome type for interpreting raw completions.
//!
//! One polymorphic outcome replaces per-route error juggling: a completion
//! either satisfies its expected shape ([`Extraction::Success`]) or is kept
//! verbatim inside a [`Fallback`] so the caller can still see what the model
//! actually said. Transport failures are *not* represented here; those are
//! errors in `wordforge_error`.

use serde::Serialize;

/// Why a completion could not be interpreted as its expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FallbackReason {
    /// The text was not valid JSON of the expected shape
    Unparseable,
}

/// A locally-recovered degraded result.
///
/// Always preserves the original completion text unmodified. For shapes with
/// a degraded-service contract (currently only the definition shape) a
/// best-effort payload is synthesized as well, so the caller still gets
/// human-readable text.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Fallback<T> {
    /// Why the completion was rejected
    reason: FallbackReason,
    /// The completion text, verbatim
    raw_text: String,
    /// Best-effort payload, where the shape defines one
    degraded: Option<T>,
}

impl<T> Fallback<T> {
    /// A fallback carrying only the raw completion text.
    pub fn unparseable(raw_text: impl Into<String>) -> Self {
        Self {
            reason: FallbackReason::Unparseable,
            raw_text: raw_text.into(),
            degraded: None,
        }
    }

    /// A fallback that also carries a best-effort payload.
    pub fn unparseable_with(raw_text: impl Into<String>, degraded: T) -> Self {
        Self {
            reason: FallbackReason::Unparseable,
            raw_text: raw_text.into(),
            degraded: Some(degraded),
        }
    }

    /// Consumes the fallback, yielding the best-effort payload if one was
    /// synthesized.
    pub fn into_degraded(self) -> Option<T> {
        self.degraded
    }
}

/// Outcome of interpreting a completion as a typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<T> {
    /// The completion satisfied the expected shape
    Success(T),
    /// The completion was recovered locally instead
    Fallback(Fallback<T>),
}

impl<T> Extraction<T> {
    /// True when the expected shape was recovered.
    pub fn is_success(&self) -> bool {
        matches!(self, Extraction::Success(_))
    }

    /// The payload, when extraction succeeded.
    pub fn success(self) -> Option<T> {
        match self {
            Extraction::Success(payload) => Some(payload),
            Extraction::Fallback(_) => None,
        }
    }

    /// The fallback, when extraction did not succeed.
    pub fn fallback(self) -> Option<Fallback<T>> {
        match self {
            Extraction::Success(_) => None,
            Extraction::Fallback(fallback) => Some(fallback),
        }
    }
}
