//! Core data types for the wordforge vocabulary backend.
//!
//! This crate provides the conversation types sent to chat-completion
//! providers, the typed payload shapes the frontend consumes, and the
//! extraction outcome that ties them together.

mod extraction;
mod message;
mod request;
mod role;
mod shape;

pub use extraction::{Extraction, Fallback, FallbackReason};
pub use message::{Message, MessageBuilder};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use shape::{
    AnswerKey, Definition, DefinitionBuilder, Quiz, QuizBuilder, QuizOptions,
    QuizOptionsBuilder, Shape, VocabList,
};
