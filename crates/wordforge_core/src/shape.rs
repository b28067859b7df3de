//! Typed payload shapes a completion may be asked to satisfy.
//!
//! Field presence is the validation contract: the quiz and definition
//! shapes derive `Deserialize` with no optional fields, so a completion
//! missing any documented field fails to parse and becomes a fallback.

use serde::{Deserialize, Serialize};

/// The structural contract expected from a completion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Shape {
    /// An ordered list of vocabulary words
    VocabList,
    /// A single word definition
    Definition,
    /// A four-option multiple-choice question
    Quiz,
}

/// An ordered, non-empty list of vocabulary words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VocabList(Vec<String>);

impl VocabList {
    /// Wraps a word list, rejecting the empty case.
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self(words))
        }
    }

    /// The words in order.
    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the constructor rejects the empty case.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the list, yielding the words.
    pub fn into_words(self) -> Vec<String> {
        self.0
    }
}

/// A word and its definition.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Definition {
    /// The word being defined
    word: String,
    /// Definition text
    definition: String,
}

impl Definition {
    /// Creates a builder for Definition.
    pub fn builder() -> DefinitionBuilder {
        DefinitionBuilder::default()
    }
}

/// Answer key for a multiple-choice question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

/// The four answer options of a quiz question.
///
/// All four keys are required; a completion missing any of them fails
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct QuizOptions {
    #[serde(rename = "A")]
    a: String,
    #[serde(rename = "B")]
    b: String,
    #[serde(rename = "C")]
    c: String,
    #[serde(rename = "D")]
    d: String,
}

impl QuizOptions {
    /// Creates a builder for QuizOptions.
    pub fn builder() -> QuizOptionsBuilder {
        QuizOptionsBuilder::default()
    }

    /// The option text for a given answer key.
    pub fn get(&self, key: AnswerKey) -> &str {
        match key {
            AnswerKey::A => &self.a,
            AnswerKey::B => &self.b,
            AnswerKey::C => &self.c,
            AnswerKey::D => &self.d,
        }
    }
}

/// A four-option multiple-choice quiz question.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Quiz {
    /// The question sentence
    question: String,
    /// The four answer options
    options: QuizOptions,
    /// Which option is correct
    #[serde(rename = "correctAnswer")]
    correct_answer: AnswerKey,
}

impl Quiz {
    /// Creates a builder for Quiz.
    pub fn builder() -> QuizBuilder {
        QuizBuilder::default()
    }

    /// The text of the correct option.
    pub fn answer_text(&self) -> &str {
        self.options.get(self.correct_answer)
    }
}
