//! Prompt construction for each extraction intent.
//!
//! Every prompt embeds an explicit JSON-format instruction with a literal
//! example, because shape parsing downstream is strict: the model is told
//! exactly what to emit, and anything else becomes a fallback.

use wordforge_core::{GenerateRequest, Message};

/// Sampling temperature for vocabulary list generation. Higher than the
/// other intents so repeated requests yield varied lists.
pub const VOCAB_TEMPERATURE: f32 = 0.8;
/// Completion cap for vocabulary list generation.
pub const VOCAB_MAX_TOKENS: u32 = 256;

/// Sampling temperature for definition generation.
pub const DEFINITION_TEMPERATURE: f32 = 0.3;
/// Completion cap for definition generation.
pub const DEFINITION_MAX_TOKENS: u32 = 200;

/// Sampling temperature for quiz generation.
pub const QUIZ_TEMPERATURE: f32 = 0.3;
/// Completion cap for quiz generation.
pub const QUIZ_MAX_TOKENS: u32 = 300;

/// Prompt for a JSON array of `count` vocabulary words.
pub fn vocab_list(count: usize) -> GenerateRequest {
    let user = format!(
        r#"Generate {count} SAT vocabulary words suitable for study practice.

Format your response as a JSON array of strings like this:

["abate", "acrimony", "benevolent"]

Respond with the JSON array only, no commentary."#
    );

    GenerateRequest::builder()
        .messages(vec![
            Message::system("You curate SAT vocabulary study lists."),
            Message::user(user),
        ])
        .temperature(Some(VOCAB_TEMPERATURE))
        .max_tokens(Some(VOCAB_MAX_TOKENS))
        .build()
        .expect("Valid GenerateRequest")
}

/// Prompt for a JSON definition object for `word`.
pub fn definition(word: &str) -> GenerateRequest {
    let user = format!(
        r#"Write a short, learner-friendly definition of the SAT word "{word}".

Format your response as JSON like this:

{{
  "word": "abate",
  "definition": "To become less intense or widespread."
}}

Respond with the JSON object only, no commentary."#
    );

    GenerateRequest::builder()
        .messages(vec![
            Message::system("You write concise dictionary definitions."),
            Message::user(user),
        ])
        .temperature(Some(DEFINITION_TEMPERATURE))
        .max_tokens(Some(DEFINITION_MAX_TOKENS))
        .build()
        .expect("Valid GenerateRequest")
}

/// Prompt for a JSON multiple-choice question on `word`.
pub fn quiz(word: &str) -> GenerateRequest {
    let user = format!(
        r#"Generate a multiple-choice question for the SAT word "{word}".
Include:
- a question sentence,
- four answer options labeled A, B, C, D,
- exactly one correct answer,
- specify the correct answer letter.

Format your response as JSON like this:

{{
  "question": "What is the best definition of 'abate'?",
  "options": {{
    "A": "To increase in intensity",
    "B": "To become less intense",
    "C": "To confuse or perplex",
    "D": "To support or encourage"
  }},
  "correctAnswer": "B"
}}"#
    );

    GenerateRequest::builder()
        .messages(vec![
            Message::system("You create SAT vocabulary quiz questions."),
            Message::user(user),
        ])
        .temperature(Some(QUIZ_TEMPERATURE))
        .max_tokens(Some(QUIZ_MAX_TOKENS))
        .build()
        .expect("Valid GenerateRequest")
}
