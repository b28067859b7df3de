//! Type conversions between Wordforge and OpenAI chat formats.

use crate::openai::{ChatMessage, ChatRequest, ChatResponse};
use wordforge_core::{GenerateRequest, GenerateResponse};
use wordforge_error::{ChatError, ChatErrorKind};

/// Converts a Wordforge GenerateRequest to OpenAI chat format.
pub fn to_chat_request(req: &GenerateRequest, model: &str) -> Result<ChatRequest, ChatError> {
    let messages = req
        .messages()
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().as_str().to_string(),
            content: msg.content().clone(),
        })
        .collect::<Vec<_>>();

    let mut builder = ChatRequest::builder();
    builder.model(model.to_string()).messages(messages);

    if let Some(max_tokens) = req.max_tokens() {
        builder.max_tokens(*max_tokens);
    }

    if let Some(temp) = req.temperature() {
        builder.temperature(*temp);
    }

    builder
        .build()
        .map_err(|e| ChatError::new(ChatErrorKind::Request(format!("Failed to build request: {}", e))))
}

/// Converts an OpenAI chat response to a Wordforge GenerateResponse.
///
/// The completion text is taken from the first choice. A response with no
/// choices is an error, never an empty completion.
pub fn from_chat_response(response: ChatResponse) -> Result<GenerateResponse, ChatError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ChatError::new(ChatErrorKind::EmptyCompletion))?;

    Ok(GenerateResponse::new(choice.message.content))
}
