//! Message types for the role-tagged prompt list.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single message in a generation request.
///
/// # Examples
///
/// ```
/// use wordforge_core::{Message, Role};
///
/// let message = Message::user("Define 'abate'.");
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Define 'abate'.");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The text content of the message
    content: String,
}

impl Message {
    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        MessageBuilder::default()
            .role(Role::System)
            .content(content)
            .build()
            .expect("Valid Message")
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        MessageBuilder::default()
            .role(Role::User)
            .content(content)
            .build()
            .expect("Valid Message")
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        MessageBuilder::default()
            .role(Role::Assistant)
            .content(content)
            .build()
            .expect("Valid Message")
    }
}
