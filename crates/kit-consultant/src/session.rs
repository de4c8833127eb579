//! Chat transcript and turn handling.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SYSTEM_INSTRUCTION;
use crate::error::ConsultantResult;
use crate::generator::{GenerationRequest, TextGenerator};

/// First bot message of every session.
pub const WELCOME_MESSAGE: &str = "Welcome to the Premium Lounge. I'm your AI Kit Specialist. \
Looking for a specific era, team, or player's kit?";

/// Shown when the model answers with no text.
pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm currently unable to process your request. Please try again later.";

/// Shown when the request fails.
pub const ERROR_REPLY_FALLBACK: &str =
    "Apologies, there's a technical foul with my connection. Please try again shortly.";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
        }
    }
}

/// A submitted question waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    request: GenerationRequest,
}

impl PendingTurn {
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }
}

/// One shopper's conversation with the consultant.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    typing: bool,
    system_instruction: String,
}

impl ChatSession {
    /// Start a conversation with the welcome message.
    pub fn new() -> Self {
        Self::with_system_instruction(SYSTEM_INSTRUCTION)
    }

    pub fn with_system_instruction(system_instruction: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::bot(WELCOME_MESSAGE)],
            typing: false,
            system_instruction: system_instruction.into(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a reply is pending.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Record the shopper's message and start waiting for a reply.
    ///
    /// Returns None, changing nothing, when the input is blank or a reply
    /// is already pending. The text is sent as typed, not trimmed.
    pub fn submit(&mut self, input: &str) -> Option<PendingTurn> {
        if input.trim().is_empty() || self.typing {
            debug!(typing = self.typing, "chat input ignored");
            return None;
        }
        self.messages.push(ChatMessage::user(input));
        self.typing = true;
        Some(PendingTurn {
            request: GenerationRequest::new(self.system_instruction.clone(), input),
        })
    }

    /// Record the outcome of a pending turn and stop typing.
    ///
    /// Failures and empty answers become the fixed fallback replies.
    pub fn resolve(&mut self, _turn: PendingTurn, outcome: ConsultantResult<String>) -> &ChatMessage {
        let text = match outcome {
            Ok(text) if text.is_empty() => EMPTY_REPLY_FALLBACK.to_string(),
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "consultant request failed");
                ERROR_REPLY_FALLBACK.to_string()
            }
        };
        self.typing = false;
        self.messages.push(ChatMessage::bot(text));
        &self.messages[self.messages.len() - 1]
    }

    /// Submit, generate, and resolve in one step.
    ///
    /// Returns the bot reply, or None if the input was ignored.
    pub async fn send(
        &mut self,
        generator: &dyn TextGenerator,
        input: &str,
    ) -> Option<&ChatMessage> {
        let turn = self.submit(input)?;
        let outcome = generator.generate(turn.request()).await;
        Some(self.resolve(turn, outcome))
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
