//! The kit consultant chat widget, minus the widget.
//!
//! [`ChatSession`] owns the transcript and the typing indicator. Replies
//! come from any [`TextGenerator`]; [`GeminiClient`] is the production one.
//! Nothing here reads or writes shopping state.

pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod session;

pub use config::ConsultantConfig;
pub use error::ConsultantError;
pub use gemini::GeminiClient;
pub use generator::{GenerationRequest, TextGenerator};
pub use session::{ChatMessage, ChatSession, PendingTurn, Role};
