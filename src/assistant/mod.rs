//! Conversational assistant: a deterministic rule-based responder that is
//! always available, and an optional language-model backend tried first.

pub mod backend;
pub mod context;
pub mod rules;

use crate::errors::AppResult;
use crate::models::ai_config::ConnectionStatus;

pub use backend::OllamaBackend;
pub use context::AssistantContext;
pub use rules::RuleBasedResponder;

/// State change requested by a reply. Applied by the controller so that
/// responders stay pure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssistantAction {
    ClockIn,
    ClockOut,
    SetRate(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub action: Option<AssistantAction>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
        }
    }

    pub fn with_action(text: impl Into<String>, action: AssistantAction) -> Self {
        Self {
            text: text.into(),
            action: Some(action),
        }
    }
}

pub trait Responder {
    fn respond(&self, message: &str, ctx: &AssistantContext) -> Reply;
}

/// Remote text generator. Every failure is reported as
/// `AppError::BackendUnavailable`.
pub trait ChatBackend {
    /// Find a reachable endpoint.
    fn probe(&self) -> ConnectionStatus;

    fn generate(&self, status: ConnectionStatus, prompt: &str, system: &str) -> AppResult<String>;
}

/// Where the final answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Backend(ConnectionStatus),
    Rules,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub text: String,
    pub source: ReplySource,
    pub action: Option<AssistantAction>,
}
