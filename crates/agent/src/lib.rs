//! Lead Qualification Agent
//!
//! Features:
//! - Interest classification (cold / warm / hot) with hot handover
//! - Service recommendations from the lead and the latest utterance
//! - Next-question selection over the six lead fields
//! - Template-driven reply composition
//! - Dialogue state tracking as a pure per-turn reducer
//! - Synchronous (`LeadSession`) and async (`ChatSession`) session wrappers

pub mod chat_session;
pub mod conversation;
// Dialogue State Tracking (DST)
pub mod dst;
pub mod lead_scoring;
pub mod recommendation;
pub mod response;
pub mod telemetry;

pub use chat_session::{ChatSession, ChatSessionConfig, ChatSessionEvent};
pub use conversation::LeadSession;
pub use dst::{
    extract_update, next_missing_field, next_question, DialogueStateTracker, StateChange,
    TurnOutcome,
};
pub use lead_scoring::{classify_interest, detect_signal};
pub use recommendation::{recommend_services, FALLBACK_SUGGESTIONS};
pub use response::{ReplyComposer, PARAGRAPH_SEPARATOR};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session closed")]
    SessionClosed,
}

impl From<lead_agent_config::ConfigError> for AgentError {
    fn from(err: lead_agent_config::ConfigError) -> Self {
        AgentError::Config(err.to_string())
    }
}
