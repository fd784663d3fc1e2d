//! Chat Session Handler
//!
//! Async boundary between a chat front end and the lead engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   submit    ┌─────────────┐  typing delay  ┌─────────────┐
//! │  Front end  │────────────▶│ ChatSession │───────────────▶│ LeadSession │
//! │  (stdin/UI) │◀────────────│ (transcript)│◀───────────────│  (reducer)  │
//! └─────────────┘   events    └─────────────┘   TurnOutcome  └─────────────┘
//! ```
//!
//! The user message lands in the transcript at once. The reply follows after
//! the configured typing delay. Turns hold the session lock across the delay
//! and the lock hands out access in request order, so overlapping
//! submissions are applied in the order they were made.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::sync::broadcast;

use lead_agent_config::constants::session::{
    DEFAULT_BRAND_NAME, DEFAULT_TYPING_DELAY_MS, EVENT_CHANNEL_CAPACITY,
};
use lead_agent_config::{ReplyTemplates, Settings};
use lead_agent_core::{LeadContext, LeadSnapshot, Message};

use crate::conversation::LeadSession;
use crate::dst::{DialogueStateTracker, TurnOutcome};
use crate::AgentError;

/// Chat session configuration
#[derive(Debug, Clone)]
pub struct ChatSessionConfig {
    /// Simulated typing delay before each reply
    pub typing_delay: Duration,
    /// Brand named in the greeting
    pub brand_name: String,
    /// Reply copy
    pub templates: Arc<ReplyTemplates>,
}

impl Default for ChatSessionConfig {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(DEFAULT_TYPING_DELAY_MS),
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            templates: Arc::new(ReplyTemplates::default()),
        }
    }
}

impl ChatSessionConfig {
    /// Build from validated application settings
    pub fn from_settings(settings: &Settings) -> Result<Self, AgentError> {
        settings.validate()?;
        Ok(Self {
            typing_delay: Duration::from_millis(settings.session.typing_delay_ms),
            brand_name: settings.session.brand_name.clone(),
            templates: Arc::new(settings.templates.clone()),
        })
    }

    /// Same configuration without the typing delay
    pub fn without_delay(mut self) -> Self {
        self.typing_delay = Duration::ZERO;
        self
    }
}

/// Chat session events
#[derive(Debug, Clone)]
pub enum ChatSessionEvent {
    /// Session opened; carries the greeting
    Started { session_id: String, greeting: Message },
    /// User message accepted
    UserMessage(Message),
    /// Assistant is "typing"
    Typing,
    /// Assistant reply emitted
    AssistantMessage(Message),
    /// Lead state after a turn
    LeadUpdated(LeadSnapshot),
    /// Lead turned hot
    HandedOver { session_id: String },
    /// Session ended
    Ended { reason: String },
}

/// Chat session for a single conversation
pub struct ChatSession {
    session_id: String,
    config: ChatSessionConfig,
    /// Turn lock; held across the typing delay
    lead: tokio::sync::Mutex<LeadSession>,
    /// Lead state as of the last completed turn
    published: RwLock<LeadContext>,
    transcript: Mutex<Vec<Message>>,
    event_tx: broadcast::Sender<ChatSessionEvent>,
    closed: AtomicBool,
}

impl ChatSession {
    /// Open a session. The greeting is the first transcript entry.
    pub fn new(session_id: impl Into<String>, config: ChatSessionConfig) -> Self {
        let session_id = session_id.into();
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let tracker = DialogueStateTracker::new(Arc::clone(&config.templates));
        let greeting = Message::assistant(config.templates.greeting_for(&config.brand_name));

        let session = Self {
            session_id: session_id.clone(),
            lead: tokio::sync::Mutex::new(LeadSession::with_tracker(tracker)),
            published: RwLock::new(LeadContext::new()),
            transcript: Mutex::new(vec![greeting.clone()]),
            event_tx,
            closed: AtomicBool::new(false),
            config,
        };

        tracing::debug!(session_id = %session_id, "Chat session started");
        session.emit(ChatSessionEvent::Started {
            session_id,
            greeting,
        });

        session
    }

    /// Submit a user utterance and wait for the reply.
    ///
    /// Returns `Ok(None)` for text that is empty after trimming; nothing is
    /// recorded for it.
    pub async fn submit(&self, text: &str) -> Result<Option<TurnOutcome>, AgentError> {
        self.ensure_open()?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let user_message = Message::user(text);
        self.transcript.lock().push(user_message.clone());
        self.emit(ChatSessionEvent::UserMessage(user_message));

        let mut lead = self.lead.lock().await;

        self.emit(ChatSessionEvent::Typing);
        if !self.config.typing_delay.is_zero() {
            tokio::time::sleep(self.config.typing_delay).await;
        }

        // Closed while this turn was waiting
        self.ensure_open()?;

        let Some(outcome) = lead.submit_utterance(text) else {
            return Ok(None);
        };

        *self.published.write() = outcome.context.clone();

        let reply = Message::assistant(outcome.reply.clone());
        self.transcript.lock().push(reply.clone());
        self.emit(ChatSessionEvent::AssistantMessage(reply));
        self.emit(ChatSessionEvent::LeadUpdated(outcome.context.snapshot()));

        if outcome.became_hot() {
            self.emit(ChatSessionEvent::HandedOver {
                session_id: self.session_id.clone(),
            });
        }

        Ok(Some(outcome))
    }

    /// Ordered (label, value) view of the lead as of the last completed turn
    pub fn lead_snapshot(&self) -> LeadSnapshot {
        self.published.read().snapshot()
    }

    /// Lead state as of the last completed turn
    pub fn lead(&self) -> LeadContext {
        self.published.read().clone()
    }

    /// Intro assistant message text
    pub fn greeting(&self) -> String {
        self.config.templates.greeting_for(&self.config.brand_name)
    }

    /// Canned replies a front end can offer
    pub fn quick_replies(&self) -> &[String] {
        &self.config.templates.quick_replies
    }

    /// Every message so far, greeting first
    pub fn transcript(&self) -> Vec<Message> {
        self.transcript.lock().clone()
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> broadcast::Receiver<ChatSessionEvent> {
        self.event_tx.subscribe()
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// End the session. Later submissions fail with `SessionClosed`.
    pub fn close(&self, reason: impl Into<String>) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        let reason = reason.into();
        tracing::debug!(session_id = %self.session_id, reason = %reason, "Chat session ended");
        self.emit(ChatSessionEvent::Ended { reason });
    }

    fn ensure_open(&self) -> Result<(), AgentError> {
        if self.is_closed() {
            Err(AgentError::SessionClosed)
        } else {
            Ok(())
        }
    }

    fn emit(&self, event: ChatSessionEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_is_first_message() {
        let session = ChatSession::new("greet", ChatSessionConfig::default());
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].text, session.greeting());
        assert!(session
            .greeting()
            .starts_with("Namaste! Main GrowthPulse ka marketing guide hoon."));
        assert_eq!(session.quick_replies().len(), 5);
    }

    #[test]
    fn test_brand_from_config() {
        let config = ChatSessionConfig {
            brand_name: "ReachRight".to_string(),
            ..Default::default()
        };
        let session = ChatSession::new("brand", config);
        assert!(session.greeting().starts_with("Namaste! Main ReachRight"));
    }

    #[test]
    fn test_config_from_settings() {
        let mut settings = Settings::default();
        settings.session.typing_delay_ms = 10;
        let config = ChatSessionConfig::from_settings(&settings).unwrap();
        assert_eq!(config.typing_delay, Duration::from_millis(10));

        settings.session.brand_name = String::new();
        assert!(matches!(
            ChatSessionConfig::from_settings(&settings),
            Err(AgentError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_submit_without_delay() {
        let session = ChatSession::new("fast", ChatSessionConfig::default().without_delay());
        let outcome = session
            .submit("main Rohan sharma hoon")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(outcome.context.name.as_deref(), Some("Rohan Sharma"));
        assert_eq!(session.lead().name.as_deref(), Some("Rohan Sharma"));
        assert_eq!(session.transcript().len(), 3);
    }

    #[tokio::test]
    async fn test_closed_session_rejects_turns() {
        let session = ChatSession::new("closed", ChatSessionConfig::default().without_delay());
        session.close("done");
        assert!(session.is_closed());
        assert!(matches!(
            session.submit("hello").await,
            Err(AgentError::SessionClosed)
        ));
    }
}
