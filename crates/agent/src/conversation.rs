//! Conversation Management
//!
//! `LeadSession` owns the lead state for one conversation and applies user
//! turns to it synchronously, one at a time. Each turn replaces the whole
//! context in a single assignment, so a partially merged lead is never
//! observable.

use std::sync::Arc;

use lead_agent_config::ReplyTemplates;
use lead_agent_core::{LeadContext, LeadSnapshot};

use crate::dst::{DialogueStateTracker, StateChange, TurnOutcome};
use crate::telemetry;

/// Synchronous lead session
#[derive(Debug, Clone, Default)]
pub struct LeadSession {
    tracker: DialogueStateTracker,
    context: LeadContext,
    history: Vec<StateChange>,
    turns: usize,
}

impl LeadSession {
    /// New session with the default reply templates
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: Arc<ReplyTemplates>) -> Self {
        Self::with_tracker(DialogueStateTracker::new(templates))
    }

    pub fn with_tracker(tracker: DialogueStateTracker) -> Self {
        Self {
            tracker,
            context: LeadContext::new(),
            history: Vec::new(),
            turns: 0,
        }
    }

    /// Apply one user utterance.
    ///
    /// Text that is empty after trimming is ignored: no state change and no
    /// reply, so `None` is returned.
    pub fn submit_utterance(&mut self, text: &str) -> Option<TurnOutcome> {
        let text = text.trim();
        if text.is_empty() {
            tracing::trace!("Ignoring empty utterance");
            return None;
        }

        let outcome = self.tracker.apply(&self.context, text);

        self.history
            .extend(StateChange::from_update(&outcome.update, self.turns));
        self.turns += 1;
        self.context = outcome.context.clone();

        telemetry::record_turn(&outcome.update);
        if outcome.became_hot() {
            telemetry::record_handover();
            tracing::info!(
                turn = self.turns,
                complete = self.context.is_complete(),
                "Lead is hot, handing over to an expert"
            );
        }

        Some(outcome)
    }

    /// Ordered (label, value) view of the lead
    pub fn lead_snapshot(&self) -> LeadSnapshot {
        self.context.snapshot()
    }

    pub fn context(&self) -> &LeadContext {
        &self.context
    }

    /// Every field captured so far, in capture order
    pub fn history(&self) -> &[StateChange] {
        &self.history
    }

    /// Number of non-empty turns applied
    pub fn turn_count(&self) -> usize {
        self.turns
    }

    pub fn tracker(&self) -> &DialogueStateTracker {
        &self.tracker
    }
}
