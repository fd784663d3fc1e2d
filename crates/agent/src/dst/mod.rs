//! Dialogue State Tracking (DST) for lead conversations
//!
//! ## Architecture
//!
//! ```text
//! utterance ──▶ field extractors (empty fields only) ──┐
//!           └─▶ interest classifier ───────────────────┤
//!                                                      ▼
//!                                        LeadUpdate (this turn's diff)
//!                                                      │
//!                      LeadContext::merged ◀───────────┤
//!                                │                     │
//!                                ▼                     ▼
//!                       new LeadContext ───▶ ReplyComposer ──▶ reply
//! ```
//!
//! There is no explicit state enum: the `LeadContext` itself is the state.
//! `DialogueStateTracker::apply` is a pure reducer. It never mutates the
//! context it is given and returns the next context, the diff and the reply
//! together, so callers publish all three at once.

pub mod slots;

pub use slots::{next_missing_field, next_question};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lead_agent_config::ReplyTemplates;
use lead_agent_core::{InterestLevel, LeadContext, LeadField, LeadUpdate};
use lead_agent_text_processing::{
    extract_budget, extract_business, extract_goal, extract_name, extract_phone,
    extract_timeline,
};
use serde::{Deserialize, Serialize};

use crate::lead_scoring::classify_interest;
use crate::response::ReplyComposer;

/// Result of applying one utterance to a lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    /// Lead state after the turn
    pub context: LeadContext,
    /// Values captured in this turn, and the interest level if it changed
    pub update: LeadUpdate,
    /// Assistant reply text
    pub reply: String,
}

impl TurnOutcome {
    /// Fields captured in this turn, in question order
    pub fn captured_fields(&self) -> Vec<LeadField> {
        self.update.fields()
    }

    /// This turn moved the lead to hot
    pub fn became_hot(&self) -> bool {
        self.update.interest_level == Some(InterestLevel::Hot)
    }
}

/// Record of a field captured during the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Field that was captured
    pub field: LeadField,
    /// Captured value
    pub value: String,
    /// Turn index
    pub turn_index: usize,
}

impl StateChange {
    /// One record per field captured in `update`
    pub fn from_update(update: &LeadUpdate, turn_index: usize) -> Vec<StateChange> {
        let timestamp = Utc::now();
        LeadField::ALL
            .into_iter()
            .filter_map(|field| {
                update.value(field).map(|value| StateChange {
                    timestamp,
                    field,
                    value: value.to_string(),
                    turn_index,
                })
            })
            .collect()
    }
}

/// Run the extractors for every field that is still empty, plus the
/// interest classifier.
///
/// Filled fields are never re-extracted, so a later value can't replace the
/// first one. `interest_level` is only set when the level changes.
pub fn extract_update(context: &LeadContext, text: &str) -> LeadUpdate {
    let mut update = LeadUpdate::default();

    if !context.is_filled(LeadField::Business) {
        update.business = extract_business(text);
    }
    if !context.is_filled(LeadField::Goal) {
        update.goal = extract_goal(text);
    }
    if !context.is_filled(LeadField::Budget) {
        update.budget = extract_budget(text);
    }
    if !context.is_filled(LeadField::Timeline) {
        update.timeline = extract_timeline(text);
    }
    if !context.is_filled(LeadField::Name) {
        update.name = extract_name(text);
    }
    if !context.is_filled(LeadField::Phone) {
        update.phone = extract_phone(text);
    }

    let level = classify_interest(text, context.interest_level);
    if level != context.interest_level {
        update.interest_level = Some(level);
    }

    update
}

/// Dialogue State Tracker
///
/// Stateless turn reducer: `(LeadContext, utterance) -> TurnOutcome`.
#[derive(Debug, Clone, Default)]
pub struct DialogueStateTracker {
    composer: ReplyComposer,
}

impl DialogueStateTracker {
    pub fn new(templates: Arc<ReplyTemplates>) -> Self {
        Self {
            composer: ReplyComposer::new(templates),
        }
    }

    pub fn templates(&self) -> &ReplyTemplates {
        self.composer.templates()
    }

    /// Apply one utterance to `context` and compose the reply
    pub fn apply(&self, context: &LeadContext, text: &str) -> TurnOutcome {
        let update = extract_update(context, text);
        let next = context.merged(&update);
        let reply = self.composer.compose(&next, &update, text);

        tracing::debug!(
            captured = ?update.fields(),
            interest = %next.interest_level,
            missing = next.missing_fields().len(),
            "Turn applied"
        );

        TurnOutcome {
            context: next,
            update,
            reply,
        }
    }
}
