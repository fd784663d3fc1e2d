//! Reply composition
//!
//! Builds the assistant message for one turn from the updated lead, the
//! fields captured in that turn and the raw utterance. Paragraphs are joined
//! by a blank line:
//!
//! 1. a hot lead gets the handover message and nothing else
//! 2. one acknowledgement per newly captured field
//! 3. service suggestions as a bulleted list
//! 4. the next question, or a closing line once nothing is missing

use std::sync::Arc;

use lead_agent_config::ReplyTemplates;
use lead_agent_core::{InterestLevel, LeadContext, LeadField, LeadUpdate};

use crate::dst::slots::next_question;
use crate::recommendation::recommend_services;

/// Separator between reply paragraphs
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Composes assistant replies from a shared template set
#[derive(Debug, Clone)]
pub struct ReplyComposer {
    templates: Arc<ReplyTemplates>,
}

impl Default for ReplyComposer {
    fn default() -> Self {
        Self::new(Arc::new(ReplyTemplates::default()))
    }
}

impl ReplyComposer {
    pub fn new(templates: Arc<ReplyTemplates>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &ReplyTemplates {
        &self.templates
    }

    /// Compose the reply for one turn
    pub fn compose(&self, context: &LeadContext, update: &LeadUpdate, text: &str) -> String {
        if context.is_hot() {
            return self.templates.handover.clone();
        }

        let mut parts: Vec<String> = update
            .fields()
            .into_iter()
            .filter_map(|field| self.acknowledgement(field, update))
            .collect();

        let suggestions = recommend_services(context, text);
        if !suggestions.is_empty() {
            parts.push(self.suggestion_block(&suggestions));
        }

        let closing = match next_question(context, &self.templates) {
            Some(question) => question,
            None if context.interest_level == InterestLevel::Warm => {
                self.templates.roadmap_offer.as_str()
            }
            None => self.templates.encouragement.as_str(),
        };
        parts.push(closing.to_string());

        parts.join(PARAGRAPH_SEPARATOR)
    }

    fn acknowledgement(&self, field: LeadField, update: &LeadUpdate) -> Option<String> {
        let value = update.value(field)?;
        // Goals read as a phrase inside the sentence
        let value = match field {
            LeadField::Goal => value.to_lowercase(),
            _ => value.to_string(),
        };
        Some(self.templates.acknowledge(field, &value))
    }

    fn suggestion_block(&self, suggestions: &[&str]) -> String {
        let mut block = self.templates.suggestions_intro.clone();
        for suggestion in suggestions {
            block.push('\n');
            block.push_str(&self.templates.bullet);
            block.push_str(suggestion);
        }
        block
    }
}
