//! Next-question selection
//!
//! Fields are asked about in the fixed order business, goal, budget,
//! timeline, name, phone. Once all six are captured there is nothing left to
//! ask.

use lead_agent_config::ReplyTemplates;
use lead_agent_core::{LeadContext, LeadField};

/// First field still missing, in question order
pub fn next_missing_field(context: &LeadContext) -> Option<LeadField> {
    context.first_missing()
}

/// Prompt for the first missing field, or `None` when the lead is complete
pub fn next_question<'a>(context: &LeadContext, templates: &'a ReplyTemplates) -> Option<&'a str> {
    next_missing_field(context).map(|field| templates.question(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lead_agent_core::{Goal, Timeline};

    #[test]
    fn test_fresh_lead_asks_for_business() {
        let templates = ReplyTemplates::default();
        assert_eq!(
            next_question(&LeadContext::new(), &templates),
            Some("Aapka business ya brand kis industry mein kaam karta hai?")
        );
    }

    #[test]
    fn test_follows_fixed_order() {
        let templates = ReplyTemplates::default();
        let mut context = LeadContext {
            business: Some("Ecommerce".to_string()),
            timeline: Some(Timeline::Asap),
            ..Default::default()
        };
        assert_eq!(next_missing_field(&context), Some(LeadField::Goal));
        assert_eq!(
            next_question(&context, &templates),
            Some("Primary objective kya hai? Leads, sales ya sirf awareness?")
        );

        context.goal = Some(Goal::AppInstalls);
        context.budget = Some("1 lakh".to_string());
        // Timeline already known, so the name comes next
        assert_eq!(
            next_question(&context, &templates),
            Some("Aapka naam kya likhu?")
        );
    }

    #[test]
    fn test_complete_lead_has_no_question() {
        let templates = ReplyTemplates::default();
        let context = LeadContext {
            business: Some("Education".to_string()),
            goal: Some(Goal::LeadGeneration),
            budget: Some("75k".to_string()),
            timeline: Some(Timeline::ThisMonth),
            name: Some("Meera".to_string()),
            phone: Some("9123456780".to_string()),
            ..Default::default()
        };
        assert_eq!(next_missing_field(&context), None);
        assert_eq!(next_question(&context, &templates), None);
    }
}
