//! Service recommendations
//!
//! Each rule fires on either a captured lead field or a keyword in the
//! latest utterance. Suggestions keep first-trigger order, carry no
//! duplicates, and are capped at [`MAX_SUGGESTIONS`].

use lead_agent_config::constants::limits::MAX_SUGGESTIONS;
use lead_agent_core::{Goal, LeadContext};
use lead_agent_text_processing::BusinessCategory;
use once_cell::sync::Lazy;
use regex::Regex;

/// Suggestions used when no rule fires
pub const FALLBACK_SUGGESTIONS: [&str; 2] = [
    "SEO content clusters + authority backlinks",
    "Full-funnel Meta + Google Ads mix",
];

/// Which captured field a rule reads
#[derive(Debug, Clone, Copy)]
enum Trigger {
    Goal(Goal),
    Business(BusinessCategory),
}

struct RecommendationRule {
    trigger: Trigger,
    keywords: Regex,
    suggestions: &'static [&'static str],
}

impl RecommendationRule {
    fn fires(&self, context: &LeadContext, text: &str) -> bool {
        let from_context = match self.trigger {
            Trigger::Goal(goal) => context.goal == Some(goal),
            Trigger::Business(category) => {
                context.business.as_deref() == Some(category.label())
            }
        };
        from_context || self.keywords.is_match(text)
    }
}

static RULES: Lazy<Vec<RecommendationRule>> = Lazy::new(|| vec![
    RecommendationRule {
        trigger: Trigger::Goal(Goal::LeadGeneration),
        keywords: Regex::new(r"(?i)lead|enquiry|conversion").unwrap(),
        suggestions: &[
            "Google Ads search + high-intent landing page optimisations",
            "Meta Ads retargeting funnel for warmer audiences",
        ],
    },
    RecommendationRule {
        trigger: Trigger::Goal(Goal::BrandAwareness),
        keywords: Regex::new(r"(?i)brand|awareness|visibility").unwrap(),
        suggestions: &[
            "Instagram Reels + influencer collab plan",
            "YouTube discovery ads for reach",
        ],
    },
    RecommendationRule {
        trigger: Trigger::Business(BusinessCategory::Ecommerce),
        keywords: Regex::new(r"(?i)e-?commerce|online store|shopping").unwrap(),
        suggestions: &["Performance Max campaigns with product feed optimisations"],
    },
    RecommendationRule {
        trigger: Trigger::Business(BusinessCategory::RealEstate),
        keywords: Regex::new(r"(?i)real estate|property|builder").unwrap(),
        suggestions: &["Lead nurturing automation with WhatsApp follow-ups"],
    },
    RecommendationRule {
        trigger: Trigger::Business(BusinessCategory::Healthcare),
        keywords: Regex::new(r"(?i)clinic|hospital|doctor|health|wellness").unwrap(),
        suggestions: &["Hyperlocal Google Ads + reputation management"],
    },
]);

/// Service suggestions for the updated lead and the latest utterance
pub fn recommend_services(context: &LeadContext, text: &str) -> Vec<&'static str> {
    let mut suggestions: Vec<&'static str> = Vec::new();

    for rule in RULES.iter().filter(|rule| rule.fires(context, text)) {
        for &suggestion in rule.suggestions {
            if !suggestions.contains(&suggestion) {
                suggestions.push(suggestion);
            }
        }
    }

    if suggestions.is_empty() {
        suggestions.extend(FALLBACK_SUGGESTIONS);
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_when_nothing_fires() {
        let suggestions = recommend_services(&LeadContext::new(), "hello");
        assert_eq!(suggestions, FALLBACK_SUGGESTIONS.to_vec());
    }

    #[test]
    fn test_goal_from_context() {
        let context = LeadContext {
            goal: Some(Goal::LeadGeneration),
            ..Default::default()
        };
        assert_eq!(
            recommend_services(&context, "ok"),
            vec![
                "Google Ads search + high-intent landing page optimisations",
                "Meta Ads retargeting funnel for warmer audiences",
            ]
        );
    }

    #[test]
    fn test_business_and_text_rules_combine() {
        let context = LeadContext {
            business: Some("Ecommerce".to_string()),
            ..Default::default()
        };
        let suggestions = recommend_services(&context, "Main ecommerce brand run karta hoon");
        assert_eq!(
            suggestions,
            vec![
                "Instagram Reels + influencer collab plan",
                "YouTube discovery ads for reach",
                "Performance Max campaigns with product feed optimisations",
            ]
        );
    }

    #[test]
    fn test_cap_keeps_first_triggered() {
        let context = LeadContext {
            goal: Some(Goal::LeadGeneration),
            business: Some("Healthcare".to_string()),
            ..Default::default()
        };
        let suggestions = recommend_services(&context, "brand visibility for my clinic");
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(
            suggestions[2],
            "Instagram Reels + influencer collab plan"
        );
    }

    #[test]
    fn test_real_estate_and_healthcare() {
        let context = LeadContext {
            business: Some("Real Estate".to_string()),
            ..Default::default()
        };
        assert_eq!(
            recommend_services(&context, "hi"),
            vec!["Lead nurturing automation with WhatsApp follow-ups"]
        );
        assert_eq!(
            recommend_services(&LeadContext::new(), "doctor ke liye"),
            vec!["Hyperlocal Google Ads + reputation management"]
        );
    }

    #[test]
    fn test_never_duplicates_or_exceeds_cap() {
        let texts = [
            "lead lead enquiry conversion",
            "brand awareness aur leads, online store, property, clinic",
            "",
            "shopping wellness",
        ];
        for text in texts {
            let suggestions = recommend_services(&LeadContext::new(), text);
            let unique: HashSet<_> = suggestions.iter().collect();
            assert!(suggestions.len() <= MAX_SUGGESTIONS);
            assert_eq!(unique.len(), suggestions.len());
        }
    }
}
