//! Lead Field Extraction for Conversations
//!
//! Rule-based extraction of the six lead qualification fields from a single
//! user utterance. Supports Hinglish and English.
//!
//! Every extractor is a pure function of the utterance text: it never sees
//! the lead context and never fails. Text it cannot read yields `None`.
//!
//! ## Static Regex Patterns
//!
//! Patterns are compiled once on first use with `once_cell::sync::Lazy`.
//! Keyword classifiers are ordered lists; the first matching entry wins.

use lead_agent_core::{Goal, Timeline};
use once_cell::sync::Lazy;
use regex::{Match, Regex};
use std::fmt;

use crate::hinglish::{normalize_person_name, MAX_NAME_TOKENS};

// =============================================================================
// STATIC REGEX PATTERNS - Compiled once on first use
// =============================================================================

/// Fixed industry categories recognised from keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessCategory {
    Ecommerce,
    RealEstate,
    Healthcare,
    Education,
    FoodAndBeverage,
}

impl BusinessCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BusinessCategory::Ecommerce => "Ecommerce",
            BusinessCategory::RealEstate => "Real Estate",
            BusinessCategory::Healthcare => "Healthcare",
            BusinessCategory::Education => "Education",
            BusinessCategory::FoodAndBeverage => "F&B",
        }
    }
}

impl fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// "business hai ...", "company is ...", "brand: ..." (connector required)
static BUSINESS_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:business|company|brand|agency|startup|store)\s*(?:(?:hai|is)\b|:)\s*([a-zA-Z\s&]{3,})",
    )
    .unwrap()
});

// Business categories (priority order)
static BUSINESS_CATEGORIES: Lazy<Vec<(Regex, BusinessCategory)>> = Lazy::new(|| vec![
    (Regex::new(r"(?i)\be-?commerce|\bonline\s+store|\bd2c\b").unwrap(), BusinessCategory::Ecommerce),
    (Regex::new(r"(?i)\breal\s+estate|\bpropert(?:y|ies)|\bbuilders?\b").unwrap(), BusinessCategory::RealEstate),
    (Regex::new(r"(?i)\b(?:clinic|hospital|doctor|health|wellness)").unwrap(), BusinessCategory::Healthcare),
    (Regex::new(r"(?i)\b(?:education|coaching|edtech|institute)").unwrap(), BusinessCategory::Education),
    (Regex::new(r"(?i)\b(?:restaurant|cafe|food\s+brand)").unwrap(), BusinessCategory::FoodAndBeverage),
]);

// Goal patterns (priority order). A bare "brand" names the business, not the goal.
static GOAL_PATTERNS: Lazy<Vec<(Regex, Goal)>> = Lazy::new(|| vec![
    (Regex::new(r"(?i)\b(?:lead|sales|enquir|signup|sign\s+up|conversion)").unwrap(), Goal::LeadGeneration),
    (Regex::new(r"(?i)\b(?:brand\s+awareness|brand\s+building|branding|awareness|visibility|reach)").unwrap(), Goal::BrandAwareness),
    (Regex::new(r"(?i)\b(?:traffic|website|visits|sessions)").unwrap(), Goal::WebsiteTraffic),
    (Regex::new(r"(?i)\b(?:app\s+installs?|downloads|app\s+users)").unwrap(), Goal::AppInstalls),
    (Regex::new(r"(?i)\b(?:retention|repeat|loyalty)").unwrap(), Goal::RetentionLoyalty),
]);

// Timeline patterns (priority order). "3 months" is caught by the month rule first.
static TIMELINE_PATTERNS: Lazy<Vec<(Regex, Timeline)>> = Lazy::new(|| vec![
    (Regex::new(r"(?i)\b(?:week|haft|7\s*din)").unwrap(), Timeline::OneToTwoWeeks),
    (Regex::new(r"(?i)\b(?:month|mahin|30\s*din)").unwrap(), Timeline::ThisMonth),
    (Regex::new(r"(?i)\b(?:quarter|3\s*months?|90\s*din)").unwrap(), Timeline::NextQuarter),
    (Regex::new(r"(?i)\b(?:asap|jaldi|immediately|urgent)").unwrap(), Timeline::Asap),
]);

// Amount with an optional unit: "50k", "2 lakh", "₹ 40,000", "1.5 cr".
// ASCII digits only.
static BUDGET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:₹\s*)?\b[0-9]+(?:,[0-9]{2,3})*(?:\.[0-9]+)?(?:\s*(?:crore|cr|lakh|lac|k|rs|inr|usd|dollar)\b|\s*₹|\b)",
    )
    .unwrap()
});

// Currency names dropped from a budget value
static CURRENCY_WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)inr|rs|usd|dollar").unwrap());

// Digit runs, possibly split by spaces or hyphens: "98765 43210", "+91-98765-43210"
static PHONE_CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9]+(?:[-\s]+[0-9]+)*").unwrap());

// Self-introduction followed by one word more than a name may hold, so a
// terminator after a full name is still seen
static NAME_INTRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:mera\s+naam(?:\s+hai)?|my\s+name\s+is|main|i\s+am|this\s+is)\s+([a-zA-Z]+(?:\s+[a-zA-Z]+){{0,{}}})",
        MAX_NAME_TOKENS
    ))
    .unwrap()
});

/// Length of a local mobile number
const PHONE_DIGITS: usize = 10;

/// Country code accepted in front of a `+`
const COUNTRY_CODE: &str = "91";

// =============================================================================
// EXTRACTORS
// =============================================================================

/// Extract the business or industry.
///
/// An explicit "business hai <words>" phrase wins; otherwise the text is
/// classified into a fixed category.
pub fn extract_business(text: &str) -> Option<String> {
    if let Some(caps) = BUSINESS_PHRASE.captures(text) {
        if let Some(m) = caps.get(1) {
            let phrase = m.as_str().trim();
            if !phrase.is_empty() {
                return Some(phrase.to_string());
            }
        }
    }

    classify_business(text).map(|category| category.label().to_string())
}

/// Keyword classification into a [`BusinessCategory`]
pub fn classify_business(text: &str) -> Option<BusinessCategory> {
    BUSINESS_CATEGORIES
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, category)| *category)
}

/// Extract the primary marketing goal
pub fn extract_goal(text: &str) -> Option<Goal> {
    GOAL_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, goal)| *goal)
}

/// Extract the campaign timeline
pub fn extract_timeline(text: &str) -> Option<Timeline> {
    TIMELINE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, timeline)| *timeline)
}

/// Extract the budget as typed, keeping the unit.
///
/// The first number in the text is the budget, with or without a unit.
/// Currency names are dropped and `₹` becomes an `Rs ` prefix, so
/// "50k inr" reads "50k" and "₹40,000" reads "Rs 40,000".
pub fn extract_budget(text: &str) -> Option<String> {
    let whole = BUDGET_PATTERN.find(text)?;
    normalize_budget(whole.as_str())
}

fn normalize_budget(raw: &str) -> Option<String> {
    let stripped = CURRENCY_WORDS.replace_all(raw, "");
    let with_symbol = stripped.replace('₹', "Rs ");
    let value = with_symbol.split_whitespace().collect::<Vec<_>>().join(" ");

    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Extract a 10 digit mobile number.
///
/// Spaces and hyphens between digits are ignored. A `+` prefix must be the
/// `+91` country code, which is stripped. A number with any other length,
/// or glued to letters, is not a phone number, and no 10 digit window inside
/// it is taken either.
pub fn extract_phone(text: &str) -> Option<String> {
    for m in PHONE_CANDIDATE.find_iter(text) {
        if !is_standalone(text, m) {
            continue;
        }

        let compact: String = m
            .as_str()
            .chars()
            .filter(|c| *c == '+' || c.is_ascii_digit())
            .collect();

        match local_number(&compact) {
            Some(phone) => return Some(phone),
            None => {
                tracing::trace!(candidate = %compact, "Rejecting phone candidate");
            }
        }
    }

    None
}

fn is_standalone(text: &str, m: Match<'_>) -> bool {
    let glued = |c: char| c.is_alphanumeric() || c == '_';

    let before_ok = text[..m.start()].chars().next_back().map_or(true, |c| !glued(c));
    let after_ok = text[m.end()..].chars().next().map_or(true, |c| !glued(c));

    before_ok && after_ok
}

fn local_number(compact: &str) -> Option<String> {
    let digits = match compact.strip_prefix('+') {
        Some(rest) => rest.strip_prefix(COUNTRY_CODE)?,
        None => compact,
    };

    if digits.len() == PHONE_DIGITS && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(digits.to_string())
    } else {
        None
    }
}

/// Extract the person's name from a self-introduction.
///
/// "main Rohan sharma hoon" reads "Rohan Sharma". When the words after one
/// introduction phrase are not a name ("main ecommerce brand run karta
/// hoon"), the search continues after that phrase.
pub fn extract_name(text: &str) -> Option<String> {
    let mut pos = 0;

    while let Some(caps) = NAME_INTRO.captures_at(text, pos) {
        let Some(tail) = caps.get(1) else {
            break;
        };

        if let Some(name) = normalize_person_name(tail.as_str()) {
            return Some(name);
        }

        pos = tail.start();
    }

    None
}
