//! Lead Scoring Module
//!
//! Keyword-based interest classification for a lead:
//! - Hot: the prospect asks to start, book or talk to a person
//! - Warm: the prospect asks about budget, pricing or a proposal
//! - Cold: everything else
//!
//! The level is monotonic. A hot lead stays hot, and a warm lead never
//! drops back to cold.

use lead_agent_core::InterestLevel;
use once_cell::sync::Lazy;
use regex::Regex;

/// Phrases that mean the prospect wants to move now, matched as plain
/// substrings of the lowercased utterance ("facebook" contains "book")
const HOT_PHRASES: &[&str] = &[
    "start kar",
    "let's start",
    "lets start",
    "go ahead",
    "ready",
    "interested",
    "sign me up",
    "proceed",
    "book",
    "call me",
    "talk to expert",
    "connect me",
    "move forward",
];

// Pricing and proposal questions
static WARM_PHRASES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)budget|how\s+much|plan\s+share|proposal").unwrap());

/// Interest signal carried by one utterance, ignoring history
pub fn detect_signal(text: &str) -> Option<InterestLevel> {
    let lower = text.to_lowercase();
    if HOT_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        Some(InterestLevel::Hot)
    } else if WARM_PHRASES.is_match(text) {
        Some(InterestLevel::Warm)
    } else {
        None
    }
}

/// Next interest level given the utterance and the current level.
///
/// Rules, in order:
/// 1. a hot phrase makes the lead hot
/// 2. a hot lead stays hot
/// 3. a pricing question makes the lead warm
/// 4. otherwise the level is unchanged
pub fn classify_interest(text: &str, current: InterestLevel) -> InterestLevel {
    let next = match detect_signal(text) {
        Some(InterestLevel::Hot) => InterestLevel::Hot,
        _ if current == InterestLevel::Hot => InterestLevel::Hot,
        Some(signal) => signal,
        None => current,
    };

    if next != current {
        tracing::debug!(from = %current, to = %next, "Interest level changed");
    }

    next
}
