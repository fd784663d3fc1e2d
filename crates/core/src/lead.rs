//! Lead state types
//!
//! `LeadContext` is the structured view of everything captured about a
//! prospect so far. Field values are sticky: once a field holds a value,
//! merging a later update never replaces it. The interest level only ever
//! moves up the cold < warm < hot ladder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for fields that have not been captured yet
pub const PENDING_PLACEHOLDER: &str = "Pending";

/// Qualification signal for a lead
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InterestLevel {
    /// Just exploring
    #[default]
    Cold,
    /// Asking about budget, pricing or a proposal
    Warm,
    /// Ready to talk to a human
    Hot,
}

impl InterestLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestLevel::Cold => "cold",
            InterestLevel::Warm => "warm",
            InterestLevel::Hot => "hot",
        }
    }

    /// Badge text shown next to the lead snapshot
    pub fn badge_label(&self) -> &'static str {
        match self {
            InterestLevel::Cold => "Exploring",
            InterestLevel::Warm => "Warm Lead",
            InterestLevel::Hot => "High Intent",
        }
    }
}

impl fmt::Display for InterestLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six qualification fields, in question order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadField {
    Business,
    Goal,
    Budget,
    Timeline,
    Name,
    Phone,
}

impl LeadField {
    /// All fields in priority order
    pub const ALL: [LeadField; 6] = [
        LeadField::Business,
        LeadField::Goal,
        LeadField::Budget,
        LeadField::Timeline,
        LeadField::Name,
        LeadField::Phone,
    ];

    /// Display label used in the lead snapshot
    pub fn label(&self) -> &'static str {
        match self {
            LeadField::Business => "Business",
            LeadField::Goal => "Goal",
            LeadField::Budget => "Budget",
            LeadField::Timeline => "Timeline",
            LeadField::Name => "Name",
            LeadField::Phone => "Phone",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::Business => "business",
            LeadField::Goal => "goal",
            LeadField::Budget => "budget",
            LeadField::Timeline => "timeline",
            LeadField::Name => "name",
            LeadField::Phone => "phone",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary marketing objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Lead Generation")]
    LeadGeneration,
    #[serde(rename = "Brand Awareness")]
    BrandAwareness,
    #[serde(rename = "Website Traffic")]
    WebsiteTraffic,
    #[serde(rename = "App Installs")]
    AppInstalls,
    #[serde(rename = "Retention & Loyalty")]
    RetentionLoyalty,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::LeadGeneration => "Lead Generation",
            Goal::BrandAwareness => "Brand Awareness",
            Goal::WebsiteTraffic => "Website Traffic",
            Goal::AppInstalls => "App Installs",
            Goal::RetentionLoyalty => "Retention & Loyalty",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Campaign launch timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "1-2 Weeks")]
    OneToTwoWeeks,
    #[serde(rename = "This Month")]
    ThisMonth,
    #[serde(rename = "Next Quarter")]
    NextQuarter,
    #[serde(rename = "ASAP")]
    Asap,
}

impl Timeline {
    pub fn label(&self) -> &'static str {
        match self {
            Timeline::OneToTwoWeeks => "1-2 Weeks",
            Timeline::ThisMonth => "This Month",
            Timeline::NextQuarter => "Next Quarter",
            Timeline::Asap => "ASAP",
        }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything captured about a lead in one conversation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub interest_level: InterestLevel,
}

impl LeadContext {
    /// Fresh context: nothing captured, interest cold
    pub fn new() -> Self {
        Self::default()
    }

    /// Display value of a field, if captured
    pub fn value(&self, field: LeadField) -> Option<&str> {
        match field {
            LeadField::Business => self.business.as_deref(),
            LeadField::Goal => self.goal.map(|g| g.label()),
            LeadField::Budget => self.budget.as_deref(),
            LeadField::Timeline => self.timeline.map(|t| t.label()),
            LeadField::Name => self.name.as_deref(),
            LeadField::Phone => self.phone.as_deref(),
        }
    }

    pub fn is_filled(&self, field: LeadField) -> bool {
        self.value(field).is_some_and(|v| !v.is_empty())
    }

    /// First field still missing, in question order
    pub fn first_missing(&self) -> Option<LeadField> {
        LeadField::ALL.into_iter().find(|f| !self.is_filled(*f))
    }

    pub fn missing_fields(&self) -> Vec<LeadField> {
        LeadField::ALL
            .into_iter()
            .filter(|f| !self.is_filled(*f))
            .collect()
    }

    /// All six fields captured
    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    pub fn is_hot(&self) -> bool {
        self.interest_level == InterestLevel::Hot
    }

    /// Fully qualified and handed over; every later reply is the handover
    pub fn is_terminal(&self) -> bool {
        self.is_complete() && self.is_hot()
    }

    /// Derive a new context from this one plus `update`.
    ///
    /// Values in `update` only land in fields that are still empty, and the
    /// interest level never decreases.
    pub fn merged(&self, update: &LeadUpdate) -> LeadContext {
        fn keep_first<T: Clone>(current: &Option<T>, incoming: &Option<T>) -> Option<T> {
            current.clone().or_else(|| incoming.clone())
        }

        let interest_level = match update.interest_level {
            Some(level) => level.max(self.interest_level),
            None => self.interest_level,
        };

        LeadContext {
            business: keep_first(&self.business, &update.business),
            goal: keep_first(&self.goal, &update.goal),
            budget: keep_first(&self.budget, &update.budget),
            timeline: keep_first(&self.timeline, &update.timeline),
            name: keep_first(&self.name, &update.name),
            phone: keep_first(&self.phone, &update.phone),
            interest_level,
        }
    }

    /// Ordered field snapshot for display
    pub fn snapshot(&self) -> LeadSnapshot {
        LeadSnapshot {
            entries: LeadField::ALL
                .into_iter()
                .map(|field| SnapshotEntry {
                    field,
                    label: field.label(),
                    value: self.value(field).map(str::to_string),
                })
                .collect(),
            interest_level: self.interest_level,
        }
    }
}

/// Values newly captured in a single turn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Set only when the interest level changed this turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_level: Option<InterestLevel>,
}

impl LeadUpdate {
    pub fn value(&self, field: LeadField) -> Option<&str> {
        match field {
            LeadField::Business => self.business.as_deref(),
            LeadField::Goal => self.goal.map(|g| g.label()),
            LeadField::Budget => self.budget.as_deref(),
            LeadField::Timeline => self.timeline.map(|t| t.label()),
            LeadField::Name => self.name.as_deref(),
            LeadField::Phone => self.phone.as_deref(),
        }
    }

    /// Fields captured this turn, in question order
    pub fn fields(&self) -> Vec<LeadField> {
        LeadField::ALL
            .into_iter()
            .filter(|f| self.value(*f).is_some())
            .collect()
    }

    /// Nothing captured and no interest change
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty() && self.interest_level.is_none()
    }
}

/// One row of the lead snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    pub field: LeadField,
    pub label: &'static str,
    pub value: Option<String>,
}

impl SnapshotEntry {
    /// Captured value, or the pending placeholder
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(PENDING_PLACEHOLDER)
    }
}

/// Ordered (label, value) view of a lead for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSnapshot {
    pub entries: Vec<SnapshotEntry>,
    pub interest_level: InterestLevel,
}

impl LeadSnapshot {
    pub fn badge(&self) -> &'static str {
        self.interest_level.badge_label()
    }

    /// `(label, value)` pairs in display order
    pub fn pairs(&self) -> Vec<(&'static str, Option<&str>)> {
        self.entries
            .iter()
            .map(|e| (e.label, e.value.as_deref()))
            .collect()
    }
}

impl fmt::Display for LeadSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.badge())?;
        for entry in &self.entries {
            writeln!(f, "  {:<9} {}", entry.label, entry.display_value())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_level_ordering() {
        assert!(InterestLevel::Cold < InterestLevel::Warm);
        assert!(InterestLevel::Warm < InterestLevel::Hot);
        assert_eq!(InterestLevel::default(), InterestLevel::Cold);
    }

    #[test]
    fn test_new_context_is_empty_and_cold() {
        let ctx = LeadContext::new();
        assert_eq!(ctx.interest_level, InterestLevel::Cold);
        assert_eq!(ctx.missing_fields(), LeadField::ALL.to_vec());
        assert_eq!(ctx.first_missing(), Some(LeadField::Business));
        assert!(!ctx.is_complete());
    }

    #[test]
    fn test_merge_keeps_first_value() {
        let ctx = LeadContext {
            budget: Some("50k".to_string()),
            ..Default::default()
        };
        let update = LeadUpdate {
            budget: Some("2 lakh".to_string()),
            goal: Some(Goal::LeadGeneration),
            ..Default::default()
        };

        let merged = ctx.merged(&update);
        assert_eq!(merged.budget.as_deref(), Some("50k"));
        assert_eq!(merged.goal, Some(Goal::LeadGeneration));
        // Source context untouched
        assert!(ctx.goal.is_none());
    }

    #[test]
    fn test_merge_never_lowers_interest() {
        let ctx = LeadContext {
            interest_level: InterestLevel::Hot,
            ..Default::default()
        };
        let update = LeadUpdate {
            interest_level: Some(InterestLevel::Warm),
            ..Default::default()
        };
        assert_eq!(ctx.merged(&update).interest_level, InterestLevel::Hot);
    }

    #[test]
    fn test_update_fields_in_question_order() {
        let update = LeadUpdate {
            phone: Some("9876543210".to_string()),
            business: Some("Ecommerce".to_string()),
            timeline: Some(Timeline::Asap),
            ..Default::default()
        };
        assert_eq!(
            update.fields(),
            vec![LeadField::Business, LeadField::Timeline, LeadField::Phone]
        );
        assert!(!update.is_empty());
        assert!(LeadUpdate::default().is_empty());
    }

    #[test]
    fn test_snapshot_order_and_placeholder() {
        let ctx = LeadContext {
            goal: Some(Goal::RetentionLoyalty),
            name: Some("Rohan Sharma".to_string()),
            interest_level: InterestLevel::Warm,
            ..Default::default()
        };
        let snapshot = ctx.snapshot();
        let labels: Vec<_> = snapshot.entries.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["Business", "Goal", "Budget", "Timeline", "Name", "Phone"]
        );
        assert_eq!(snapshot.entries[0].display_value(), PENDING_PLACEHOLDER);
        assert_eq!(snapshot.entries[1].display_value(), "Retention & Loyalty");
        assert_eq!(snapshot.pairs()[4], ("Name", Some("Rohan Sharma")));
        assert_eq!(snapshot.badge(), "Warm Lead");
    }

    #[test]
    fn test_terminal_requires_complete_and_hot() {
        let mut ctx = LeadContext {
            business: Some("F&B".to_string()),
            goal: Some(Goal::WebsiteTraffic),
            budget: Some("1 lakh".to_string()),
            timeline: Some(Timeline::NextQuarter),
            name: Some("Asha".to_string()),
            phone: Some("9876543210".to_string()),
            interest_level: InterestLevel::Warm,
        };
        assert!(ctx.is_complete());
        assert!(!ctx.is_terminal());

        ctx.interest_level = InterestLevel::Hot;
        assert!(ctx.is_terminal());
    }

    #[test]
    fn test_labels_serialize_as_display_text() {
        let json = serde_json::to_string(&Goal::RetentionLoyalty).unwrap();
        assert_eq!(json, "\"Retention & Loyalty\"");
        let json = serde_json::to_string(&Timeline::OneToTwoWeeks).unwrap();
        assert_eq!(json, "\"1-2 Weeks\"");
        let json = serde_json::to_string(&InterestLevel::Warm).unwrap();
        assert_eq!(json, "\"warm\"");
    }
}
