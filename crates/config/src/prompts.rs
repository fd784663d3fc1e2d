//! Reply template configuration
//!
//! Every sentence the agent can say lives here. Defaults are the stock
//! Hinglish copy; a deployment can override any subset from the settings file
//! or from a standalone YAML template pack. `{value}` is replaced with the
//! captured field value, `{brand}` with the configured brand name.

use lead_agent_core::LeadField;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::ConfigError;

/// Placeholder for the captured value in acknowledgement templates
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// Placeholder for the brand name in the greeting
pub const BRAND_PLACEHOLDER: &str = "{brand}";

/// All reply copy used by the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyTemplates {
    /// Intro message shown when a session opens
    pub greeting: String,
    /// Sole reply once the lead is hot
    pub handover: String,
    /// One sentence per newly captured field
    #[serde(deserialize_with = "acknowledgements_over_defaults")]
    pub acknowledgements: FieldTemplates,
    /// Follow-up question per missing field
    #[serde(deserialize_with = "questions_over_defaults")]
    pub questions: FieldTemplates,
    /// Lead-in line before the suggestion bullets
    pub suggestions_intro: String,
    /// Bullet prefix for each suggestion
    pub bullet: String,
    /// Closing line when nothing is missing and the lead is warm
    pub roadmap_offer: String,
    /// Closing line when nothing is missing and the lead is cold
    pub encouragement: String,
    /// Canned replies offered to the user
    pub quick_replies: Vec<String>,
}

impl Default for ReplyTemplates {
    fn default() -> Self {
        Self {
            greeting: "Namaste! Main {brand} ka marketing guide hoon. Aap apni business situation share karo, main turant suggest karunga kaunsi digital marketing mix aapke liye sahi rahegi.".to_string(),
            handover: "Main aapko hamare expert se connect kar raha hoon 😊".to_string(),
            acknowledgements: FieldTemplates::acknowledgements(),
            questions: FieldTemplates::questions(),
            suggestions_intro: "Mujhe lagta hai ye services aapke liye kaafi effective rahengi:".to_string(),
            bullet: "• ".to_string(),
            roadmap_offer: "Agar aap detailed roadmap dekhna chahte ho to bolo, main quick outline share kar deta hoon.".to_string(),
            encouragement: "Aur kuch specifics share karna chaho to batao, main help karta rahunga.".to_string(),
            quick_replies: vec![
                "Lead generation ke liye kya best rahega?".to_string(),
                "Mera budget 50k hai per month".to_string(),
                "Main ecommerce brand run karta hoon".to_string(),
                "3 hafton mein campaign launch karna hai".to_string(),
                "Mujhe brand awareness badhani hai".to_string(),
            ],
        }
    }
}

impl ReplyTemplates {
    /// Load a template pack from a YAML file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileNotFound(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Greeting with the brand filled in
    pub fn greeting_for(&self, brand: &str) -> String {
        self.greeting.replace(BRAND_PLACEHOLDER, brand)
    }

    /// Acknowledgement sentence for a newly captured value
    pub fn acknowledge(&self, field: LeadField, value: &str) -> String {
        render(self.acknowledgements.get(field), value)
    }

    /// Question asking for a missing field
    pub fn question(&self, field: LeadField) -> &str {
        self.questions.get(field)
    }

    /// Every template must be non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let singles = [
            ("templates.greeting", &self.greeting),
            ("templates.handover", &self.handover),
            ("templates.suggestions_intro", &self.suggestions_intro),
            ("templates.roadmap_offer", &self.roadmap_offer),
            ("templates.encouragement", &self.encouragement),
        ];
        for (field, value) in singles {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "Template must not be empty".to_string(),
                });
            }
        }

        for field in LeadField::ALL {
            if self.acknowledgements.get(field).trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("templates.acknowledgements.{}", field),
                    message: "Template must not be empty".to_string(),
                });
            }
            if self.questions.get(field).trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("templates.questions.{}", field),
                    message: "Template must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// One template per lead field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTemplates {
    pub business: String,
    pub goal: String,
    pub budget: String,
    pub timeline: String,
    pub name: String,
    pub phone: String,
}

impl FieldTemplates {
    fn acknowledgements() -> Self {
        Self {
            business: "Great! {value} ko scale karne ke liye main focused strategy banaunga."
                .to_string(),
            goal: "Samajh gaya ki aapka core goal {value} hai.".to_string(),
            budget: "Budget {value} note kar liya, iske andar best mix suggest karunga."
                .to_string(),
            timeline: "Timeline {value} rakhenge, accordingly launch plan banega.".to_string(),
            name: "Thank you {value}, aapka naam note kar liya.".to_string(),
            phone: "Contact {value} save kar diya, team outreach ready rahegi.".to_string(),
        }
    }

    fn questions() -> Self {
        Self {
            business: "Aapka business ya brand kis industry mein kaam karta hai?".to_string(),
            goal: "Primary objective kya hai? Leads, sales ya sirf awareness?".to_string(),
            budget: "Approx monthly budget kitna socha hai?".to_string(),
            timeline: "Campaign launch karne ka timeline bata den?".to_string(),
            name: "Aapka naam kya likhu?".to_string(),
            phone: "Contact number share karenge?".to_string(),
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Business => &self.business,
            LeadField::Goal => &self.goal,
            LeadField::Budget => &self.budget,
            LeadField::Timeline => &self.timeline,
            LeadField::Name => &self.name,
            LeadField::Phone => &self.phone,
        }
    }
}

/// Field templates as written in a file; absent entries keep the stock copy
#[derive(Debug, Default, Deserialize)]
struct FieldOverrides {
    business: Option<String>,
    goal: Option<String>,
    budget: Option<String>,
    timeline: Option<String>,
    name: Option<String>,
    phone: Option<String>,
}

impl FieldOverrides {
    fn apply(self, base: FieldTemplates) -> FieldTemplates {
        FieldTemplates {
            business: self.business.unwrap_or(base.business),
            goal: self.goal.unwrap_or(base.goal),
            budget: self.budget.unwrap_or(base.budget),
            timeline: self.timeline.unwrap_or(base.timeline),
            name: self.name.unwrap_or(base.name),
            phone: self.phone.unwrap_or(base.phone),
        }
    }
}

fn acknowledgements_over_defaults<'de, D>(deserializer: D) -> Result<FieldTemplates, D::Error>
where
    D: Deserializer<'de>,
{
    FieldOverrides::deserialize(deserializer)
        .map(|overrides| overrides.apply(FieldTemplates::acknowledgements()))
}

fn questions_over_defaults<'de, D>(deserializer: D) -> Result<FieldTemplates, D::Error>
where
    D: Deserializer<'de>,
{
    FieldOverrides::deserialize(deserializer)
        .map(|overrides| overrides.apply(FieldTemplates::questions()))
}

/// Substitute `{value}` in a template
pub fn render(template: &str, value: &str) -> String {
    template.replace(VALUE_PLACEHOLDER, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_templates_are_valid() {
        let templates = ReplyTemplates::default();
        assert!(templates.validate().is_ok());
        assert_eq!(templates.quick_replies.len(), 5);
    }

    #[test]
    fn test_acknowledge_fills_value() {
        let templates = ReplyTemplates::default();
        assert_eq!(
            templates.acknowledge(LeadField::Name, "Rohan Sharma"),
            "Thank you Rohan Sharma, aapka naam note kar liya."
        );
        assert_eq!(
            templates.question(LeadField::Goal),
            "Primary objective kya hai? Leads, sales ya sirf awareness?"
        );
    }

    #[test]
    fn test_greeting_uses_brand() {
        let templates = ReplyTemplates::default();
        let greeting = templates.greeting_for("GrowthPulse");
        assert!(greeting.starts_with("Namaste! Main GrowthPulse ka marketing guide hoon."));
        assert!(!greeting.contains(BRAND_PLACEHOLDER));
    }

    #[test]
    fn test_partial_yaml_override_keeps_defaults() {
        let yaml = r#"
handover: "Expert aapko abhi call karenge."
"#;
        let templates = ReplyTemplates::from_yaml_str(yaml).unwrap();
        assert_eq!(templates.handover, "Expert aapko abhi call karenge.");
        assert_eq!(templates.questions, FieldTemplates::questions());
    }

    #[test]
    fn test_single_field_override_keeps_siblings() {
        let yaml = r#"
questions:
  goal: "Goal kya hai?"
acknowledgements:
  name: "Shukriya {value}!"
"#;
        let templates = ReplyTemplates::from_yaml_str(yaml).unwrap();
        assert_eq!(templates.question(LeadField::Goal), "Goal kya hai?");
        assert_eq!(
            templates.question(LeadField::Phone),
            FieldTemplates::questions().phone
        );
        assert_eq!(templates.acknowledge(LeadField::Name, "Priya"), "Shukriya Priya!");
        assert_eq!(
            templates.acknowledgements.budget,
            FieldTemplates::acknowledgements().budget
        );
        assert!(templates.validate().is_ok());
    }

    #[test]
    fn test_empty_template_rejected() {
        let mut templates = ReplyTemplates::default();
        templates.questions.phone = "  ".to_string();
        assert!(matches!(
            templates.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "templates.questions.phone"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            ReplyTemplates::load("/nonexistent/templates.yaml"),
            Err(ConfigError::FileNotFound(_))
        ));
    }
}
