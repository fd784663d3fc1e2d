//! Text processing for the lead agent
//!
//! This crate provides the rule-based extraction layer:
//! - **Slot Extraction**: one pure extractor per lead field (business, goal,
//!   budget, timeline, name, phone)
//! - **Hinglish utilities**: copulas, filler vocabulary and person-name
//!   normalisation shared by the extractors
//!
//! Extractors never fail. Anything they cannot recognise yields `None`.
//!
//! # Example
//!
//! ```
//! use lead_agent_text_processing::slot_extraction::{extract_budget, extract_name};
//!
//! assert_eq!(extract_budget("Mera budget 50k hai per month").as_deref(), Some("50k"));
//! assert_eq!(extract_name("main Rohan sharma hoon").as_deref(), Some("Rohan Sharma"));
//! ```

pub mod hinglish;
pub mod slot_extraction;

pub use hinglish::{normalize_person_name, sanitize_name};
pub use slot_extraction::{
    classify_business, extract_budget, extract_business, extract_goal, extract_name,
    extract_phone, extract_timeline, BusinessCategory,
};
