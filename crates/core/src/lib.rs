//! Core types for the lead qualification agent
//!
//! This crate provides the data model shared by every other crate:
//! - Lead state (`LeadContext`) and its per-turn diff (`LeadUpdate`)
//! - Classified field values (`Goal`, `Timeline`, `InterestLevel`)
//! - Conversation messages (`Message`, `Sender`)
//! - Display snapshot types for the presentation layer

pub mod conversation;
pub mod lead;

pub use conversation::{Message, Sender};
pub use lead::{
    Goal, InterestLevel, LeadContext, LeadField, LeadSnapshot, LeadUpdate, SnapshotEntry,
    Timeline, PENDING_PLACEHOLDER,
};
