//! Turn counters
//!
//! Recorded through the `metrics` facade. Nothing is exported unless the
//! embedding application installs a recorder.

use lead_agent_core::LeadUpdate;

/// Record a processed turn and the fields it captured
pub fn record_turn(update: &LeadUpdate) {
    metrics::counter!("lead_agent_turns_total").increment(1);
    for field in update.fields() {
        metrics::counter!("lead_agent_fields_captured_total", "field" => field.as_str())
            .increment(1);
    }
}

/// Record a lead handed over to a human
pub fn record_handover() {
    metrics::counter!("lead_agent_hot_handovers_total").increment(1);
}
