//! Centralized constants for the lead agent
//!
//! Single source of truth for limits and defaults shared across crates.

/// Conversation limits
pub mod limits {
    /// Maximum number of service suggestions in one reply
    pub const MAX_SUGGESTIONS: usize = 3;

    /// Upper bound accepted for `session.typing_delay_ms`
    pub const MAX_TYPING_DELAY_MS: u64 = 5_000;
}

/// Session defaults
pub mod session {
    /// Simulated typing delay before the assistant reply is emitted
    pub const DEFAULT_TYPING_DELAY_MS: u64 = 250;

    /// Brand the assistant introduces itself for
    pub const DEFAULT_BRAND_NAME: &str = "GrowthPulse";

    /// Capacity of the per-session event channel
    pub const EVENT_CHANNEL_CAPACITY: usize = 64;
}

/// Environment variable conventions
pub mod env {
    /// Prefix for settings overrides, e.g. `LEAD_AGENT__SESSION__TYPING_DELAY_MS`
    pub const PREFIX: &str = "LEAD_AGENT";

    /// Selects `config/{env}` on top of `config/default`
    pub const ENV_SELECTOR: &str = "LEAD_AGENT_ENV";
}
