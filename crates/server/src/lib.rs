//! Lead Agent Server
//!
//! Terminal chat front end for the lead qualification agent.

pub mod console;

pub use console::{parse_input, run_console, ConsoleInput};

use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Agent error: {0}")]
    Agent(#[from] lead_agent_agent::AgentError),
}
