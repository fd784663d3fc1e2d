//! Lead Agent Entry Point
//!
//! Configuration priority: env vars > config/{env}.yaml > config/default.yaml > defaults

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use lead_agent_agent::{ChatSession, ChatSessionConfig};
use lead_agent_config::constants::env::ENV_SELECTOR;
use lead_agent_config::{load_settings, Settings};
use lead_agent_server::run_console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var(ENV_SELECTOR).ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&config);

    tracing::info!("Starting Lead Agent v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?config.environment,
        config_path = env.as_deref().unwrap_or("default"),
        typing_delay_ms = config.session.typing_delay_ms,
        "Configuration loaded"
    );

    let session_config = ChatSessionConfig::from_settings(&config)?;
    let session_id = uuid::Uuid::new_v4().simple().to_string();
    let session = ChatSession::new(session_id, session_config);

    run_console(
        &session,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    let lead = session.lead();
    tracing::info!(
        session_id = session.session_id(),
        complete = lead.is_complete(),
        interest = %lead.interest_level,
        "Session finished"
    );
    Ok(())
}

/// Initialize tracing (console only)
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("lead_agent={}", level).into()
    });

    // Logs go to stderr so they don't interleave with the chat on stdout
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
