//! Gilnokie GMS Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loads a TOML config file from `--config` or the default locations,
//! then applies environment variable overrides:
//! - `GILNOKIE_HOST`: host to bind to (default: 0.0.0.0)
//! - `GILNOKIE_PORT`: port to listen on (default: 8090)
//! - `GILNOKIE_DEV`: development mode, disables PWA registration
//! - `GILNOKIE_AUTH_URL`: identity service base URL (optional; without it
//!   sessions come from an in-memory table)
//! - `GILNOKIE_AUTH_KEY`: identity service API key
//! - `GILNOKIE_DEV_SESSION`: seed one `token:email` session for development
//! - `GILNOKIE_LOG_LEVEL` / `GILNOKIE_LOG_FORMAT`: logging
//! - `RUST_LOG`: log filter (takes precedence over GILNOKIE_LOG_LEVEL)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use gilnokie_gms::auth::{
    IdentityClient, IdentityConfig, SessionProvider, SessionUser, StaticSessions,
};
use gilnokie_gms::config::{generate_default_config, Config};
use gilnokie_gms::web::{serve, AppState};

#[derive(Parser)]
#[command(name = "gilnokie-gms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Gilnokie goods-management dashboard service")]
struct Cli {
    /// Path to a TOML config file (default: standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(long)]
    port: Option<u16>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("failed to load config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting Gilnokie GMS v{}", env!("CARGO_PKG_VERSION"));
    if config.server.dev_mode {
        tracing::info!("Development mode: service worker registration disabled");
    }

    let sessions = build_session_provider(&config).await;

    let server_config = config.server.clone();
    let state = AppState::new(sessions, config);

    serve(state, &server_config).await?;

    tracing::info!("Gilnokie GMS stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "gilnokie_gms={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Pick the session provider: the remote identity service when configured,
/// otherwise an in-memory table (optionally seeded for development).
async fn build_session_provider(config: &Config) -> Arc<dyn SessionProvider> {
    if let Some(base_url) = &config.auth.base_url {
        tracing::info!("Identity service: {}", base_url);

        let client = IdentityClient::new(IdentityConfig {
            base_url: base_url.clone(),
            api_key: config.auth.api_key.clone(),
            request_timeout_ms: config.auth.request_timeout_ms,
        });

        // Check identity service availability
        match client.health_check().await {
            Ok(_) => tracing::info!("Identity service connection verified"),
            Err(e) => tracing::warn!(
                "Identity service not available: {} (sessions will fail until it returns)",
                e
            ),
        }

        return Arc::new(client);
    }

    let mut sessions = StaticSessions::new();
    if let Ok(seed) = std::env::var("GILNOKIE_DEV_SESSION") {
        match seed.split_once(':') {
            Some((token, email)) if !token.is_empty() && !email.is_empty() => {
                sessions = sessions.with_user(
                    token,
                    SessionUser {
                        id: Uuid::new_v4(),
                        email: email.to_string(),
                    },
                );
                tracing::info!("Seeded development session for {}", email);
            }
            _ => tracing::warn!("GILNOKIE_DEV_SESSION must look like token:email, ignoring"),
        }
    }

    if sessions.is_empty() {
        tracing::warn!(
            "No identity service configured (set GILNOKIE_AUTH_URL); \
             every dashboard request will redirect to /login"
        );
    }

    Arc::new(sessions)
}
