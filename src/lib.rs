//! # Gilnokie GMS
//!
//! Goods Management System dashboard - the service tier behind a textile
//! mill's production dashboard: an authenticated layout shell, a health
//! endpoint, South African locale formatting and an installable PWA
//! configuration.
//!
//! ## Features
//!
//! - **Session-gated pages**: every dashboard route resolves the session
//!   against the external identity service before rendering
//! - **Locale formatting**: en-ZA dates, Rand amounts, kilogram weights
//! - **Health endpoint**: fixed-shape probe for monitors and the PWA
//! - **Installable**: versioned PWA configuration and manifest
//!
//! ## Modules
//!
//! - [`format`]: locale-aware date and number formatting
//! - [`auth`]: session lookup against the identity service
//! - [`web`]: Axum router, authentication gate and rendered shell
//! - [`pwa`]: static, versioned progressive web app configuration
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gilnokie_gms::auth::{SessionUser, StaticSessions};
//! use gilnokie_gms::config::Config;
//! use gilnokie_gms::web::{serve, AppState};
//! use std::sync::Arc;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sessions = StaticSessions::new().with_user(
//!         "dev-token",
//!         SessionUser {
//!             id: Uuid::new_v4(),
//!             email: "dev@gilnokie.co.za".to_string(),
//!         },
//!     );
//!
//!     let config = Config::default();
//!     let server_config = config.server.clone();
//!     let state = AppState::new(Arc::new(sessions), config);
//!
//!     serve(state, &server_config).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod format;
pub mod pwa;
pub mod web;

// Re-export top-level types for convenience
pub use auth::{
    AuthError, AuthSession, IdentityClient, IdentityConfig, SessionProvider, SessionUser,
    StaticSessions,
};

pub use config::{AuthConfig, Config, ConfigError, LoggingConfig, ServerConfig};

pub use format::{
    format_currency, format_date, format_date_time, format_percentage, format_quantity,
    format_time, format_weight, parse_date, parse_date_time, RawNumber,
};

pub use pwa::{web_manifest, PwaConfig, WebManifest};

pub use web::{build_router, serve, AppState, CurrentUser, WebError, WebResult};
