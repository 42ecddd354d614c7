//! mprisctl - command line client for MPRIS2 compatible media players.
//!
//! Discovers media players on the session bus and controls them:
//!
//! - list available services
//! - show playback status and track metadata
//! - play, pause, stop, toggle, and open URIs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mprisctl::{
//!     cli::{CliService, Invocation},
//!     services::SessionBus,
//! };
//!
//! # async fn run() -> Result<(), mprisctl::cli::CliError> {
//! let invocation = Invocation {
//!     command: "status".to_string(),
//!     args: Vec::new(),
//!     service: None,
//!     verbose: false,
//!     commands: false,
//! };
//!
//! let cli_service = CliService::new(SessionBus::new(), 0);
//! cli_service.run(&invocation, &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```

/// Configuration file schema and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface and command dispatch.
pub mod cli;

/// Session bus services.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{MprisCtlError, Result};
