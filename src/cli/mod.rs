//! Command-line interface for controlling MPRIS2 players.
//!
//! Parses the invocation, selects a service, and dispatches the command
//! word to one of the registered player commands.

mod args;
mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use args::Invocation;
pub use commands::{OpenCommand, PlaybackAction, PlaybackCommand, StatusCommand};
pub use registry::CommandRegistry;
pub use service::{CliService, SERVICES_COMMAND};
pub use types::{CliError, Command, CommandArg, CommandContext, CommandMetadata, CommandResult};
