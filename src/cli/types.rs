use std::io::Write;

use async_trait::async_trait;
use thiserror::Error;

use crate::services::mpris::{MediaError, MediaPlayer};

/// Errors that can occur during CLI command execution.
///
/// Every variant ends the invocation. The `Display` text is the message
/// printed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// The requested service index is past the end of the service list.
    #[error("MPRIS2 service no. {0} not found.")]
    ServiceNotFound(usize),

    /// The command word doesn't name a registered command.
    #[error("unknown command: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// This error is returned when argument validation fails, such as
    /// missing required arguments or too many arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The selected service doesn't implement opening URIs.
    #[error("Error: Service {service} does not support opening URIs via MPRIS2.")]
    UnsupportedOperation {
        /// Bus name of the selected service
        service: String,
    },

    /// Opening a URI failed for a reason other than missing support.
    #[error("Unexpected error: {0}")]
    UnexpectedError(MediaError),

    /// A remote call to a bus service failed.
    #[error("{service} error: {details}")]
    ServiceError {
        /// Bus name of the service that failed
        service: String,
        /// Error details
        details: String,
    },

    /// Writing command output failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Wraps a failed remote call made on behalf of `service`.
    pub fn service(service: &str, error: MediaError) -> Self {
        CliError::ServiceError {
            service: service.to_string(),
            details: error.to_string(),
        }
    }
}

/// Type alias for command execution results.
///
/// Commands write their output as they go, so success carries no value.
pub type CommandResult = Result<(), CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument as shown in the catalogue (e.g., "URI").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,
}

/// Complete metadata for a CLI command.
///
/// Used for the command catalogue, argument validation and lookup.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command word (e.g., "status", "open").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,
}

/// Everything a command gets to work with besides its arguments.
pub struct CommandContext<'a> {
    /// The selected player
    pub player: &'a dyn MediaPlayer,

    /// Whether extra diagnostic output was requested
    pub verbose: bool,
}

/// Trait defining the interface for all CLI commands.
///
/// All commands implement this trait to provide consistent execution
/// and metadata discovery.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command against the selected player.
    ///
    /// Output is written to `out` as the command progresses, so an
    /// announcement is visible even if the remote call after it fails.
    /// The registry has already checked the argument count against the
    /// command's metadata.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failure, including remote
    /// errors and failed writes to `out`.
    async fn execute(
        &self,
        context: &CommandContext<'_>,
        args: &[String],
        out: &mut (dyn Write + Send),
    ) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
