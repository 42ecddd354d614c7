use std::io::Write;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{CommandArg, CommandContext, CommandMetadata},
    },
    services::mpris::MediaError,
};

/// Command to open a URI in the selected player and start playback
pub struct OpenCommand;

impl OpenCommand {
    /// Creates a new OpenCommand
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpenCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for OpenCommand {
    /// Opens the URI given as the only argument
    ///
    /// # Errors
    ///
    /// Returns `CliError::UnsupportedOperation` if the player doesn't
    /// implement `OpenUri`, `CliError::UnexpectedError` for any other failure
    async fn execute(
        &self,
        context: &CommandContext<'_>,
        args: &[String],
        out: &mut (dyn Write + Send),
    ) -> CommandResult {
        let uri = args
            .first()
            .ok_or_else(|| CliError::InvalidArguments("'open' expects a URI".to_string()))?;

        writeln!(out, "opening {uri}")?;
        out.flush()?;

        match context.player.open_uri(uri).await {
            Ok(()) => Ok(()),
            Err(MediaError::UnsupportedMethod { .. }) => Err(CliError::UnsupportedOperation {
                service: context.player.name().to_string(),
            }),
            Err(e) => Err(CliError::UnexpectedError(e)),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "open".to_string(),
            description: "open media from URI and playback".to_string(),
            args: vec![CommandArg {
                name: "URI".to_string(),
                description: "Location of the media to open".to_string(),
                required: true,
            }],
        }
    }
}
