use std::io::Write;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_status_line,
        types::{CommandContext, CommandMetadata},
    },
    services::mpris::MediaError,
};

/// Command to show the playback status of the selected player
///
/// Playing and paused players get a one-line track summary; any other
/// status is printed as the raw token.
pub struct StatusCommand;

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatusCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(
        &self,
        context: &CommandContext<'_>,
        _args: &[String],
        out: &mut (dyn Write + Send),
    ) -> CommandResult {
        let player = context.player;
        let remote = |e: MediaError| CliError::service(player.name(), e);
        let status = player.playback_status().await.map_err(remote)?;

        if !status.has_position() {
            writeln!(out, "{status}")?;
            return Ok(());
        }

        let metadata = player.metadata().await.map_err(remote)?;
        let position = player.position().await.map_err(remote)?;
        debug!(%status, position, entries = metadata.len(), "Read player state");

        writeln!(out, "{}", format_status_line(&status, &metadata, position))?;

        if context.verbose {
            writeln!(out, "Raw metadata listing:")?;
            for (key, value) in metadata.iter() {
                writeln!(out, "  {key}\t= {value}")?;
            }
        }

        Ok(())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "show player status".to_string(),
            args: vec![],
        }
    }
}
