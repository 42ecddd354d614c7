use std::io::Write;

use async_trait::async_trait;

use crate::cli::{
    CliError, Command, CommandResult,
    types::{CommandContext, CommandMetadata},
};

/// Argument-less playback controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    /// `PlayPause`
    Toggle,
    /// `Stop`
    Stop,
    /// `Play`
    Play,
    /// `Pause`
    Pause,
}

impl PlaybackAction {
    fn command_name(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Stop => "stop",
            Self::Play => "play",
            Self::Pause => "pause",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Toggle => "toggle play/pause state",
            Self::Stop => "stop playback",
            Self::Play => "start playback",
            Self::Pause => "pause playback",
        }
    }

    fn announcement(self) -> &'static str {
        match self {
            Self::Toggle => "toggling play/pause state",
            Self::Stop => "stopping playback",
            Self::Play => "starting playback",
            Self::Pause => "pausing playback",
        }
    }
}

/// Command issuing one playback control call on the selected player
pub struct PlaybackCommand {
    action: PlaybackAction,
}

impl PlaybackCommand {
    /// Creates a command for `action`
    pub fn new(action: PlaybackAction) -> Self {
        Self { action }
    }
}

#[async_trait]
impl Command for PlaybackCommand {
    async fn execute(
        &self,
        context: &CommandContext<'_>,
        _args: &[String],
        out: &mut (dyn Write + Send),
    ) -> CommandResult {
        writeln!(out, "{}", self.action.announcement())?;
        out.flush()?;

        let player = context.player;
        let result = match self.action {
            PlaybackAction::Toggle => player.play_pause().await,
            PlaybackAction::Stop => player.stop().await,
            PlaybackAction::Play => player.play().await,
            PlaybackAction::Pause => player.pause().await,
        };

        result.map_err(|e| CliError::service(player.name(), e))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: self.action.command_name().to_string(),
            description: self.action.description().to_string(),
            args: vec![],
        }
    }
}
