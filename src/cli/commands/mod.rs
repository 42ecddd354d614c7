//! Player commands.
mod open;
mod playback;
mod status;

pub use open::OpenCommand;
pub use playback::{PlaybackAction, PlaybackCommand};
pub use status::StatusCommand;

use crate::cli::CommandRegistry;

/// Registers every player command with the command registry
///
/// Registration order is the order of the command catalogue.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
pub fn register_commands(registry: &mut CommandRegistry) {
    registry.register_command(Box::new(StatusCommand::new()));
    registry.register_command(Box::new(PlaybackCommand::new(PlaybackAction::Toggle)));
    registry.register_command(Box::new(PlaybackCommand::new(PlaybackAction::Stop)));
    registry.register_command(Box::new(PlaybackCommand::new(PlaybackAction::Play)));
    registry.register_command(Box::new(PlaybackCommand::new(PlaybackAction::Pause)));
    registry.register_command(Box::new(OpenCommand::new()));
}
