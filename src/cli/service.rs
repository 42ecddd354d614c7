use std::io::Write;

use tracing::{Level, debug, enabled, info, instrument};

use crate::services::mpris::PlayerConnector;

use super::{
    CliError, CommandRegistry, Invocation,
    types::{CommandContext, CommandResult},
};

/// Command word that lists services instead of talking to a player
pub const SERVICES_COMMAND: &str = "services";

const BUS_SERVICE: &str = "org.freedesktop.DBus";

/// High-level service for dispatching one CLI invocation.
///
/// Owns the transport context and the command registry. Nothing is kept
/// between invocations.
pub struct CliService {
    connector: Box<dyn PlayerConnector>,
    registry: CommandRegistry,
    default_service: usize,
}

impl CliService {
    /// Creates a new CLI service with all built-in commands registered.
    ///
    /// # Arguments
    /// * `connector` - Transport used to discover and bind players
    /// * `default_service` - Service index used when none is given
    pub fn new(connector: impl PlayerConnector + 'static, default_service: usize) -> Self {
        Self {
            connector: Box::new(connector),
            registry: CommandRegistry::with_default_commands(),
            default_service,
        }
    }

    /// Runs one invocation, writing normal output to `out`.
    ///
    /// # Errors
    /// Returns `CliError` when the service index is out of range, the
    /// command is unknown or has bad arguments, or a remote call fails.
    #[instrument(skip(self, out), fields(command = %invocation.command))]
    pub async fn run(
        &self,
        invocation: &Invocation,
        out: &mut (dyn Write + Send),
    ) -> CommandResult {
        if invocation.commands {
            writeln!(out, "{}", self.registry.catalogue())?;
            return Ok(());
        }

        let services = self
            .connector
            .list_services()
            .await
            .map_err(|e| CliError::service(BUS_SERVICE, e))?;

        if invocation.command == SERVICES_COMMAND {
            for (index, service) in services.iter().enumerate() {
                writeln!(out, "  {index}: {service}")?;
            }
            return Ok(());
        }

        let index = invocation.service.unwrap_or(self.default_service);
        let service = services
            .get(index)
            .ok_or(CliError::ServiceNotFound(index))?;

        info!(%service, "Selected MPRIS service");
        let player = self
            .connector
            .connect(service)
            .await
            .map_err(|e| CliError::service(service, e))?;

        if invocation.verbose {
            writeln!(out, "selected service {}", player.name())?;
            writeln!(out, "  playlists support:\t{}", player.supports_playlists())?;
            writeln!(out, "  tracklist support:\t{}", player.supports_tracklist())?;

            if enabled!(Level::DEBUG) {
                match player.player_properties().await {
                    Ok(properties) => {
                        let mut names: Vec<&String> = properties.keys().collect();
                        names.sort();
                        debug!(?names, "Player interface properties");
                    }
                    Err(e) => debug!(error = %e, "Could not list player interface properties"),
                }
            }
        }

        let context = CommandContext {
            player: player.as_ref(),
            verbose: invocation.verbose,
        };

        self.registry
            .execute(&invocation.command, &context, &invocation.args, out)
            .await
    }
}
