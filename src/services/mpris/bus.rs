use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};
use zbus::{Connection, fdo};

use super::{MPRIS_PREFIX, MediaError, MediaPlayer, MprisPlayer, PlayerConnector};

/// Session bus context shared by everything in one invocation
///
/// The connection is opened on first use, so invocations that never need
/// the bus (like listing the command catalogue) never touch it.
#[derive(Default)]
pub struct SessionBus {
    connection: OnceCell<Connection>,
}

impl SessionBus {
    /// Creates a context that connects to the session bus lazily
    pub fn new() -> Self {
        Self::default()
    }

    /// The session bus connection, opening it if needed
    ///
    /// # Errors
    /// Returns `MediaError::DbusError` if the session bus isn't reachable
    pub async fn connection(&self) -> Result<&Connection, MediaError> {
        let connection = self
            .connection
            .get_or_try_init(|| async {
                debug!("Connecting to session bus");
                Connection::session().await
            })
            .await?;

        Ok(connection)
    }
}

/// Keeps the names that belong to MPRIS services, preserving their order
pub fn filter_services<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|name| name.as_ref().starts_with(MPRIS_PREFIX))
        .map(|name| name.as_ref().to_string())
        .collect()
}

#[async_trait]
impl PlayerConnector for SessionBus {
    #[instrument(skip(self), err)]
    async fn list_services(&self) -> Result<Vec<String>, MediaError> {
        let dbus_proxy = fdo::DBusProxy::new(self.connection().await?).await?;
        let names = dbus_proxy.list_names().await?;

        let services = filter_services(names.iter().map(ToString::to_string));
        debug!(count = services.len(), "Discovered MPRIS services");

        Ok(services)
    }

    async fn connect(&self, name: &str) -> Result<Box<dyn MediaPlayer>, MediaError> {
        let player = MprisPlayer::connect(self.connection().await?, name).await?;
        Ok(Box::new(player))
    }
}
