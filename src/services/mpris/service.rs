use std::collections::HashMap;

use async_trait::async_trait;
use zbus::zvariant::OwnedValue;

use super::{MediaError, Metadata, PlaybackStatus};

/// Operations the command layer needs from a bound media player
///
/// Implemented by [`MprisPlayer`](super::MprisPlayer) over D-Bus. Commands
/// only ever see this trait.
#[async_trait]
pub trait MediaPlayer: Send + Sync {
    /// Bus name of the service this player is bound to
    fn name(&self) -> &str;

    /// Whether the optional Playlists interface answered the probe
    fn supports_playlists(&self) -> bool;

    /// Whether the optional TrackList interface answered the probe
    fn supports_tracklist(&self) -> bool;

    /// Current `PlaybackStatus`
    ///
    /// # Errors
    /// Returns `MediaError` if the property can't be read or isn't a string
    async fn playback_status(&self) -> Result<PlaybackStatus, MediaError>;

    /// Current track `Metadata`
    ///
    /// # Errors
    /// Returns `MediaError` if the property can't be read or isn't a dictionary
    async fn metadata(&self) -> Result<Metadata, MediaError>;

    /// Current `Position` in microseconds
    ///
    /// # Errors
    /// Returns `MediaError` if the property can't be read or isn't an integer
    async fn position(&self) -> Result<i64, MediaError>;

    /// Every property of the player interface
    ///
    /// # Errors
    /// Returns `MediaError` if the remote `GetAll` fails
    async fn player_properties(&self) -> Result<HashMap<String, OwnedValue>, MediaError>;

    /// Start playback
    ///
    /// # Errors
    /// Returns `MediaError` if the remote call fails
    async fn play(&self) -> Result<(), MediaError>;

    /// Pause playback
    ///
    /// # Errors
    /// Returns `MediaError` if the remote call fails
    async fn pause(&self) -> Result<(), MediaError>;

    /// Stop playback
    ///
    /// # Errors
    /// Returns `MediaError` if the remote call fails
    async fn stop(&self) -> Result<(), MediaError>;

    /// Toggle between playing and paused
    ///
    /// # Errors
    /// Returns `MediaError` if the remote call fails
    async fn play_pause(&self) -> Result<(), MediaError>;

    /// Open and play `uri`
    ///
    /// # Errors
    /// Returns `MediaError::UnsupportedMethod` when the player doesn't
    /// implement `OpenUri`, `MediaError` for any other failure
    async fn open_uri(&self, uri: &str) -> Result<(), MediaError>;
}

/// Discovery of MPRIS services and binding to one of them
#[async_trait]
pub trait PlayerConnector: Send + Sync {
    /// Bus names of every registered MPRIS service, in bus order
    ///
    /// # Errors
    /// Returns `MediaError` if the bus can't be reached or listed
    async fn list_services(&self) -> Result<Vec<String>, MediaError>;

    /// Binds a player handle to the service called `name`
    ///
    /// # Errors
    /// Returns `MediaError` if proxies can't be created or probing fails
    async fn connect(&self, name: &str) -> Result<Box<dyn MediaPlayer>, MediaError>;
}
