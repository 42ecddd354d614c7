use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, instrument};
use zbus::{Connection, proxy::CacheProperties, zvariant::OwnedValue};

use super::{
    MediaError, MediaPlayer, MediaPlayer2PlayerProxy, Metadata, MprisPropertiesProxy,
    PLAYER_INTERFACE, PLAYLISTS_INTERFACE, PlaybackStatus, TRACKLIST_INTERFACE,
};

/// Handle to one MPRIS service on the session bus
///
/// The player interface is assumed to exist. The track-list and playlists
/// interfaces are probed once when the handle is created.
pub struct MprisPlayer {
    name: String,
    player: MediaPlayer2PlayerProxy<'static>,
    properties: MprisPropertiesProxy<'static>,
    has_tracklist: bool,
    has_playlists: bool,
}

/// Decides what a probe read says about an optional interface
///
/// A value means the interface is there, a "not found" error means it
/// isn't. Every other error is passed on.
///
/// # Errors
/// Returns the read error unless it is a "not found" error
pub fn interface_present(
    interface: &str,
    read: Result<OwnedValue, MediaError>,
) -> Result<bool, MediaError> {
    match read {
        Ok(_) => Ok(true),
        Err(e) if e.is_not_found() => {
            debug!(interface, error = %e, "Optional interface not available");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

impl MprisPlayer {
    /// Binds the player for `name` and probes the optional interfaces
    ///
    /// # Errors
    /// Returns `MediaError` if a proxy can't be built, or if a probe fails
    /// for any reason other than the interface being absent
    #[instrument(skip(connection), err)]
    pub async fn connect(connection: &Connection, name: &str) -> Result<Self, MediaError> {
        let player = MediaPlayer2PlayerProxy::builder(connection)
            .destination(name.to_owned())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;
        let properties = MprisPropertiesProxy::builder(connection)
            .destination(name.to_owned())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        let mut handle = Self {
            name: name.to_string(),
            player,
            properties,
            has_tracklist: false,
            has_playlists: false,
        };

        handle.has_playlists = interface_present(
            PLAYLISTS_INTERFACE,
            handle.get_playlists_property("PlaylistCount").await,
        )?;
        handle.has_tracklist = interface_present(
            TRACKLIST_INTERFACE,
            handle.get_tracklist_property("CanEditTracks").await,
        )?;

        debug!(
            playlists = handle.has_playlists,
            tracklist = handle.has_tracklist,
            "Bound MPRIS player"
        );

        Ok(handle)
    }

    async fn get_property(&self, interface: &str, name: &str) -> Result<OwnedValue, MediaError> {
        Ok(self.properties.get(interface, name).await?)
    }

    /// Reads a property of the player interface
    ///
    /// # Errors
    /// Returns `MediaError` if the property doesn't exist or the call fails
    pub async fn get_player_property(&self, name: &str) -> Result<OwnedValue, MediaError> {
        self.get_property(PLAYER_INTERFACE, name).await
    }

    /// Reads a property of the playlists interface
    ///
    /// # Errors
    /// Returns `MediaError` if the property doesn't exist or the call fails
    pub async fn get_playlists_property(&self, name: &str) -> Result<OwnedValue, MediaError> {
        self.get_property(PLAYLISTS_INTERFACE, name).await
    }

    /// Reads a property of the track-list interface
    ///
    /// # Errors
    /// Returns `MediaError` if the property doesn't exist or the call fails
    pub async fn get_tracklist_property(&self, name: &str) -> Result<OwnedValue, MediaError> {
        self.get_property(TRACKLIST_INTERFACE, name).await
    }

    fn invalid_value(property: &str, error: impl std::fmt::Display) -> MediaError {
        MediaError::InvalidValue {
            property: property.to_string(),
            details: error.to_string(),
        }
    }
}

#[async_trait]
impl MediaPlayer for MprisPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports_playlists(&self) -> bool {
        self.has_playlists
    }

    fn supports_tracklist(&self) -> bool {
        self.has_tracklist
    }

    #[instrument(skip(self), fields(service = %self.name), err)]
    async fn playback_status(&self) -> Result<PlaybackStatus, MediaError> {
        let value = self.get_player_property("PlaybackStatus").await?;
        let status =
            String::try_from(value).map_err(|e| Self::invalid_value("PlaybackStatus", e))?;

        Ok(PlaybackStatus::from(status))
    }

    #[instrument(skip(self), fields(service = %self.name), err)]
    async fn metadata(&self) -> Result<Metadata, MediaError> {
        let value = self.get_player_property("Metadata").await?;

        Metadata::try_from(&*value).map_err(|e| Self::invalid_value("Metadata", e))
    }

    #[instrument(skip(self), fields(service = %self.name), err)]
    async fn position(&self) -> Result<i64, MediaError> {
        let value = self.get_player_property("Position").await?;

        i64::try_from(value).map_err(|e| Self::invalid_value("Position", e))
    }

    #[instrument(skip(self), fields(service = %self.name), err)]
    async fn player_properties(&self) -> Result<HashMap<String, OwnedValue>, MediaError> {
        Ok(self.properties.get_all(PLAYER_INTERFACE).await?)
    }

    #[instrument(skip(self), fields(service = %self.name), err)]
    async fn play(&self) -> Result<(), MediaError> {
        self.player
            .play()
            .await
            .map_err(|e| MediaError::from_call(&self.name, "Play", e))
    }

    #[instrument(skip(self), fields(service = %self.name), err)]
    async fn pause(&self) -> Result<(), MediaError> {
        self.player
            .pause()
            .await
            .map_err(|e| MediaError::from_call(&self.name, "Pause", e))
    }

    #[instrument(skip(self), fields(service = %self.name), err)]
    async fn stop(&self) -> Result<(), MediaError> {
        self.player
            .stop()
            .await
            .map_err(|e| MediaError::from_call(&self.name, "Stop", e))
    }

    #[instrument(skip(self), fields(service = %self.name), err)]
    async fn play_pause(&self) -> Result<(), MediaError> {
        self.player
            .play_pause()
            .await
            .map_err(|e| MediaError::from_call(&self.name, "PlayPause", e))
    }

    #[instrument(skip(self), fields(service = %self.name), err)]
    async fn open_uri(&self, uri: &str) -> Result<(), MediaError> {
        self.player
            .open_uri(uri)
            .await
            .map_err(|e| MediaError::from_call(&self.name, "OpenUri", e))
    }
}
