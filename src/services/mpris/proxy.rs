#![allow(missing_docs)]

use std::collections::HashMap;

use zbus::{fdo, proxy, zvariant::OwnedValue};

/// Bus name prefix shared by every MPRIS2 service
pub const MPRIS_PREFIX: &str = "org.mpris.MediaPlayer2";
/// Playback control interface (mandatory)
pub const PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";
/// Track list interface (optional)
pub const TRACKLIST_INTERFACE: &str = "org.mpris.MediaPlayer2.TrackList";
/// Playlists interface (optional)
pub const PLAYLISTS_INTERFACE: &str = "org.mpris.MediaPlayer2.Playlists";

/// MPRIS MediaPlayer2.Player interface proxy
///
/// Methods return `fdo::Result` so remote error names such as
/// `org.freedesktop.DBus.Error.UnknownMethod` arrive as typed variants.
#[proxy(
    interface = "org.mpris.MediaPlayer2.Player",
    default_path = "/org/mpris/MediaPlayer2"
)]
pub trait MediaPlayer2Player {
    /// Start playback
    fn play(&self) -> fdo::Result<()>;

    /// Pause playback
    fn pause(&self) -> fdo::Result<()>;

    /// Toggle play/pause state
    fn play_pause(&self) -> fdo::Result<()>;

    /// Stop playback
    fn stop(&self) -> fdo::Result<()>;

    /// Open and play a URI
    fn open_uri(&self, uri: &str) -> fdo::Result<()>;
}

/// Generic `org.freedesktop.DBus.Properties` access on the MPRIS object
///
/// Properties are read untyped and by name, which is what the optional
/// interface probes rely on.
#[proxy(
    interface = "org.freedesktop.DBus.Properties",
    default_path = "/org/mpris/MediaPlayer2"
)]
pub trait MprisProperties {
    /// Read a single property of `interface_name`
    fn get(&self, interface_name: &str, property_name: &str) -> fdo::Result<OwnedValue>;

    /// Read every property of `interface_name`
    fn get_all(&self, interface_name: &str) -> fdo::Result<HashMap<String, OwnedValue>>;
}
