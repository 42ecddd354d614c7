use std::fmt;

/// Playback status as reported by the `PlaybackStatus` property
///
/// Only `Playing` and `Paused` are distinguished; any other token is kept
/// verbatim so it can be shown back to the user unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Stopped, or anything else the player reported
    Other(String),
}

impl PlaybackStatus {
    /// Whether the status has a meaningful track position
    pub fn has_position(&self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

impl From<&str> for PlaybackStatus {
    fn from(status: &str) -> Self {
        match status {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for PlaybackStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            _ => Self::Other(status),
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "Playing"),
            Self::Paused => write!(f, "Paused"),
            Self::Other(status) => write!(f, "{status}"),
        }
    }
}
