mod general;
mod loading;
mod paths;
mod player;


pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use player::PlayerConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for mprisctl.
///
/// Read from `config.toml` in the config directory. Every section is
/// optional; a missing file means defaults everywhere.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Player selection settings.
    #[serde(default)]
    pub player: PlayerConfig,
}
