use serde::{Deserialize, Serialize};

/// Player selection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Index of the service to use when `--service` isn't given.
    #[serde(default)]
    pub default_service: usize,
}
