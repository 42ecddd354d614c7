/// Session bus context and service directory
pub mod bus;
/// Track length formatting
pub mod duration;
/// Media player error types
pub mod error;
/// Track metadata types
pub mod metadata;
/// Player handle bound to a single MPRIS service
pub mod player;
/// D-Bus proxy trait definitions
pub mod proxy;
/// Transport seam traits
pub mod service;
/// Playback state types
pub mod types;

pub use bus::*;
pub use duration::*;
pub use error::*;
pub use metadata::*;
pub use player::*;
pub use proxy::*;
pub use service::*;
pub use types::*;
