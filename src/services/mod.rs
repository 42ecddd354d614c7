/// MPRIS media player control service
pub mod mpris;

pub use mpris::{MediaPlayer, PlayerConnector, SessionBus};
