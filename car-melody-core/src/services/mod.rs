mod command_service;
mod melody_service;
mod playback_flags;

pub use command_service::{CompactPlay, decode_compact};
pub use melody_service::{MelodyPlayer, Phase};
pub use playback_flags::PlaybackFlags;
