#![cfg_attr(not(test), no_std)]

pub mod drivers;
pub mod services;

pub use drivers::{EmbassyClock, GatedBuzzer};
pub use services::{CompactPlay, MelodyPlayer, Phase, PlaybackFlags, decode_compact};
