#![no_std]

use car_melody_common::{Song, SongTable, Track};

/// `[(pitch, divisor), ...]` 展开为 `[Note; N]`
macro_rules! notes {
    ($(($pitch:expr, $divisor:expr)),* $(,)?) => {
        [$(Note::new($pitch, $divisor)),*]
    };
}

pub mod pitches;
pub mod tracks;

pub use tracks::{GAME_OF_THRONES, PIRATES, SQUID_GAME};

/// 固件内置的三首曲目
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSongs;

impl SongTable for BuiltinSongs {
    fn track(&self, song: Song) -> Option<&'static Track> {
        match song {
            Song::None => None,
            Song::Pirates => Some(&PIRATES),
            Song::GameOfThrones => Some(&GAME_OF_THRONES),
            Song::SquidGame => Some(&SQUID_GAME),
        }
    }
}
