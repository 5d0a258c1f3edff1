//! 鱿鱼游戏 (Squid Game)
//!
//! 乐谱来源: HiBit <https://www.hibit.dev>

use car_melody_common::{Note, Track};

use crate::pitches::*;

static NOTES: [Note; 54] = notes![
    (NOTE_F4, 6), (NOTE_F4, 6), (NOTE_F4, 6), (NOTE_D4, 4), (NOTE_DS4, 6), (NOTE_F4, 2),
    (REST, 3), (NOTE_F4, 6), (NOTE_F4, 6), (NOTE_F4, 6), (NOTE_D4, 4), (NOTE_DS4, 6),
    (NOTE_F4, 2), (REST, 3), (NOTE_G4, 4), (NOTE_G4, 6), (NOTE_G4, 4), (NOTE_A4, 6),
    (NOTE_AS4, 4), (NOTE_AS4, 6), (NOTE_A4, 4), (NOTE_G4, 6), (NOTE_F4, 4), (NOTE_F4, 6),
    (NOTE_F4, 4), (NOTE_G4, 6), (NOTE_F4, 2), (REST, 3),

    (NOTE_F4, 6), (NOTE_F4, 6), (NOTE_F4, 6), (NOTE_D4, 4), (NOTE_DS4, 6), (NOTE_F4, 2),
    (REST, 3), (NOTE_F4, 6), (NOTE_F4, 6), (NOTE_F4, 6), (NOTE_D4, 4), (NOTE_DS4, 6),
    (NOTE_F4, 2), (REST, 3), (NOTE_G4, 4), (NOTE_G4, 6), (NOTE_G4, 4), (NOTE_C5, 6),
    (NOTE_AS4, 4), (NOTE_A4, 6), (NOTE_G4, 4), (NOTE_A4, 6), (NOTE_AS4, 2), (NOTE_AS4, 2),
    (NOTE_AS4, 2),

    (REST, 1),
];

pub static SQUID_GAME: Track = Track::new(&NOTES, 1);
