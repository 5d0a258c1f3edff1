//! 权力的游戏 (Game of Thrones)
//!
//! 乐谱来源: HiBit <https://www.hibit.dev>
//! 原曲较慢，节拍倍率为 2。

use car_melody_common::{Note, Track};

use crate::pitches::*;

static NOTES: [Note; 130] = notes![
    (NOTE_G4, 8), (NOTE_C4, 8), (NOTE_DS4, 16), (NOTE_F4, 16), (NOTE_G4, 8), (NOTE_C4, 8),
    (NOTE_DS4, 16), (NOTE_F4, 16), (NOTE_G4, 8), (NOTE_C4, 8), (NOTE_DS4, 16), (NOTE_F4, 16),
    (NOTE_G4, 8), (NOTE_C4, 8), (NOTE_DS4, 16), (NOTE_F4, 16), (NOTE_G4, 8), (NOTE_C4, 8),
    (NOTE_E4, 16), (NOTE_F4, 16), (NOTE_G4, 8), (NOTE_C4, 8), (NOTE_E4, 16), (NOTE_F4, 16),
    (NOTE_G4, 8), (NOTE_C4, 8), (NOTE_E4, 16), (NOTE_F4, 16), (NOTE_G4, 8), (NOTE_C4, 8),
    (NOTE_E4, 16), (NOTE_F4, 16), (NOTE_G4, 4), (NOTE_C4, 4),

    (NOTE_DS4, 16), (NOTE_F4, 16), (NOTE_G4, 4), (NOTE_C4, 4), (NOTE_DS4, 16), (NOTE_F4, 16),
    (NOTE_D4, 1), (NOTE_F4, 4), (NOTE_AS3, 4), (NOTE_DS4, 16), (NOTE_D4, 16), (NOTE_F4, 4),
    (NOTE_AS3, 4), (NOTE_DS4, 16), (NOTE_D4, 16), (NOTE_C4, 1),

    (NOTE_G4, 4), (NOTE_C4, 4),

    (NOTE_DS4, 16), (NOTE_F4, 16), (NOTE_G4, 4), (NOTE_C4, 4), (NOTE_DS4, 16), (NOTE_F4, 16),
    (NOTE_D4, 1), (NOTE_F4, 4), (NOTE_AS3, 4), (NOTE_DS4, 16), (NOTE_D4, 16), (NOTE_F4, 4),
    (NOTE_AS3, 4), (NOTE_DS4, 16), (NOTE_D4, 16), (NOTE_C4, 1), (NOTE_G4, 4), (NOTE_C4, 4),
    (NOTE_DS4, 16), (NOTE_F4, 16), (NOTE_G4, 4), (NOTE_C4, 4), (NOTE_DS4, 16), (NOTE_F4, 16),

    (NOTE_D4, 2), (NOTE_F4, 4), (NOTE_AS3, 4), (NOTE_D4, 8), (NOTE_DS4, 8), (NOTE_D4, 8),
    (NOTE_AS3, 8), (NOTE_C4, 1), (NOTE_C5, 2), (NOTE_AS4, 2), (NOTE_C4, 2), (NOTE_G4, 2),
    (NOTE_DS4, 2), (NOTE_DS4, 4), (NOTE_F4, 4), (NOTE_G4, 1),

    (NOTE_C5, 2), (NOTE_AS4, 2), (NOTE_C4, 2), (NOTE_G4, 2), (NOTE_DS4, 2), (NOTE_DS4, 4),
    (NOTE_D4, 4), (NOTE_C5, 8), (NOTE_G4, 8), (NOTE_GS4, 16), (NOTE_AS4, 16), (NOTE_C5, 8),
    (NOTE_G4, 8), (NOTE_GS4, 16), (NOTE_AS4, 16), (NOTE_C5, 8), (NOTE_G4, 8), (NOTE_GS4, 16),
    (NOTE_AS4, 16), (NOTE_C5, 8), (NOTE_G4, 8), (NOTE_GS4, 16), (NOTE_AS4, 16),

    (REST, 4), (NOTE_GS5, 16), (NOTE_AS5, 16), (NOTE_C6, 8), (NOTE_G5, 8), (NOTE_GS5, 16),
    (NOTE_AS5, 16), (NOTE_C6, 8), (NOTE_G5, 16), (NOTE_GS5, 16), (NOTE_AS5, 16), (NOTE_C6, 8),
    (NOTE_G5, 8), (NOTE_GS5, 16), (NOTE_AS5, 16),
];

pub static GAME_OF_THRONES: Track = Track::new(&NOTES, 2);
