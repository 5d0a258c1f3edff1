//! 加勒比海盗 (Pirates of the Caribbean)
//!
//! 乐谱来源: HiBit <https://www.hibit.dev>

use car_melody_common::{Note, Track};

use crate::pitches::*;

static NOTES: [Note; 203] = notes![
    (NOTE_E4, 8), (NOTE_G4, 8), (NOTE_A4, 4), (NOTE_A4, 8), (REST, 8), (NOTE_A4, 8),
    (NOTE_B4, 8), (NOTE_C5, 4), (NOTE_C5, 8), (REST, 8), (NOTE_C5, 8), (NOTE_D5, 8),
    (NOTE_B4, 4), (NOTE_B4, 8), (REST, 8), (NOTE_A4, 8), (NOTE_G4, 8), (NOTE_A4, 4),
    (REST, 8),

    (NOTE_E4, 8), (NOTE_G4, 8), (NOTE_A4, 4), (NOTE_A4, 8), (REST, 8), (NOTE_A4, 8),
    (NOTE_B4, 8), (NOTE_C5, 4), (NOTE_C5, 8), (REST, 8), (NOTE_C5, 8), (NOTE_D5, 8),
    (NOTE_B4, 4), (NOTE_B4, 8), (REST, 8), (NOTE_A4, 8), (NOTE_G4, 8), (NOTE_A4, 4),
    (REST, 8),

    (NOTE_E4, 8), (NOTE_G4, 8), (NOTE_A4, 4), (NOTE_A4, 8), (REST, 8), (NOTE_A4, 8),
    (NOTE_C5, 8), (NOTE_D5, 4), (NOTE_D5, 8), (REST, 8), (NOTE_D5, 8), (NOTE_E5, 8),
    (NOTE_F5, 4), (NOTE_F5, 8), (REST, 8), (NOTE_E5, 8), (NOTE_D5, 8), (NOTE_E5, 8),
    (NOTE_A4, 4), (REST, 8),

    (NOTE_A4, 8), (NOTE_B4, 8), (NOTE_C5, 4), (NOTE_C5, 8), (REST, 8), (NOTE_D5, 4),
    (NOTE_E5, 8), (NOTE_A4, 4), (REST, 8), (NOTE_A4, 8), (NOTE_C5, 8), (NOTE_B4, 4),
    (NOTE_B4, 8), (REST, 8), (NOTE_C5, 8), (NOTE_A4, 8), (NOTE_B4, 4), (REST, 4),

    (NOTE_A4, 4), (NOTE_A4, 8), (NOTE_A4, 8), (NOTE_B4, 8), (NOTE_C5, 4), (NOTE_C5, 8),
    (REST, 8), (NOTE_C5, 8), (NOTE_D5, 8), (NOTE_B4, 4), (NOTE_B4, 8), (REST, 8),
    (NOTE_A4, 8), (NOTE_G4, 8), (NOTE_A4, 4), (REST, 8),

    (NOTE_E4, 8), (NOTE_G4, 8), (NOTE_A4, 4), (NOTE_A4, 8), (REST, 8), (NOTE_A4, 8),
    (NOTE_B4, 8), (NOTE_C5, 4), (NOTE_C5, 8), (REST, 8), (NOTE_C5, 8), (NOTE_D5, 8),
    (NOTE_B4, 4), (NOTE_B4, 8), (REST, 8), (NOTE_A4, 8), (NOTE_G4, 8), (NOTE_A4, 4),
    (REST, 8),

    (NOTE_E4, 8), (NOTE_G4, 8), (NOTE_A4, 4), (NOTE_A4, 8), (REST, 8), (NOTE_A4, 8),
    (NOTE_C5, 8), (NOTE_D5, 4), (NOTE_D5, 8), (REST, 8), (NOTE_D5, 8), (NOTE_E5, 8),
    (NOTE_F5, 4), (NOTE_F5, 8), (REST, 8), (NOTE_E5, 8), (NOTE_D5, 8), (NOTE_E5, 8),
    (NOTE_A4, 4), (REST, 8),

    (NOTE_A4, 8), (NOTE_B4, 8), (NOTE_C5, 4), (NOTE_C5, 8), (REST, 8), (NOTE_D5, 4),
    (NOTE_E5, 8), (NOTE_A4, 4), (REST, 8), (NOTE_A4, 8), (NOTE_C5, 8), (NOTE_B4, 4),
    (NOTE_B4, 8), (REST, 8), (NOTE_C5, 8), (NOTE_A4, 8), (NOTE_B4, 4), (REST, 4),

    (NOTE_E5, 4), (REST, 8), (REST, 4), (NOTE_F5, 4), (REST, 8), (REST, 4),
    (NOTE_E5, 8), (NOTE_E5, 8), (REST, 8), (NOTE_G5, 8), (REST, 8), (NOTE_E5, 8),
    (NOTE_D5, 8), (REST, 8), (REST, 4), (NOTE_D5, 4), (REST, 8), (REST, 4),
    (NOTE_C5, 4), (REST, 8), (REST, 4), (NOTE_B4, 8), (NOTE_C5, 8), (REST, 8),
    (NOTE_B4, 8), (REST, 8), (NOTE_A4, 2),

    (NOTE_E5, 4), (REST, 8), (REST, 4), (NOTE_F5, 4), (REST, 8), (REST, 4),
    (NOTE_E5, 8), (NOTE_E5, 8), (REST, 8), (NOTE_G5, 8), (REST, 8), (NOTE_E5, 8),
    (NOTE_D5, 8), (REST, 8), (REST, 4), (NOTE_D5, 4), (REST, 8), (REST, 4),
    (NOTE_C5, 4), (REST, 8), (REST, 4), (NOTE_B4, 8), (NOTE_C5, 8), (REST, 8),
    (NOTE_B4, 8), (REST, 8), (NOTE_A4, 2),
];

pub static PIRATES: Track = Track::new(&NOTES, 1);
