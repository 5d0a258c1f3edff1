//! 十二平均律音高表 (A4 = 440Hz)，取整到 Hz

use car_melody_common::Pitch;

pub const REST: Pitch = Pitch::Rest;

pub const NOTE_B0: Pitch = Pitch::Hz(31);

pub const NOTE_C1: Pitch = Pitch::Hz(33);
pub const NOTE_CS1: Pitch = Pitch::Hz(35);
pub const NOTE_D1: Pitch = Pitch::Hz(37);
pub const NOTE_DS1: Pitch = Pitch::Hz(39);
pub const NOTE_E1: Pitch = Pitch::Hz(41);
pub const NOTE_F1: Pitch = Pitch::Hz(44);
pub const NOTE_FS1: Pitch = Pitch::Hz(46);
pub const NOTE_G1: Pitch = Pitch::Hz(49);
pub const NOTE_GS1: Pitch = Pitch::Hz(52);
pub const NOTE_A1: Pitch = Pitch::Hz(55);
pub const NOTE_AS1: Pitch = Pitch::Hz(58);
pub const NOTE_B1: Pitch = Pitch::Hz(62);

pub const NOTE_C2: Pitch = Pitch::Hz(65);
pub const NOTE_CS2: Pitch = Pitch::Hz(69);
pub const NOTE_D2: Pitch = Pitch::Hz(73);
pub const NOTE_DS2: Pitch = Pitch::Hz(78);
pub const NOTE_E2: Pitch = Pitch::Hz(82);
pub const NOTE_F2: Pitch = Pitch::Hz(87);
pub const NOTE_FS2: Pitch = Pitch::Hz(93);
pub const NOTE_G2: Pitch = Pitch::Hz(98);
pub const NOTE_GS2: Pitch = Pitch::Hz(104);
pub const NOTE_A2: Pitch = Pitch::Hz(110);
pub const NOTE_AS2: Pitch = Pitch::Hz(117);
pub const NOTE_B2: Pitch = Pitch::Hz(123);

pub const NOTE_C3: Pitch = Pitch::Hz(131);
pub const NOTE_CS3: Pitch = Pitch::Hz(139);
pub const NOTE_D3: Pitch = Pitch::Hz(147);
pub const NOTE_DS3: Pitch = Pitch::Hz(156);
pub const NOTE_E3: Pitch = Pitch::Hz(165);
pub const NOTE_F3: Pitch = Pitch::Hz(175);
pub const NOTE_FS3: Pitch = Pitch::Hz(185);
pub const NOTE_G3: Pitch = Pitch::Hz(196);
pub const NOTE_GS3: Pitch = Pitch::Hz(208);
pub const NOTE_A3: Pitch = Pitch::Hz(220);
pub const NOTE_AS3: Pitch = Pitch::Hz(233);
pub const NOTE_B3: Pitch = Pitch::Hz(247);

pub const NOTE_C4: Pitch = Pitch::Hz(262);
pub const NOTE_CS4: Pitch = Pitch::Hz(277);
pub const NOTE_D4: Pitch = Pitch::Hz(294);
pub const NOTE_DS4: Pitch = Pitch::Hz(311);
pub const NOTE_E4: Pitch = Pitch::Hz(330);
pub const NOTE_F4: Pitch = Pitch::Hz(349);
pub const NOTE_FS4: Pitch = Pitch::Hz(370);
pub const NOTE_G4: Pitch = Pitch::Hz(392);
pub const NOTE_GS4: Pitch = Pitch::Hz(415);
pub const NOTE_A4: Pitch = Pitch::Hz(440);
pub const NOTE_AS4: Pitch = Pitch::Hz(466);
pub const NOTE_B4: Pitch = Pitch::Hz(494);

pub const NOTE_C5: Pitch = Pitch::Hz(523);
pub const NOTE_CS5: Pitch = Pitch::Hz(554);
pub const NOTE_D5: Pitch = Pitch::Hz(587);
pub const NOTE_DS5: Pitch = Pitch::Hz(622);
pub const NOTE_E5: Pitch = Pitch::Hz(659);
pub const NOTE_F5: Pitch = Pitch::Hz(698);
pub const NOTE_FS5: Pitch = Pitch::Hz(740);
pub const NOTE_G5: Pitch = Pitch::Hz(784);
pub const NOTE_GS5: Pitch = Pitch::Hz(831);
pub const NOTE_A5: Pitch = Pitch::Hz(880);
pub const NOTE_AS5: Pitch = Pitch::Hz(932);
pub const NOTE_B5: Pitch = Pitch::Hz(988);

pub const NOTE_C6: Pitch = Pitch::Hz(1047);
pub const NOTE_CS6: Pitch = Pitch::Hz(1109);
pub const NOTE_D6: Pitch = Pitch::Hz(1175);
pub const NOTE_DS6: Pitch = Pitch::Hz(1245);
pub const NOTE_E6: Pitch = Pitch::Hz(1319);
pub const NOTE_F6: Pitch = Pitch::Hz(1397);
pub const NOTE_FS6: Pitch = Pitch::Hz(1480);
pub const NOTE_G6: Pitch = Pitch::Hz(1568);
pub const NOTE_GS6: Pitch = Pitch::Hz(1661);
pub const NOTE_A6: Pitch = Pitch::Hz(1760);
pub const NOTE_AS6: Pitch = Pitch::Hz(1865);
pub const NOTE_B6: Pitch = Pitch::Hz(1976);

pub const NOTE_C7: Pitch = Pitch::Hz(2093);
pub const NOTE_CS7: Pitch = Pitch::Hz(2217);
pub const NOTE_D7: Pitch = Pitch::Hz(2349);
pub const NOTE_DS7: Pitch = Pitch::Hz(2489);
pub const NOTE_E7: Pitch = Pitch::Hz(2637);
pub const NOTE_F7: Pitch = Pitch::Hz(2794);
pub const NOTE_FS7: Pitch = Pitch::Hz(2960);
pub const NOTE_G7: Pitch = Pitch::Hz(3136);
pub const NOTE_GS7: Pitch = Pitch::Hz(3322);
pub const NOTE_A7: Pitch = Pitch::Hz(3520);
pub const NOTE_AS7: Pitch = Pitch::Hz(3729);
pub const NOTE_B7: Pitch = Pitch::Hz(3951);

pub const NOTE_C8: Pitch = Pitch::Hz(4186);
pub const NOTE_CS8: Pitch = Pitch::Hz(4435);
pub const NOTE_D8: Pitch = Pitch::Hz(4699);
pub const NOTE_DS8: Pitch = Pitch::Hz(4978);
