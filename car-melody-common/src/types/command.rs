//! 遥控 play 指令

use core::str::FromStr;

use crate::types::{MelodyError, Song};

/// 遥控协议中的播放指令类型码
pub const CMD_PLAY: u8 = 4;

/// play 指令中的停止码
pub const PLAY_STOP: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayCommand {
    Play(Song),
    Stop,
}

impl PlayCommand {
    pub const fn from_code(code: u8) -> Option<Self> {
        if code == PLAY_STOP {
            return Some(PlayCommand::Stop);
        }
        match Song::from_code(code) {
            Some(song) => Some(PlayCommand::Play(song)),
            None => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            PlayCommand::Play(song) => song.code(),
            PlayCommand::Stop => PLAY_STOP,
        }
    }
}

impl TryFrom<u8> for PlayCommand {
    type Error = MelodyError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        PlayCommand::from_code(code).ok_or(MelodyError::UnknownSong(code))
    }
}

impl FromStr for PlayCommand {
    type Err = MelodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "stop" {
            return Ok(PlayCommand::Stop);
        }
        Song::from_action(s)
            .map(PlayCommand::Play)
            .ok_or(MelodyError::UnknownAction)
    }
}
