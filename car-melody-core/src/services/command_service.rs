//! 遥控指令解析
//!
//! 指令以 JSON 数组下发: `[msg, type, ...params]`，这里只处理 play 指令
//! `[msg, 4, song]`，其余类型返回 [`MelodyError::NotAPlayCommand`]。

use core::fmt;

use car_melody_common::*;
use heapless::String;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, SeqAccess, Visitor};

/// 解析后的 play 指令，`message` 是状态栏显示的短文本，例如 "♪pir"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactPlay {
    pub message: String<32>,
    pub command: PlayCommand,
}

struct RawCommand {
    message: String<32>,
    kind: u8,
    song: Option<u8>,
}

impl<'de> Deserialize<'de> for RawCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RawCommandVisitor)
    }
}

struct RawCommandVisitor;

impl<'de> Visitor<'de> for RawCommandVisitor {
    type Value = RawCommand;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a command array [msg, type, ...params]")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RawCommand, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let message: String<32> = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let kind: u8 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;

        // 其他指令的参数（速度、时长等）不一定能放进 u8
        let song = if kind == CMD_PLAY {
            seq.next_element::<u8>()?
        } else {
            None
        };
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(RawCommand {
            message,
            kind,
            song,
        })
    }
}

pub fn decode_compact(bytes: &[u8]) -> MelodyResult<CompactPlay> {
    let raw: RawCommand =
        serde_json::from_slice(bytes).map_err(|_| MelodyError::MalformedCommand)?;

    if raw.kind != CMD_PLAY {
        return Err(MelodyError::NotAPlayCommand(raw.kind));
    }

    let code = raw.song.ok_or(MelodyError::MalformedCommand)?;
    let command = PlayCommand::try_from(code)?;
    debug!("Decoded play command {:?} ({})", command, raw.message.as_str());

    Ok(CompactPlay {
        message: raw.message,
        command,
    })
}
