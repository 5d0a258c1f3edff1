//! 曲目标识

/// 内置曲目
///
/// 编号与遥控协议中的 play 指令一致: 0=停止, 1=加勒比海盗, 2=权力的游戏, 3=鱿鱼游戏。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Song {
    #[default]
    None = 0,
    Pirates = 1,
    GameOfThrones = 2,
    SquidGame = 3,
}

impl Song {
    /// 所有可播放的曲目（不含 `None`）
    pub const ALL: [Song; 3] = [Song::Pirates, Song::GameOfThrones, Song::SquidGame];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Song::None),
            1 => Some(Song::Pirates),
            2 => Some(Song::GameOfThrones),
            3 => Some(Song::SquidGame),
            _ => None,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Song::None)
    }

    /// 指令中使用的动作名
    pub const fn action(self) -> &'static str {
        match self {
            Song::None => "none",
            Song::Pirates => "pirates",
            Song::GameOfThrones => "got",
            Song::SquidGame => "squid",
        }
    }

    /// 状态栏短标签
    pub const fn tag(self) -> &'static str {
        match self {
            Song::None => "♪stp",
            Song::Pirates => "♪pir",
            Song::GameOfThrones => "♪got",
            Song::SquidGame => "♪sq",
        }
    }

    pub fn from_action(name: &str) -> Option<Self> {
        Song::ALL.into_iter().find(|song| song.action() == name)
    }
}
