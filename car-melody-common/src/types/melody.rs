//! 音符和旋律定义

/// 默认音符间停顿: 音符时长的 30%
pub const DEFAULT_PAUSE_PERMILLE: u16 = 300;

/// 停顿不能长于音符本身
pub const MAX_PAUSE_PERMILLE: u16 = 1000;

/// 音高
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pitch {
    /// 休止符，该时值内保持静音
    Rest,
    Hz(u16),
}

impl Pitch {
    pub const fn frequency(self) -> Option<u32> {
        match self {
            Pitch::Rest => None,
            Pitch::Hz(hz) => Some(hz as u32),
        }
    }

    pub const fn is_rest(self) -> bool {
        matches!(self, Pitch::Rest)
    }
}

/// 音符
///
/// `divisor` 是相对时值: 1=全音符, 2=二分音符, 4=四分音符, 8=八分音符 ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub pitch: Pitch,
    pub divisor: u8,
}

impl Note {
    pub const fn new(pitch: Pitch, divisor: u8) -> Self {
        assert!(divisor > 0, "note divisor must be positive");
        Self { pitch, divisor }
    }

    /// 计算音符时长和随后的停顿
    ///
    /// note_ms = 1000 * tempo_multiplier / divisor，停顿按千分比截断取整，
    /// 超过 [`MAX_PAUSE_PERMILLE`] 的千分比按上限计算。
    pub const fn timing(&self, tempo_multiplier: u8, pause_permille: u16) -> NoteTiming {
        let permille = if pause_permille > MAX_PAUSE_PERMILLE {
            MAX_PAUSE_PERMILLE
        } else {
            pause_permille
        };
        let note_ms = (1000 * tempo_multiplier as u32) / self.divisor as u32;
        let pause_ms = note_ms * permille as u32 / 1000;
        NoteTiming { note_ms, pause_ms }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoteTiming {
    pub note_ms: u32,
    pub pause_ms: u32,
}

impl NoteTiming {
    pub const fn total_ms(&self) -> u32 {
        self.note_ms + self.pause_ms
    }
}

/// 一首曲目的音符序列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    notes: &'static [Note],
    tempo_multiplier: u8,
}

impl Track {
    pub const fn new(notes: &'static [Note], tempo_multiplier: u8) -> Self {
        assert!(!notes.is_empty(), "track must contain at least one note");
        assert!(tempo_multiplier >= 1, "tempo multiplier must be at least 1");
        Self {
            notes,
            tempo_multiplier,
        }
    }

    pub const fn len(&self) -> usize {
        self.notes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub const fn notes(&self) -> &'static [Note] {
        self.notes
    }

    pub const fn tempo_multiplier(&self) -> u8 {
        self.tempo_multiplier
    }

    pub fn get(&self, index: usize) -> Option<&'static Note> {
        self.notes.get(index)
    }

    pub fn timing_at(&self, index: usize, pause_permille: u16) -> Option<NoteTiming> {
        self.get(index)
            .map(|note| note.timing(self.tempo_multiplier, pause_permille))
    }

    /// 完整播放一遍（含每个音符后的停顿）所需的毫秒数
    pub fn duration_ms(&self, pause_permille: u16) -> u32 {
        self.notes
            .iter()
            .map(|note| note.timing(self.tempo_multiplier, pause_permille).total_ms())
            .sum()
    }
}
