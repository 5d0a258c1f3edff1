use crate::types::{DEFAULT_PAUSE_PERMILLE, MAX_PAUSE_PERMILLE, MelodyError, MelodyResult};

/// 播放器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerConfig {
    pub enabled: bool,
    /// 音符间停顿占音符时长的千分比，只能通过 `with_pause_permille` 设置
    pause_permille: u16,
}

impl PlayerConfig {
    pub const fn new() -> Self {
        Self {
            enabled: true,
            pause_permille: DEFAULT_PAUSE_PERMILLE,
        }
    }

    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub const fn with_pause_permille(mut self, pause_permille: u16) -> MelodyResult<Self> {
        if pause_permille > MAX_PAUSE_PERMILLE {
            return Err(MelodyError::InvalidConfig);
        }
        self.pause_permille = pause_permille;
        Ok(self)
    }

    pub const fn pause_permille(&self) -> u16 {
        self.pause_permille
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}
