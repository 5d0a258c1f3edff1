//! 播放事件定义模块
//!
//! 区分自然播放结束 (Completed) 与被停止 (Stopped)，
//! 便于上层在状态栏或日志中展示。

pub mod playback;
pub use playback::PlaybackEvent;
