//! 跨执行上下文共享的播放标志
//!
//! 中断处理函数或指令分发线程只能通过这里请求停止，
//! 真正的停止动作（关闭蜂鸣器）推迟到下一次 `tick()` 在主循环中执行。

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

pub struct PlaybackFlags {
    playing: AtomicBool,
    stop_request: Signal<CriticalSectionRawMutex, ()>,
}

impl PlaybackFlags {
    pub const fn new() -> Self {
        Self {
            playing: AtomicBool::new(false),
            stop_request: Signal::new(),
        }
    }

    /// 请求停止播放，可在任意上下文调用，不会触碰蜂鸣器
    pub fn request_stop(&self) {
        self.playing.store(false, Ordering::Release);
        self.stop_request.signal(());
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    pub fn stop_pending(&self) -> bool {
        self.stop_request.signaled()
    }

    /// 开始新的播放: 丢弃尚未处理的停止请求
    pub(crate) fn arm(&self) {
        self.stop_request.reset();
        self.playing.store(true, Ordering::Release);
    }

    /// 主循环内已完成停止，丢弃尚未处理的停止请求
    pub(crate) fn disarm(&self) {
        self.stop_request.reset();
        self.playing.store(false, Ordering::Release);
    }

    pub(crate) fn finish(&self) {
        self.playing.store(false, Ordering::Release);
    }

    pub(crate) fn take_stop_request(&self) -> bool {
        self.stop_request.try_take().is_some()
    }
}

impl Default for PlaybackFlags {
    fn default() -> Self {
        Self::new()
    }
}
