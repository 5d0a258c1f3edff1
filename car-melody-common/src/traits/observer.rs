//! 播放事件观察者

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;

use crate::events::PlaybackEvent;

/// 接收播放事件
///
/// 观察者的任何失败都不能影响播放，因此接口没有返回值。
pub trait PlaybackObserver {
    fn on_event(&mut self, event: PlaybackEvent);
}

/// 不需要事件的场景
impl PlaybackObserver for () {
    fn on_event(&mut self, _event: PlaybackEvent) {}
}

/// 推送到事件通道，通道满时丢弃
impl<M: RawMutex, const N: usize> PlaybackObserver for &Channel<M, PlaybackEvent, N> {
    fn on_event(&mut self, event: PlaybackEvent) {
        self.try_send(event).ok();
    }
}
