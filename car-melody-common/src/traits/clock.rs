/// 毫秒时钟
///
/// 单调递增，允许在 `u32::MAX` 处回绕，调用方必须用 `wrapping_sub` 计算间隔。
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// 从 `since` 到 `now` 经过的毫秒数，跨越回绕点时依然正确
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
