use car_melody_common::Clock;
use embassy_time::Instant;

/// 基于 embassy-time 的毫秒时钟，截断到 u32 后自然回绕（约 49.7 天）
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
