use car_melody_common::Clock;
use esp_hal::time::Instant;

#[derive(Debug, Clone, Copy, Default)]
pub struct BoardClock;

impl Clock for BoardClock {
    fn now_ms(&self) -> u32 {
        Instant::now().duration_since_epoch().as_millis() as u32
    }
}
