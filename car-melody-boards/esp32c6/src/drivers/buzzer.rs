//! 无源蜂鸣器驱动
//!
//! 使用 LEDC 低速定时器 0 / 通道 0 在 GPIO7 上输出方波。LEDC 配置后会一直输出，
//! 音符时长由播放器在边界处调用 `silence()` 控制。

use car_melody_common::ToneDriver;
use esp_hal::gpio::DriveMode;
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::peripherals::GPIO7;
use esp_hal::time::Rate;

/// 静音时定时器保持的频率
const IDLE_FREQUENCY_HZ: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerError {
    Timer,
    Channel,
}

pub struct Esp32Buzzer {
    ledc: Ledc<'static>,
    pin: GPIO7<'static>,
    frequency_hz: u32,
}

impl Esp32Buzzer {
    pub fn new(mut ledc: Ledc<'static>, pin: GPIO7<'static>) -> Self {
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
        Self {
            ledc,
            pin,
            frequency_hz: IDLE_FREQUENCY_HZ,
        }
    }

    fn drive(&mut self, frequency_hz: u32, duty_pct: u8) -> Result<(), BuzzerError> {
        let mut timer = self.ledc.timer::<LowSpeed>(timer::Number::Timer0);
        timer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty10Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_hz(frequency_hz),
            })
            .map_err(|_| BuzzerError::Timer)?;

        let mut ch = self
            .ledc
            .channel(channel::Number::Channel0, self.pin.reborrow());
        ch.configure(channel::config::Config {
            timer: &timer,
            duty_pct,
            drive_mode: DriveMode::PushPull,
        })
        .map_err(|_| BuzzerError::Channel)?;

        self.frequency_hz = frequency_hz;
        Ok(())
    }
}

impl ToneDriver for Esp32Buzzer {
    type Error = BuzzerError;

    fn emit(&mut self, frequency_hz: u32, _duration_ms: u32) -> Result<(), Self::Error> {
        self.drive(frequency_hz, 50)
    }

    fn silence(&mut self) -> Result<(), Self::Error> {
        self.drive(self.frequency_hz, 0)
    }

    /// 推挽输出 0% 占空比即为持续低电平
    fn set_idle_state(&mut self) -> Result<(), Self::Error> {
        self.drive(IDLE_FREQUENCY_HZ, 0)
    }
}
