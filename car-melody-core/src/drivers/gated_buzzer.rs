//! 有源蜂鸣器驱动
//!
//! 有源蜂鸣器自带振荡电路，只能开关，不能改变音高；频率参数会被忽略。

use car_melody_common::ToneDriver;
use embedded_hal::digital::OutputPin;

pub struct GatedBuzzer<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> GatedBuzzer<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ToneDriver for GatedBuzzer<P> {
    type Error = P::Error;

    fn emit(&mut self, _frequency_hz: u32, _duration_ms: u32) -> Result<(), Self::Error> {
        self.pin.set_high()
    }

    fn silence(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn set_idle_state(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }
}
