use car_melody_common::{ToneDriver, debug, trace};

/// 把蜂鸣器动作写进日志的模拟驱动
#[derive(Debug, Default)]
pub struct SimulatorBuzzer {
    sounding: Option<u32>,
}

impl SimulatorBuzzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sounding(&self) -> Option<u32> {
        self.sounding
    }
}

impl ToneDriver for SimulatorBuzzer {
    type Error = core::convert::Infallible;

    fn emit(&mut self, frequency_hz: u32, duration_ms: u32) -> Result<(), Self::Error> {
        debug!(
            "[Simulator Buzzer] Playing {}Hz for {}ms",
            frequency_hz, duration_ms
        );
        self.sounding = Some(frequency_hz);
        Ok(())
    }

    fn silence(&mut self) -> Result<(), Self::Error> {
        if let Some(frequency_hz) = self.sounding.take() {
            trace!("[Simulator Buzzer] {}Hz off", frequency_hz);
        }
        Ok(())
    }

    fn set_idle_state(&mut self) -> Result<(), Self::Error> {
        trace!("[Simulator Buzzer] Pin low");
        Ok(())
    }
}
