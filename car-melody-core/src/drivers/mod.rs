mod embassy_clock;
mod gated_buzzer;

pub use embassy_clock::EmbassyClock;
pub use gated_buzzer::GatedBuzzer;
