mod buzzer;
mod clock;

pub use buzzer::{BuzzerError, Esp32Buzzer};
pub use clock::BoardClock;
