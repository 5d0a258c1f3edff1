pub mod buzzer;
pub mod clock;
pub mod observer;
pub mod song_table;

pub use buzzer::*;
pub use clock::*;
pub use observer::*;
pub use song_table::*;
