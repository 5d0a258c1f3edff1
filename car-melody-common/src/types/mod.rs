pub mod command;
pub mod config;
pub mod error;
pub mod melody;
pub mod song;

pub use command::*;
pub use config::*;
pub use error::*;
pub use melody::*;
pub use song::*;
