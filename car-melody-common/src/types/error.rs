use thiserror::Error;

pub type MelodyResult<T> = core::result::Result<T, MelodyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MelodyError {
    #[error("unknown song code {0}")]
    UnknownSong(u8),
    #[error("unknown play action")]
    UnknownAction,
    #[error("command type {0} is not a play command")]
    NotAPlayCommand(u8),
    #[error("malformed command")]
    MalformedCommand,
    #[error("invalid player configuration")]
    InvalidConfig,
}
