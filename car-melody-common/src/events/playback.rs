use crate::types::Song;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackEvent {
    Started(Song),
    Stopped(Song),
    Completed(Song),
}

impl PlaybackEvent {
    pub const fn song(&self) -> Song {
        match self {
            PlaybackEvent::Started(song)
            | PlaybackEvent::Stopped(song)
            | PlaybackEvent::Completed(song) => *song,
        }
    }
}
