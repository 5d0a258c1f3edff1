use crate::types::{Song, Track};

/// 曲目表: 曲目标识到音轨的只读映射
pub trait SongTable {
    /// `Song::None` 以及表中没有的曲目返回 `None`
    fn track(&self, song: Song) -> Option<&'static Track>;
}

impl<T: SongTable + ?Sized> SongTable for &T {
    fn track(&self, song: Song) -> Option<&'static Track> {
        (**self).track(song)
    }
}
