use crate::filter::{distinct_tags, distinct_years, filter_records};
use crate::models::{Song, SongQuery};
use std::collections::HashSet;
use thiserror::Error;

/// 歌单构建错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("歌曲ID重复: {0}")]
    DuplicateId(u32),
}

/// 歌单 - 固定不变的歌曲集合，ID 唯一
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// 从歌曲列表创建歌单，拒绝重复 ID
    pub fn new(songs: Vec<Song>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(songs.len());
        if let Some(duplicate) = songs.iter().find(|song| !ids.insert(song.id)) {
            return Err(CatalogError::DuplicateId(duplicate.id));
        }
        Ok(Self { songs })
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// 按条件筛选歌曲
    pub fn filter(&self, query: &SongQuery) -> Vec<Song> {
        filter_records(&self.songs, query)
    }

    pub fn years(&self) -> Vec<i32> {
        distinct_years(&self.songs)
    }

    pub fn tags(&self) -> Vec<String> {
        distinct_tags(&self.songs)
    }
}
