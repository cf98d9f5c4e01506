use serde::Serialize;
use songbook_common::{quick_tags, Catalog, Song, QUICK_TAG_LIMIT};

/// 筛选结果 - 返回给客户端的歌曲列表
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// 筛选后的歌曲，保持歌单顺序
    pub songs: Vec<Song>,
    /// 命中数量
    pub total: usize,
}

impl FilterResult {
    pub fn new(songs: Vec<Song>) -> Self {
        let total = songs.len();
        Self { songs, total }
    }

    /// 没有命中任何歌曲，页面据此显示提示
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// 筛选选项 - 年份下拉框与标签按钮所需的数据，由完整歌单推导
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// 年份，新到旧
    pub years: Vec<i32>,
    /// 全部标签，按首次出现顺序
    pub tags: Vec<String>,
    /// 快捷标签
    pub quick_tags: Vec<String>,
}

impl FilterOptions {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            years: catalog.years(),
            tags: catalog.tags(),
            quick_tags: quick_tags(catalog.songs(), QUICK_TAG_LIMIT),
        }
    }
}
