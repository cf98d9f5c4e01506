use serde::{Deserialize, Serialize};

/// 歌曲条目 - 歌单中的一条记录
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Song {
    /// 歌曲唯一标识符
    pub id: u32,
    /// 歌曲标题
    pub title: String,
    /// 歌手
    pub artist: String,
    /// 发行年份（四位数）
    pub year: i32,
    /// 标签列表，保持原始顺序，不去重
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Song {
    /// 创建新的歌曲条目
    pub fn new(
        id: u32,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        tags: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            year,
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        }
    }
}

/// 筛选条件 - 客户端当前的查询状态
///
/// 三个条件互相独立，空值表示不启用该条件。缺失的 JSON 字段按空值处理。
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SongQuery {
    /// 标题/歌手关键词 (不区分大小写)
    pub text_query: String,
    /// 发行年份 (精确匹配)，`None` 或空字符串表示全部年份
    pub year_filter: Option<String>,
    /// 标签关键词 (子串匹配，区分大小写)
    pub tag_filter: String,
}

impl SongQuery {
    /// 创建空的筛选条件
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_query = text.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year_filter = Some(year.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag_filter = tag.into();
        self
    }

    /// 当前生效的年份条件
    pub fn active_year(&self) -> Option<&str> {
        self.year_filter.as_deref().filter(|year| !year.is_empty())
    }

    /// 是否没有任何生效的条件
    pub fn is_empty(&self) -> bool {
        self.text_query.is_empty() && self.active_year().is_none() && self.tag_filter.is_empty()
    }

    /// 清空所有条件
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_to_empty() {
        let query = SongQuery::new();
        assert!(query.is_empty());
        assert_eq!(query.active_year(), None);
    }

    #[test]
    fn empty_year_string_is_inactive() {
        let query = SongQuery::new().with_year("");
        assert_eq!(query.active_year(), None);
        assert!(query.is_empty());

        let query = SongQuery::new().with_year("2019");
        assert_eq!(query.active_year(), Some("2019"));
        assert!(!query.is_empty());
    }

    #[test]
    fn reset_clears_every_field() {
        let mut query = SongQuery::new().with_text("아이유").with_year("2019").with_tag("발라드");
        query.reset();
        assert_eq!(query, SongQuery::default());
    }

    #[test]
    fn query_json_uses_camel_case_and_defaults() {
        let query: SongQuery = serde_json::from_str(r#"{"textQuery":"blue"}"#).unwrap();
        assert_eq!(query, SongQuery::new().with_text("blue"));

        let query: SongQuery =
            serde_json::from_str(r#"{"yearFilter":"2021","tagFilter":"여름"}"#).unwrap();
        assert_eq!(query.active_year(), Some("2021"));
        assert_eq!(query.tag_filter, "여름");
        assert!(query.text_query.is_empty());

        let query: SongQuery = serde_json::from_str(r#"{"yearFilter":null}"#).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn song_without_tags_deserializes() {
        let song: Song =
            serde_json::from_str(r#"{"id":7,"title":"t","artist":"a","year":1999}"#).unwrap();
        assert!(song.tags.is_empty());
        assert_eq!(song, Song::new(7, "t", "a", 1999, &[]));
    }
}
