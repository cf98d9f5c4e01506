use crate::models::{Song, SongQuery};
use std::collections::{BTreeSet, HashSet};

/// 快捷标签按钮的数量
pub const QUICK_TAG_LIMIT: usize = 6;

/// 预处理后的筛选条件，避免对每首歌重复转换关键词
struct QueryMatcher<'a> {
    text: Option<String>,
    year: Option<&'a str>,
    tag: Option<&'a str>,
}

impl<'a> QueryMatcher<'a> {
    fn new(query: &'a SongQuery) -> Self {
        Self {
            text: (!query.text_query.is_empty()).then(|| query.text_query.to_lowercase()),
            year: query.active_year(),
            tag: Some(query.tag_filter.as_str()).filter(|tag| !tag.is_empty()),
        }
    }

    fn matches(&self, song: &Song) -> bool {
        self.hit_text(song) && self.hit_year(song) && self.hit_tag(song)
    }

    // 标题或歌手包含关键词
    fn hit_text(&self, song: &Song) -> bool {
        match &self.text {
            Some(needle) => {
                song.title.to_lowercase().contains(needle.as_str())
                    || song.artist.to_lowercase().contains(needle.as_str())
            }
            None => true,
        }
    }

    // 年份按十进制字符串精确比较，"2019" 不会命中 2009
    fn hit_year(&self, song: &Song) -> bool {
        self.year.map_or(true, |year| song.year.to_string() == year)
    }

    fn hit_tag(&self, song: &Song) -> bool {
        self.tag
            .map_or(true, |tag| song.tags.iter().any(|candidate| candidate.contains(tag)))
    }
}

impl SongQuery {
    /// 判断单首歌曲是否满足全部条件
    pub fn matches(&self, song: &Song) -> bool {
        QueryMatcher::new(self).matches(song)
    }
}

/// 筛选歌曲，保持原有顺序
pub fn filter_records(records: &[Song], query: &SongQuery) -> Vec<Song> {
    let matcher = QueryMatcher::new(query);
    records
        .iter()
        .filter(|song| matcher.matches(song))
        .cloned()
        .collect()
}

/// 所有出现过的年份，去重后按新到旧排列
pub fn distinct_years(records: &[Song]) -> Vec<i32> {
    records
        .iter()
        .map(|song| song.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// 所有出现过的标签，去重后按首次出现的顺序排列
pub fn distinct_tags(records: &[Song]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for tag in records.iter().flat_map(|song| &song.tags) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// 前 `limit` 个标签，用于快捷筛选按钮
pub fn quick_tags(records: &[Song], limit: usize) -> Vec<String> {
    let mut tags = distinct_tags(records);
    tags.truncate(limit);
    tags
}
