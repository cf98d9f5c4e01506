use wasm_bindgen::prelude::*;
use once_cell::sync::OnceCell;
use serde::Serialize;
use songbook_common::{Catalog, SongQuery};

// 导出模块
pub mod demo;
pub mod error;
pub mod models;
mod console;

pub use error::FilterError;
pub use models::{FilterOptions, FilterResult};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 歌单与由它推导出的筛选选项，加载后不再变化
struct SongbookIndex {
    catalog: Catalog,
    options: FilterOptions,
}

// 全局歌单存储
static INDEX: OnceCell<SongbookIndex> = OnceCell::new();

/// 初始化函数 - 设置错误处理
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 版本信息
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// 歌曲过滤器 - 基于全局歌单的筛选逻辑
pub struct SongFilter;

impl SongFilter {
    // 首次访问时加载演示歌单
    fn index() -> Result<&'static SongbookIndex, FilterError> {
        INDEX.get_or_try_init(|| {
            let catalog = Catalog::new(demo::demo_songs())?;
            let options = FilterOptions::from_catalog(&catalog);
            console::log(&format!(
                "歌单加载完成，歌曲数量: {}, 年份数量: {}, 标签数量: {}",
                catalog.len(),
                options.years.len(),
                options.tags.len()
            ));
            Ok(SongbookIndex { catalog, options })
        })
    }

    /// 完整歌单
    pub fn catalog() -> Result<&'static Catalog, FilterError> {
        Ok(&Self::index()?.catalog)
    }

    /// 年份、标签与快捷标签
    pub fn options() -> Result<&'static FilterOptions, FilterError> {
        Ok(&Self::index()?.options)
    }

    /// 筛选歌曲
    pub fn filter_songs(query: &SongQuery) -> Result<FilterResult, FilterError> {
        let catalog = Self::catalog()?;
        Ok(FilterResult::new(catalog.filter(query)))
    }

    /// 解析客户端传来的 JSON 筛选参数，空白字符串视为空条件
    pub fn parse_query(query_json: &str) -> Result<SongQuery, FilterError> {
        if query_json.trim().is_empty() {
            return Ok(SongQuery::new());
        }
        Ok(serde_json::from_str(query_json)?)
    }
}

// 序列化为 JS 值
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, FilterError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

// 记录错误并转换为 JS 异常
fn js_error(err: FilterError) -> JsValue {
    let message = err.to_string();
    console::error(&message);
    JsValue::from_str(&message)
}

/// 歌曲过滤器JS接口 - 无状态的筛选API
#[wasm_bindgen]
pub struct SongFilterJS;

#[wasm_bindgen]
impl SongFilterJS {
    /// 初始化过滤器并加载歌单
    #[wasm_bindgen]
    pub fn init() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        SongFilter::index().map(|_| ()).map_err(js_error)
    }

    /// 筛选歌曲，参数为 `{"textQuery", "yearFilter", "tagFilter"}` 格式的 JSON
    #[wasm_bindgen]
    pub fn filter_songs(query_json: &str) -> Result<JsValue, JsValue> {
        let result = SongFilter::parse_query(query_json)
            .and_then(|query| SongFilter::filter_songs(&query))
            .map_err(js_error)?;
        to_js(&result).map_err(js_error)
    }

    /// 获取完整歌单
    #[wasm_bindgen]
    pub fn get_all_songs() -> Result<JsValue, JsValue> {
        let catalog = SongFilter::catalog().map_err(js_error)?;
        to_js(&catalog.songs()).map_err(js_error)
    }

    /// 获取所有年份 (新到旧)
    #[wasm_bindgen]
    pub fn get_years() -> Result<JsValue, JsValue> {
        let options = SongFilter::options().map_err(js_error)?;
        to_js(&options.years).map_err(js_error)
    }

    /// 获取所有标签
    #[wasm_bindgen]
    pub fn get_tags() -> Result<JsValue, JsValue> {
        let options = SongFilter::options().map_err(js_error)?;
        to_js(&options.tags).map_err(js_error)
    }

    /// 获取快捷标签
    #[wasm_bindgen]
    pub fn get_quick_tags() -> Result<JsValue, JsValue> {
        let options = SongFilter::options().map_err(js_error)?;
        to_js(&options.quick_tags).map_err(js_error)
    }
}

/// 歌单视图 - 持有一次页面会话的筛选条件
///
/// 条件随用户输入原地修改，每次读取 `visible` 时重新计算结果。
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct SongbookView {
    query: SongQuery,
}

#[wasm_bindgen]
impl SongbookView {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SongbookView {
        SongbookView {
            query: SongQuery::new(),
        }
    }

    /// 设置标题/歌手关键词
    pub fn set_text(&mut self, text: String) {
        self.query.text_query = text;
    }

    /// 设置年份，`undefined` 或空字符串表示全部年份
    pub fn set_year(&mut self, year: Option<String>) {
        self.query.year_filter = year;
    }

    /// 设置标签关键词
    pub fn set_tag(&mut self, tag: String) {
        self.query.tag_filter = tag;
    }

    /// 初始化所有条件
    pub fn reset(&mut self) {
        self.query.reset();
    }

    /// 是否有生效的筛选条件
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty()
    }

    /// 当前筛选条件
    pub fn query(&self) -> Result<JsValue, JsValue> {
        to_js(&self.query).map_err(js_error)
    }

    /// 当前条件下的歌曲列表
    pub fn visible(&self) -> Result<JsValue, JsValue> {
        let result = self.current_result().map_err(js_error)?;
        to_js(&result).map_err(js_error)
    }

    /// 年份、标签与快捷标签
    pub fn options(&self) -> Result<JsValue, JsValue> {
        let options = SongFilter::options().map_err(js_error)?;
        to_js(options).map_err(js_error)
    }
}

impl SongbookView {
    pub fn current_query(&self) -> &SongQuery {
        &self.query
    }

    pub fn current_result(&self) -> Result<FilterResult, FilterError> {
        SongFilter::filter_songs(&self.query)
    }
}
