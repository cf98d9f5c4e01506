use songbook_common::CatalogError;
use thiserror::Error;

/// 筛选接口错误，只出现在与 JS 交互的边界上
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("歌单数据无效: {0}")]
    Catalog(#[from] CatalogError),

    #[error("解析筛选参数失败: {0}")]
    InvalidQuery(#[from] serde_json::Error),

    #[error("序列化结果失败: {0}")]
    Serialization(#[from] serde_wasm_bindgen::Error),
}
