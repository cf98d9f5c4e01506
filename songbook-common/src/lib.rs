pub mod catalog;
pub mod filter;
pub mod models;

// 重新导出常用类型和函数，方便直接使用
pub use catalog::{Catalog, CatalogError};
pub use filter::{distinct_tags, distinct_years, filter_records, quick_tags, QUICK_TAG_LIMIT};
pub use models::{Song, SongQuery};
