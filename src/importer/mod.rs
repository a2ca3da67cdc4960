// ==========================================
// 运输计算器 - 导入模块
// ==========================================
// 职责: 产品表 / 费率表 → 领域模型
// ==========================================

pub mod catalog_loader;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod rate_table_loader;

pub use catalog_loader::CatalogLoader;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper, ProductRow};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawGrid, UniversalFileParser};
pub use rate_table_loader::RateTableLoader;
