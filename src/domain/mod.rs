// ==========================================
// 运输计算器 - 领域模型层
// ==========================================
// 职责: 定义产品目录、费率表、装运与报价实体
// 红线: 不含加载逻辑, 不含引擎逻辑
// ==========================================

pub mod product;
pub mod rate_table;
pub mod shipment;
pub mod types;

// 重导出核心类型
pub use product::{Catalog, Product, Variant};
pub use rate_table::{RateCell, RateTable, RateTableSet};
pub use shipment::{
    composition_summary, Combination, Composition, OrderLine, PalletizationResult, PricedOption,
    QuoteRequest, QuoteResult, ShipmentAggregate, ValidLine, ValidatedRequest,
};
pub use types::{TransportMode, CARTON_LABEL};
