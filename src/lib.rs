// ==========================================
// 运输计算器 - 核心库
// ==========================================
// 职责: 按产品目录与费率表计算装托方案与运输报价
// 运输方式: 快递 (DPD) / 零担 (Messagerie) / 托盘包价 (Forfait palette) / 整车 (Affrètement)
// 系统定位: 报价辅助 (纯计算, 无持久化)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 装托与定价规则
pub mod engine;

// 导入层 - 产品表与费率表
pub mod importer;

// 配置层 - 请求级配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 报价接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{TransportMode, CARTON_LABEL};

// 领域实体
pub use domain::{
    Catalog, OrderLine, PalletizationResult, PricedOption, Product, QuoteRequest, QuoteResult,
    RateTable, RateTableSet, ShipmentAggregate, Variant,
};

// 引擎
pub use engine::{
    CombinationGenerator, PalletizationSelector, QuoteOrchestrator, RateResolver,
    ShipmentAggregator, TransportOptionRanker,
};

// API
pub use api::{ApiError, ApiResult, QuoteApi};

// 配置
pub use config::PricingConfig;

// 导入
pub use importer::{CatalogLoader, ImportError, RateTableLoader};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "运输计算器";
