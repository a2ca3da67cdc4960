// ==========================================
// 运输计算器 - 配置层
// ==========================================
// 职责: 请求级配置加载与校验
// ==========================================

pub mod pricing_config;

pub use pricing_config::{PricingConfig, CONFIG_PATH_ENV};
