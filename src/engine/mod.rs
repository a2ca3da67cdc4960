// ==========================================
// 运输计算器 - 引擎层
// ==========================================
// 职责: 装托组合、装托选择、整单汇总、费率查询、方案排序
// 红线: 引擎不做 I/O, 目录与费率表只读借用
// ==========================================

pub mod aggregator;
pub mod combination;
pub mod error;
pub mod mode_eligibility;
pub mod orchestrator;
pub mod palletization;
pub mod rate_resolver;
pub mod transport_ranker;

// 重导出核心引擎
pub use aggregator::ShipmentAggregator;
pub use combination::CombinationGenerator;
pub use error::{EngineError, EngineResult};
pub use mode_eligibility::ModeEligibility;
pub use orchestrator::QuoteOrchestrator;
pub use palletization::PalletizationSelector;
pub use rate_resolver::RateResolver;
pub use transport_ranker::TransportOptionRanker;
