// ==========================================
// 运输计算器 - 装运领域模型
// ==========================================
// 职责: 单次计算请求内派生的瞬态对象
// - Combination: 单参考号的候选装托方案
// - PalletizationResult: 单参考号的最终装托结果
// - ShipmentAggregate: 整单汇总
// - PricedOption: 某运输方式下的报价
// 红线: 全部对象按请求新建, 不跨请求缓存
// ==========================================

use crate::domain::types::{TransportMode, CARTON_LABEL};
use serde::{Deserialize, Serialize};

/// 托盘构成: 有序的 (托盘类型, 数量) 列表
pub type Composition = Vec<(String, u32)>;

/// 构成摘要, 如 "1x100x120, 2x80x120"
pub fn composition_summary(composition: &[(String, u32)]) -> String {
    composition
        .iter()
        .map(|(pallet_type, count)| format!("{}x{}", count, pallet_type))
        .collect::<Vec<_>>()
        .join(", ")
}

// ==========================================
// Combination - 候选装托方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub composition: Composition,
    pub pallet_count: u32,     // 托盘总数
    pub total_weight_kg: f64,  // 货物 + 空托盘重量
    pub max_height_cm: f64,    // 所用变体中的最大高度
    pub waste: u32,            // 装载容量 - 需求数量
    pub details: String,       // 可读描述
}

// ==========================================
// PalletizationResult - 单参考号装托结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletizationResult {
    pub reference: String,
    pub quantity: u32,
    pub composition: Composition,
    pub mode: TransportMode,
    pub total_weight_kg: f64,
    pub height_cm: f64,
    pub pallet_count: u32,
    pub waste: u32,
    pub details: String,
}

impl PalletizationResult {
    pub fn is_dpd(&self) -> bool {
        self.mode == TransportMode::Dpd
    }
}

// ==========================================
// ShipmentAggregate - 整单汇总
// ==========================================
// 不变量:
// - total_weight_kg = Σ results.total_weight_kg
// - max_height_cm = max(results.height_cm)
// - carton_count = Σ DPD 结果的 pallet_count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentAggregate {
    pub composition: Composition, // 全局托盘构成 (不含纸箱)
    pub total_weight_kg: f64,
    pub max_height_cm: f64,
    pub carton_count: u32,
    pub results: Vec<PalletizationResult>,
}

impl ShipmentAggregate {
    /// 托盘总数（不含纸箱）
    pub fn pallet_count(&self) -> u32 {
        self.composition.iter().map(|(_, count)| count).sum()
    }

    pub fn has_pallets(&self) -> bool {
        !self.composition.is_empty()
    }

    pub fn has_cartons(&self) -> bool {
        self.carton_count > 0
    }

    /// DPD 结果的重量合计
    pub fn dpd_weight_kg(&self) -> f64 {
        self.results
            .iter()
            .filter(|r| r.is_dpd())
            .map(|r| r.total_weight_kg)
            .sum()
    }

    pub(crate) fn add_composition(&mut self, pallet_type: &str, count: u32) {
        if pallet_type == CARTON_LABEL {
            return;
        }
        match self
            .composition
            .iter_mut()
            .find(|(existing, _)| existing == pallet_type)
        {
            Some((_, total)) => *total += count,
            None => self.composition.push((pallet_type.to_string(), count)),
        }
    }
}

// ==========================================
// PricedOption - 运输报价
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedOption {
    pub mode: TransportMode,
    pub price: f64,
    pub weight_basis_kg: f64, // 计价重量
    pub details: String,      // 构成/件数摘要
}

// ==========================================
// 请求 / 响应
// ==========================================

/// 订单行（原始输入, 未校验）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub reference: String,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(reference: &str, quantity: i64) -> Self {
        Self {
            reference: reference.to_string(),
            quantity,
        }
    }
}

/// 报价请求（原始输入, 未校验）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub department: i32,
    pub lines: Vec<OrderLine>,
}

/// 校验后的订单行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidLine {
    pub reference: String,
    pub quantity: u32,
}

/// 校验后的请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRequest {
    pub department: u32,
    pub lines: Vec<ValidLine>,
}

impl ValidatedRequest {
    /// 是否多参考号订单（按有效订单行数判断）
    pub fn is_multi_reference(&self) -> bool {
        self.lines.len() > 1
    }
}

/// 报价结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub department: u32,
    pub selected: Option<PricedOption>,
    pub alternatives: Vec<PricedOption>,
    pub aggregate: ShipmentAggregate,
    pub unresolved_references: Vec<String>,
}

impl QuoteResult {
    /// 是否至少有一个可用报价（否则为"无法报价", 仍保留汇总信息供诊断）
    pub fn is_priced(&self) -> bool {
        self.selected.is_some()
    }
}
