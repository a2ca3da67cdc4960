// ==========================================
// 运输计算器 - 引擎编排器
// ==========================================
// 用途: 协调各引擎的执行顺序
// 流程: 逐行装托选择 → 整单汇总 → 运输方案排序
// 红线: 目录与费率表显式传入, 不读取任何全局状态
// ==========================================

use crate::domain::product::Catalog;
use crate::domain::rate_table::RateTableSet;
use crate::domain::shipment::{QuoteResult, ValidatedRequest};
use crate::engine::aggregator::ShipmentAggregator;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::palletization::PalletizationSelector;
use crate::engine::rate_resolver::RateResolver;
use crate::engine::transport_ranker::{split_ranked, TransportOptionRanker};
use tracing::{debug, info, warn};

// ==========================================
// QuoteOrchestrator - 报价编排器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct QuoteOrchestrator {
    selector: PalletizationSelector,
}

impl QuoteOrchestrator {
    pub fn new() -> Self {
        Self {
            selector: PalletizationSelector::new(),
        }
    }

    /// 执行完整报价流程
    ///
    /// # 参数
    /// - catalog: 产品目录（只读）
    /// - tables: 费率表（只读）
    /// - request: 已校验请求
    ///
    /// # 返回
    /// - Ok(QuoteResult): 报价结果（可能无可用报价, 见 `is_priced`）
    /// - Err(NoFeasiblePackaging): 所有参考号均无法装托
    pub fn quote(
        &self,
        catalog: &Catalog,
        tables: &RateTableSet,
        request: &ValidatedRequest,
    ) -> EngineResult<QuoteResult> {
        info!(
            department = request.department,
            lines = request.lines.len(),
            "开始计算运输报价"
        );

        // ==========================================
        // 步骤1: 逐参考号装托选择（保持输入顺序）
        // ==========================================
        let mut results = Vec::with_capacity(request.lines.len());
        let mut unresolved = Vec::new();
        for line in &request.lines {
            match self.selector.select(catalog, &line.reference, line.quantity) {
                Some(result) => results.push(Some(result)),
                None => {
                    warn!(reference = %line.reference, quantity = line.quantity, "参考号无法装托, 已剔除");
                    unresolved.push(line.reference.clone());
                }
            }
        }

        if results.is_empty() {
            return Err(EngineError::NoFeasiblePackaging {
                references: unresolved,
            });
        }

        // ==========================================
        // 步骤2: 整单汇总
        // ==========================================
        let aggregate = ShipmentAggregator::aggregate(results);
        debug!(
            weight_kg = aggregate.total_weight_kg,
            height_cm = aggregate.max_height_cm,
            cartons = aggregate.carton_count,
            pallets = aggregate.pallet_count(),
            "整单汇总完成"
        );

        // ==========================================
        // 步骤3: 运输方案排序
        // ==========================================
        let ranker = TransportOptionRanker::new(catalog, RateResolver::new(tables));
        let options = ranker.rank(request.department, &aggregate, request.is_multi_reference());
        let (selected, alternatives) = split_ranked(options);

        match &selected {
            Some(option) => info!(
                mode = %option.mode,
                price = option.price,
                alternatives = alternatives.len(),
                "报价完成"
            ),
            None => warn!("无可用费率, 仅返回汇总信息"),
        }

        Ok(QuoteResult {
            department: request.department,
            selected,
            alternatives,
            aggregate,
            unresolved_references: unresolved,
        })
    }
}
