// ==========================================
// 运输计算器 - 单参考号装托选择引擎
// ==========================================
// 职责: 为单个参考号选择最终装托方式
// 输入: 目录 + 参考号 + 数量
// 输出: PalletizationResult 或 None (无法装托)
// ==========================================
// 优先级（严格顺序）:
// 0. 无可装托变体 (仅纸箱或容量 ≤ 0) → 无法装托, 纸箱也不走 DPD
// 1. DPD 快捷路径: 一个纸箱装得下且纸箱授权 DPD → 直接返回
// 2. 生成候选方案, 按重量/容量判定每个方案可选运输方式
// 3. 在所有 (方案 × 运输方式) 中取托盘数最少、浪费最少者
// ==========================================

use crate::domain::product::{Catalog, Product};
use crate::domain::shipment::PalletizationResult;
use crate::domain::types::{TransportMode, CARTON_LABEL};
use crate::engine::combination::CombinationGenerator;
use crate::engine::mode_eligibility::ModeEligibility;
use tracing::{debug, instrument};

// ==========================================
// PalletizationSelector - 装托选择器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct PalletizationSelector {
    generator: CombinationGenerator,
}

impl PalletizationSelector {
    pub fn new() -> Self {
        Self {
            generator: CombinationGenerator::new(),
        }
    }

    /// 为参考号选择装托方式
    ///
    /// # 返回
    /// - Some(result): 选中的装托结果
    /// - None: 参考号未知 / 无可装托变体 / 候选为空
    #[instrument(skip(self, catalog))]
    pub fn select(
        &self,
        catalog: &Catalog,
        reference: &str,
        quantity: u32,
    ) -> Option<PalletizationResult> {
        let Some(product) = catalog.get(reference) else {
            debug!("参考号不在目录中");
            return None;
        };
        if quantity == 0 {
            return None;
        }

        let Some(max_capacity) = product.max_pallet_capacity() else {
            debug!("无可装托变体");
            return None;
        };

        // 1. DPD 快捷路径
        if let Some(result) = dpd_shortcut(product, quantity) {
            debug!(weight_kg = result.total_weight_kg, "DPD 快捷路径");
            return Some(result);
        }

        // 2. 候选方案
        let fits_largest_pallet = quantity <= max_capacity;
        let combinations = self.generator.generate_for_product(product, quantity);

        // 3. (方案 × 运输方式) 评分, 取托盘数最少、浪费最少; 同分保留先出现者
        let mut best: Option<PalletizationResult> = None;
        for combination in &combinations {
            for &mode in ModeEligibility::for_reference(combination.total_weight_kg, fits_largest_pallet) {
                let better = match &best {
                    None => true,
                    Some(current) => {
                        (combination.pallet_count, combination.waste)
                            < (current.pallet_count, current.waste)
                    }
                };
                if better {
                    best = Some(PalletizationResult {
                        reference: product.reference.clone(),
                        quantity,
                        composition: combination.composition.clone(),
                        mode,
                        total_weight_kg: combination.total_weight_kg,
                        height_cm: combination.max_height_cm,
                        pallet_count: combination.pallet_count,
                        waste: combination.waste,
                        details: combination.details.clone(),
                    });
                }
            }
        }

        match &best {
            Some(result) => debug!(
                mode = %result.mode,
                pallets = result.pallet_count,
                waste = result.waste,
                "装托方案已选定"
            ),
            None => debug!("无可用装托方案"),
        }
        best
    }
}

/// DPD 快捷路径: 纸箱容量 > 0、数量 ≤ 容量、授权 DPD
fn dpd_shortcut(product: &Product, quantity: u32) -> Option<PalletizationResult> {
    let carton = product.carton_variant()?;
    if carton.pieces_per_unit <= 0
        || quantity > carton.pieces_per_unit as u32
        || !carton.authorizes_dpd()
    {
        return None;
    }

    Some(PalletizationResult {
        reference: product.reference.clone(),
        quantity,
        composition: vec![(CARTON_LABEL.to_string(), 1)],
        mode: TransportMode::Dpd,
        total_weight_kg: quantity as f64 * product.unit_weight_kg + carton.pallet_weight_kg,
        height_cm: carton.height_cm,
        pallet_count: 1,
        waste: 0,
        details: format!("1 colis DPD ({} pièces)", quantity),
    })
}
