// ==========================================
// 运输计算器 - 整单汇总引擎
// ==========================================
// 职责: 将各参考号装托结果折叠为整单汇总
// 规则: 重量求和, 高度取最大, DPD 计纸箱数, 其余按托盘类型累加
// 红线: 纯函数, 输入顺序仅影响明细列表顺序, 不影响合计
// ==========================================

use crate::domain::shipment::{PalletizationResult, ShipmentAggregate};

pub struct ShipmentAggregator;

impl ShipmentAggregator {
    /// 汇总装托结果（跳过 None 项）
    pub fn aggregate<I>(results: I) -> ShipmentAggregate
    where
        I: IntoIterator<Item = Option<PalletizationResult>>,
    {
        results
            .into_iter()
            .flatten()
            .fold(ShipmentAggregate::default(), |mut aggregate, result| {
                aggregate.total_weight_kg += result.total_weight_kg;
                aggregate.max_height_cm = aggregate.max_height_cm.max(result.height_cm);

                if result.is_dpd() {
                    aggregate.carton_count += result.pallet_count;
                } else {
                    for (pallet_type, count) in &result.composition {
                        aggregate.add_composition(pallet_type, *count);
                    }
                }

                aggregate.results.push(result);
                aggregate
            })
    }
}
