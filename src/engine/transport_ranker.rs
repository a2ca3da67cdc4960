// ==========================================
// 运输计算器 - 运输方案排序引擎
// ==========================================
// 职责: 按整单汇总判定可选运输方式, 逐一查价并按价格升序排列
// 输入: 省份 + 整单汇总 + 单/多参考号标志
// 输出: PricedOption 列表（最便宜在前）
// ==========================================
// 规则:
// 1. DPD 整单价: 有纸箱且仅单参考号 → 按纸箱容量重新拆箱, 逐箱查价求和
// 2. 多参考号 + 有纸箱 + 无托盘 → 额外提供整单零担价 (≤ 400 kg)
// 3. 有托盘 → 托盘部分重量 = 总重 - DPD 计价重量, 按重量/托盘数/单多参考号判定方式
// 4. 无费率的方式静默剔除; 按价格稳定排序
// ==========================================

use crate::domain::product::Catalog;
use crate::domain::shipment::{composition_summary, PricedOption, ShipmentAggregate};
use crate::domain::types::TransportMode;
use crate::engine::mode_eligibility::{ModeEligibility, MESSAGERIE_MAX_WEIGHT_KG};
use crate::engine::rate_resolver::RateResolver;
use tracing::{debug, instrument};

// ==========================================
// TransportOptionRanker - 运输方案排序器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct TransportOptionRanker<'a> {
    catalog: &'a Catalog,
    resolver: RateResolver<'a>,
}

impl<'a> TransportOptionRanker<'a> {
    pub fn new(catalog: &'a Catalog, resolver: RateResolver<'a>) -> Self {
        Self { catalog, resolver }
    }

    /// 计算并排序全部可用报价
    ///
    /// # 参数
    /// - department: 已校验的省份编号
    /// - aggregate: 整单汇总
    /// - multi_reference: 是否多参考号订单
    #[instrument(skip(self, aggregate), fields(
        weight_kg = aggregate.total_weight_kg,
        cartons = aggregate.carton_count,
        pallets = aggregate.pallet_count()
    ))]
    pub fn rank(
        &self,
        department: u32,
        aggregate: &ShipmentAggregate,
        multi_reference: bool,
    ) -> Vec<PricedOption> {
        let department = department as i32;
        let mut options = Vec::new();

        // 1. DPD 整单价（仅单参考号）
        if aggregate.has_cartons() && !multi_reference {
            if let Some(option) = self.price_dpd(department, aggregate) {
                options.push(option);
            }
        }

        // 2. 多参考号纸箱合并为零担
        if multi_reference && aggregate.has_cartons() && !aggregate.has_pallets() {
            if let Some(option) = self.price_grouped_messagerie(department, aggregate) {
                options.push(option);
            }
        }

        // 3. 托盘部分
        if aggregate.has_pallets() {
            options.extend(self.price_pallets(department, aggregate, multi_reference));
        }

        options.sort_by(|a, b| a.price.total_cmp(&b.price));
        debug!(count = options.len(), "报价排序完成");
        options
    }

    /// DPD: 每个 DPD 参考号按纸箱容量拆箱, 逐箱查价; 任一箱无费率则不提供 DPD
    fn price_dpd(&self, department: i32, aggregate: &ShipmentAggregate) -> Option<PricedOption> {
        let mut total_price = 0.0;
        let mut total_weight = 0.0;

        for result in aggregate.results.iter().filter(|r| r.is_dpd()) {
            let product = self.catalog.get(&result.reference)?;
            let carton = product.carton_variant()?;
            if carton.pieces_per_unit <= 0 {
                return None;
            }
            let capacity = carton.pieces_per_unit as u32;

            for pieces in carton_loads(result.quantity, capacity) {
                let weight = pieces as f64 * product.unit_weight_kg + carton.pallet_weight_kg;
                let price = self
                    .resolver
                    .resolve(weight, department, TransportMode::Dpd, None)
                    .filter(|p| *p > 0.0);
                let Some(price) = price else {
                    debug!(reference = %result.reference, weight_kg = weight, "纸箱无 DPD 费率");
                    return None;
                };
                total_price += price;
                total_weight += weight;
            }
        }

        (total_price > 0.0).then(|| PricedOption {
            mode: TransportMode::Dpd,
            price: total_price,
            weight_basis_kg: total_weight,
            details: format!("{} colis DPD", aggregate.carton_count),
        })
    }

    fn price_grouped_messagerie(
        &self,
        department: i32,
        aggregate: &ShipmentAggregate,
    ) -> Option<PricedOption> {
        let weight = aggregate.total_weight_kg;
        if weight > MESSAGERIE_MAX_WEIGHT_KG {
            return None;
        }

        let price = self
            .resolver
            .resolve(weight, department, TransportMode::Messagerie, None)
            .filter(|p| *p > 0.0)?;

        Some(PricedOption {
            mode: TransportMode::Messagerie,
            price,
            weight_basis_kg: weight,
            details: format!(
                "Messagerie globale ({} colis regroupés)",
                aggregate.carton_count
            ),
        })
    }

    fn price_pallets(
        &self,
        department: i32,
        aggregate: &ShipmentAggregate,
        multi_reference: bool,
    ) -> Vec<PricedOption> {
        // 单参考号时 DPD 重量单独计价; 多参考号时纸箱随托盘一起走
        let dpd_weight = if aggregate.has_cartons() && !multi_reference {
            aggregate.dpd_weight_kg()
        } else {
            0.0
        };
        let pallet_weight = aggregate.total_weight_kg - dpd_weight;
        let pallet_count = aggregate.pallet_count();
        let details = format!(
            "{} palette(s) - {}",
            pallet_count,
            composition_summary(&aggregate.composition)
        );

        ModeEligibility::for_shipment(pallet_weight, pallet_count, multi_reference)
            .iter()
            .filter_map(|&mode| {
                let price = self
                    .resolver
                    .resolve(
                        pallet_weight,
                        department,
                        mode,
                        Some(aggregate.composition.as_slice()),
                    )
                    .filter(|p| *p > 0.0);
                if price.is_none() {
                    debug!(%mode, "无费率, 剔除该运输方式");
                }
                price.map(|price| PricedOption {
                    mode,
                    price,
                    weight_basis_kg: pallet_weight,
                    details: details.clone(),
                })
            })
            .collect()
    }
}

/// 按纸箱容量拆分数量, 最后一箱装余量
pub fn carton_loads(quantity: u32, capacity: u32) -> Vec<u32> {
    if capacity == 0 {
        return Vec::new();
    }
    let full = quantity / capacity;
    let rest = quantity % capacity;
    let mut loads = vec![capacity; full as usize];
    if rest > 0 {
        loads.push(rest);
    }
    loads
}

/// 拆分为 (选中方案, 备选方案)
pub fn split_ranked(mut options: Vec<PricedOption>) -> (Option<PricedOption>, Vec<PricedOption>) {
    if options.is_empty() {
        return (None, options);
    }
    let selected = options.remove(0);
    (Some(selected), options)
}
