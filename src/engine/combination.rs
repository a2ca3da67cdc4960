// ==========================================
// 运输计算器 - 托盘组合生成引擎
// ==========================================
// 职责: 为单个产品 + 数量生成有界的候选装托方案
// 输入: 产品 (或目录 + 参考号) + 数量
// 输出: 最多 5 个方案, 按 (托盘数升序, 浪费升序) 排序
// ==========================================
// 说明: 混合方案搜索为有界启发式, 不保证全局最优;
//       下列上限直接决定输出结果, 不可随意调整
// ==========================================

use crate::domain::product::{Catalog, Product, Variant};
use crate::domain::shipment::Combination;
use tracing::{debug, instrument};

/// 返回方案数上限
pub const MAX_COMBINATIONS: usize = 5;
/// 数量超过该值才尝试混合方案
pub const MIXED_SEARCH_MIN_QUANTITY: u32 = 50;
/// 混合方案中大托盘最多尝试数
pub const MAX_LARGE_PALLETS: u32 = 4;
/// 混合方案中小托盘数上限
pub const MAX_SMALL_PALLETS: u32 = 10;
/// 混合方案托盘总数上限
pub const MAX_MIXED_TOTAL_PALLETS: u32 = 8;

// ==========================================
// CombinationGenerator - 托盘组合生成器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct CombinationGenerator;

impl CombinationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 按参考号生成候选方案
    ///
    /// 参考号不存在时返回空列表
    pub fn generate(&self, catalog: &Catalog, reference: &str, quantity: u32) -> Vec<Combination> {
        match catalog.get(reference) {
            Some(product) => self.generate_for_product(product, quantity),
            None => {
                debug!(reference, "参考号不在目录中, 无候选方案");
                Vec::new()
            }
        }
    }

    /// 为产品生成候选方案
    ///
    /// # 规则
    /// 1. 可装托变体 = 非纸箱且容量 > 0, 按容量降序
    /// 2. 单一变体方案: 每个变体一个, 托盘数 = ceil(数量 / 容量)
    /// 3. 混合方案 (数量 > 50): 大变体 1..=min(floor(数量/大容量), 4) 托,
    ///    余量用更小的变体补齐; 小托盘 ≤ 10 且总托盘 ≤ 8;
    ///    仅当严格少于当前最优托盘数, 或托盘数相同且浪费严格更少时接受
    /// 4. 排序并截取前 5 个
    #[instrument(skip(self, product), fields(reference = %product.reference))]
    pub fn generate_for_product(&self, product: &Product, quantity: u32) -> Vec<Combination> {
        if quantity == 0 {
            return Vec::new();
        }

        let mut variants: Vec<&Variant> = product.pallet_variants().collect();
        // 稳定排序: 同容量保持文件顺序
        variants.sort_by(|a, b| b.pieces_per_unit.cmp(&a.pieces_per_unit));

        if variants.is_empty() {
            debug!("无可装托变体");
            return Vec::new();
        }

        let goods_weight = quantity as f64 * product.unit_weight_kg;
        let mut combinations: Vec<Combination> = variants
            .iter()
            .map(|variant| single_variant(variant, quantity, goods_weight))
            .collect();

        if quantity > MIXED_SEARCH_MIN_QUANTITY {
            self.search_mixed(&variants, quantity, goods_weight, &mut combinations);
        }

        combinations.sort_by(|a, b| {
            a.pallet_count
                .cmp(&b.pallet_count)
                .then(a.waste.cmp(&b.waste))
        });
        combinations.truncate(MAX_COMBINATIONS);

        debug!(count = combinations.len(), "候选方案生成完成");
        combinations
    }

    /// 有界混合方案搜索（大变体在前, 小变体在后）
    fn search_mixed(
        &self,
        variants: &[&Variant],
        quantity: u32,
        goods_weight: f64,
        combinations: &mut Vec<Combination>,
    ) {
        for (i, large) in variants.iter().enumerate() {
            let large_capacity = large.pieces_per_unit as u32;
            let max_large = (quantity / large_capacity).min(MAX_LARGE_PALLETS);

            for large_count in 1..=max_large {
                let remaining = quantity - large_count * large_capacity;
                if remaining == 0 {
                    continue;
                }

                for small in &variants[i + 1..] {
                    let small_capacity = small.pieces_per_unit as u32;
                    let small_count = remaining.div_ceil(small_capacity);
                    let total = large_count + small_count;

                    if small_count > MAX_SMALL_PALLETS || total > MAX_MIXED_TOTAL_PALLETS {
                        continue;
                    }

                    let waste = large_count * large_capacity + small_count * small_capacity - quantity;
                    let (best_count, best_waste) = current_best(combinations);

                    if total < best_count || (total == best_count && waste < best_waste) {
                        combinations.push(Combination {
                            composition: vec![
                                (large.pallet_type.clone(), large_count),
                                (small.pallet_type.clone(), small_count),
                            ],
                            pallet_count: total,
                            total_weight_kg: goods_weight
                                + large_count as f64 * large.pallet_weight_kg
                                + small_count as f64 * small.pallet_weight_kg,
                            max_height_cm: large.height_cm.max(small.height_cm),
                            waste,
                            details: format!(
                                "{} palette(s) {} + {} palette(s) {}",
                                large_count, large.pallet_type, small_count, small.pallet_type
                            ),
                        });
                    }
                }
            }
        }
    }
}

/// 单一变体方案
fn single_variant(variant: &Variant, quantity: u32, goods_weight: f64) -> Combination {
    let capacity = variant.pieces_per_unit as u32;
    let pallets = quantity.div_ceil(capacity);

    Combination {
        composition: vec![(variant.pallet_type.clone(), pallets)],
        pallet_count: pallets,
        total_weight_kg: goods_weight + pallets as f64 * variant.pallet_weight_kg,
        max_height_cm: variant.height_cm,
        waste: pallets * capacity - quantity,
        details: format!("{} palette(s) {}", pallets, variant.pallet_type),
    }
}

/// 当前最优 (最少托盘数, 该托盘数下的最小浪费)
fn current_best(combinations: &[Combination]) -> (u32, u32) {
    let best_count = combinations
        .iter()
        .map(|c| c.pallet_count)
        .min()
        .unwrap_or(u32::MAX);
    let best_waste = combinations
        .iter()
        .filter(|c| c.pallet_count == best_count)
        .map(|c| c.waste)
        .min()
        .unwrap_or(u32::MAX);
    (best_count, best_waste)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(pallet_type: &str, capacity: i32, pallet_weight: f64, height: f64) -> Variant {
        Variant {
            pallet_type: pallet_type.to_string(),
            pallet_weight_kg: pallet_weight,
            pieces_per_unit: capacity,
            height_cm: height,
            authorized_transports: vec![],
        }
    }

    fn product(unit_weight: f64, variants: Vec<Variant>) -> Product {
        Product {
            reference: "CONE-TEST".to_string(),
            description: "Cône de test".to_string(),
            unit_weight_kg: unit_weight,
            variants,
        }
    }

    #[test]
    fn test_single_variant_ceil_and_waste() {
        let generator = CombinationGenerator::new();
        for capacity in [1_i32, 7, 25, 100] {
            for quantity in [1_u32, 6, 7, 8, 49, 50] {
                let p = product(1.0, vec![variant("80x120", capacity, 20.0, 100.0)]);
                let combos = generator.generate_for_product(&p, quantity);
                assert_eq!(combos.len(), 1);

                let expected = quantity.div_ceil(capacity as u32);
                assert_eq!(combos[0].pallet_count, expected);
                assert_eq!(combos[0].waste, expected * capacity as u32 - quantity);
            }
        }
    }

    #[test]
    fn test_single_variant_weight() {
        let generator = CombinationGenerator::new();
        let p = product(2.5, vec![variant("80x120", 40, 25.0, 140.0)]);

        let combos = generator.generate_for_product(&p, 50);
        // 50 × 2.5 + 2 × 25
        assert_eq!(combos[0].total_weight_kg, 175.0);
        assert_eq!(combos[0].max_height_cm, 140.0);
        assert_eq!(combos[0].details, "2 palette(s) 80x120");
    }

    #[test]
    fn test_carton_and_zero_capacity_excluded() {
        let generator = CombinationGenerator::new();
        let p = product(
            1.0,
            vec![
                variant("carton", 500, 0.5, 30.0),
                variant("120x120", 0, 30.0, 100.0),
                variant("80x120", 40, 20.0, 100.0),
            ],
        );

        let combos = generator.generate_for_product(&p, 30);
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].composition, vec![("80x120".to_string(), 1)]);
    }

    #[test]
    fn test_no_eligible_variant_or_unknown_reference() {
        let generator = CombinationGenerator::new();
        let p = product(1.0, vec![variant("carton", 50, 0.5, 30.0)]);
        assert!(generator.generate_for_product(&p, 10).is_empty());

        let catalog: Catalog = vec![p].into_iter().collect();
        assert!(generator.generate(&catalog, "INCONNU", 10).is_empty());
    }

    #[test]
    fn test_mixed_combination_accepted_when_strictly_better() {
        let generator = CombinationGenerator::new();
        let p = product(
            1.0,
            vec![
                variant("80x120", 30, 20.0, 100.0),
                variant("100x120", 100, 25.0, 150.0),
            ],
        );

        let combos = generator.generate_for_product(&p, 130);

        // 混合: 1×100 + 1×30 = 2 托, 浪费 0 → 优于 2×100 (浪费 70)
        assert_eq!(
            combos[0].composition,
            vec![("100x120".to_string(), 1), ("80x120".to_string(), 1)]
        );
        assert_eq!(combos[0].pallet_count, 2);
        assert_eq!(combos[0].waste, 0);
        assert_eq!(combos[0].max_height_cm, 150.0);
        assert_eq!(combos[0].total_weight_kg, 130.0 + 25.0 + 20.0);
        assert_eq!(combos[0].details, "1 palette(s) 100x120 + 1 palette(s) 80x120");

        assert_eq!(combos[1].composition, vec![("100x120".to_string(), 2)]);
        assert_eq!(combos[2].composition, vec![("80x120".to_string(), 5)]);
    }

    #[test]
    fn test_mixed_search_not_triggered_at_fifty() {
        let generator = CombinationGenerator::new();
        let p = product(
            1.0,
            vec![variant("100x120", 40, 25.0, 150.0), variant("80x120", 10, 20.0, 100.0)],
        );

        // 50: 仅单一方案 (2×40 浪费 30, 5×10 浪费 0)
        let combos = generator.generate_for_product(&p, 50);
        assert_eq!(combos.len(), 2);
        assert!(combos.iter().all(|c| c.composition.len() == 1));

        // 51: 1×40 + 2×10 = 3 托 < 2? 否; 2 托单一方案仍最优, 混合不被接受
        let combos = generator.generate_for_product(&p, 51);
        assert!(combos.iter().all(|c| c.composition.len() == 1));
    }

    #[test]
    fn test_results_bounded_and_sorted() {
        let generator = CombinationGenerator::new();
        let p = product(
            0.5,
            vec![
                variant("A", 11, 10.0, 100.0),
                variant("B", 17, 10.0, 100.0),
                variant("C", 23, 10.0, 100.0),
                variant("D", 29, 10.0, 100.0),
                variant("E", 37, 10.0, 100.0),
                variant("F", 41, 10.0, 100.0),
                variant("G", 53, 10.0, 100.0),
            ],
        );

        for quantity in [10_u32, 51, 97, 150, 333, 1000] {
            let combos = generator.generate_for_product(&p, quantity);
            assert!(combos.len() <= MAX_COMBINATIONS);
            for pair in combos.windows(2) {
                let key_a = (pair[0].pallet_count, pair[0].waste);
                let key_b = (pair[1].pallet_count, pair[1].waste);
                assert!(key_a <= key_b, "未排序: {:?} > {:?}", key_a, key_b);
            }
            for combo in combos.iter().filter(|c| c.composition.len() == 2) {
                assert!(quantity > MIXED_SEARCH_MIN_QUANTITY);
                assert!(combo.pallet_count <= MAX_MIXED_TOTAL_PALLETS);
                assert!(combo.composition[0].1 <= MAX_LARGE_PALLETS);
                assert!(combo.composition[1].1 <= MAX_SMALL_PALLETS);
            }
        }
    }
}
