// ==========================================
// 运输计算器 - 费率查询引擎
// ==========================================
// 职责: 按 (重量, 省份, 运输方式, 托盘构成) 定位费率表单元格
// 输出: Some(价格) 或 None (无费率)
// ==========================================
// 列定位规则（第 0 列为行标签, 从不作为计费列）:
// - Colis (DPD):     kg = floor(重量), 1 ≤ kg ≤ 30, 列 = kg
// - Messagerie:      阶梯 (≤ 375) 首个 ≥ 重量的档, 列 = 阶梯下标 + 1
// - Forfait palette: 重量 ≤ 1000, 固定第 1 列
// - Affrètement:     有构成 → 80x120 当量档 + 1; 无构成 → 重量闭区间档 + 1
// 红线: 缺失单元格 → None; 非数值单元格 → 记录日志后 None; 绝不当作 0
// ==========================================

use crate::domain::rate_table::RateTableSet;
use crate::domain::types::TransportMode;
use tracing::{trace, warn};

/// 可计价省份编号范围
pub const DEPARTMENT_MIN: i32 = 1;
pub const DEPARTMENT_MAX: i32 = 95;

/// DPD 计费重量上限 (整公斤)
pub const DPD_MAX_KG: f64 = 30.0;
/// 零担重量上限 (kg)
pub const MESSAGERIE_MAX_KG: f64 = 400.0;
/// 整托包价重量上限 (kg)
pub const FORFAIT_MAX_KG: f64 = 1000.0;

/// 零担重量阶梯 (kg, 升序)
///
/// 阶梯止于 375 kg: (375, 400] 区间无零担费率
pub const MESSAGERIE_LADDER: [f64; 23] = [
    9.0, 19.0, 29.0, 39.0, 49.0, 59.0, 69.0, 79.0, 89.0, 99.0, 120.0, 140.0, 160.0, 180.0, 200.0,
    220.0, 240.0, 260.0, 280.0, 300.0, 325.0, 350.0, 375.0,
];

/// 包车 80x120 当量档数（最后一档兜底）
pub const AFFRETEMENT_EQUIVALENT_BANDS: u32 = 19;

/// 包车重量档 (kg, 闭区间)
pub const AFFRETEMENT_WEIGHT_BANDS: [(f64, f64); 19] = [
    (1.0, 800.0),
    (801.0, 1200.0),
    (1201.0, 1600.0),
    (1601.0, 2400.0),
    (2401.0, 3200.0),
    (3201.0, 4000.0),
    (4001.0, 4800.0),
    (4801.0, 5600.0),
    (5601.0, 6400.0),
    (6401.0, 7200.0),
    (7201.0, 8000.0),
    (8001.0, 8800.0),
    (8801.0, 9600.0),
    (9601.0, 10400.0),
    (10401.0, 11200.0),
    (11201.0, 12000.0),
    (12001.0, 12800.0),
    (12801.0, 13600.0),
    (13601.0, 14400.0),
];

// ==========================================
// 列定位
// ==========================================

/// 计算运输方式对应的费率列
///
/// # 返回
/// - Some(col): 费率表列下标
/// - None: 该重量/构成在此运输方式下无适用列
pub fn rate_column(
    mode: TransportMode,
    weight_kg: f64,
    composition: Option<&[(String, u32)]>,
) -> Option<usize> {
    if weight_kg.is_nan() {
        return None;
    }
    match mode {
        TransportMode::Dpd => dpd_column(weight_kg),
        TransportMode::Messagerie => messagerie_column(weight_kg),
        TransportMode::ForfaitPalette => forfait_column(weight_kg),
        TransportMode::Affretement => match composition {
            Some(composition) => Some(affretement_column_by_composition(composition)),
            None => affretement_column_by_weight(weight_kg),
        },
    }
}

fn dpd_column(weight_kg: f64) -> Option<usize> {
    let kg = weight_kg.floor();
    if (1.0..=DPD_MAX_KG).contains(&kg) {
        Some(kg as usize)
    } else {
        None
    }
}

fn messagerie_column(weight_kg: f64) -> Option<usize> {
    if weight_kg > MESSAGERIE_MAX_KG {
        return None;
    }
    MESSAGERIE_LADDER
        .iter()
        .position(|&limit| weight_kg <= limit)
        .map(|index| index + 1)
}

fn forfait_column(weight_kg: f64) -> Option<usize> {
    (weight_kg <= FORFAIT_MAX_KG).then_some(1)
}

/// 闭区间匹配: 落在两档之间的重量 (如 800.5) 无费率
fn affretement_column_by_weight(weight_kg: f64) -> Option<usize> {
    AFFRETEMENT_WEIGHT_BANDS
        .iter()
        .position(|&(lower, upper)| (lower..=upper).contains(&weight_kg))
        .map(|index| index + 1)
}

fn affretement_column_by_composition(composition: &[(String, u32)]) -> usize {
    let equivalents: u32 = composition
        .iter()
        .map(|(pallet_type, count)| pallet_equivalents(pallet_type) * count)
        .sum();
    equivalent_band(equivalents) + 1
}

/// 托盘类型 → 80x120 当量
///
/// 115x115 / 110x110 / 120x120 类托盘按 2 个当量计, 其余按 1 个
pub fn pallet_equivalents(pallet_type: &str) -> u32 {
    if pallet_type.contains("80x120") {
        1
    } else if ["115x115", "110x110", "120x120"]
        .iter()
        .any(|pattern| pallet_type.contains(pattern))
    {
        2
    } else {
        1
    }
}

/// 当量 → 档位下标 (≤1 → 0, 2 → 1, …, 18 → 17, ≥19 → 18)
pub fn equivalent_band(equivalents: u32) -> usize {
    (equivalents.max(1) - 1).min(AFFRETEMENT_EQUIVALENT_BANDS - 1) as usize
}

// ==========================================
// RateResolver - 费率查询器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct RateResolver<'a> {
    tables: &'a RateTableSet,
}

impl<'a> RateResolver<'a> {
    pub fn new(tables: &'a RateTableSet) -> Self {
        Self { tables }
    }

    /// 查询价格
    ///
    /// # 参数
    /// - weight_kg: 计价重量
    /// - department: 省份编号（[1, 95] 之外直接返回 None）
    /// - mode: 运输方式
    /// - composition: 托盘构成（仅包车使用）
    pub fn resolve(
        &self,
        weight_kg: f64,
        department: i32,
        mode: TransportMode,
        composition: Option<&[(String, u32)]>,
    ) -> Option<f64> {
        if !(DEPARTMENT_MIN..=DEPARTMENT_MAX).contains(&department) {
            return None;
        }

        let table = self.tables.get(mode).filter(|t| !t.is_empty())?;
        let row = department as usize;
        if row >= table.row_count() {
            return None;
        }

        let col = rate_column(mode, weight_kg, composition)?;
        let cell = table.cell(row, col)?;

        match cell.parse_rate() {
            Ok(price) => {
                trace!(%mode, department, col, ?price, "费率查询");
                price
            }
            Err(raw) => {
                warn!(
                    %mode,
                    department,
                    col,
                    raw = %raw,
                    "费率单元格非数值, 按无费率处理"
                );
                None
            }
        }
    }
}
