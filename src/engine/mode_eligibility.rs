// ==========================================
// 运输计算器 - 运输方式准入纯函数
// ==========================================
// 职责: 根据重量/托盘数/订单形态判定可参与报价的托盘化运输方式
// 红线: 无状态、无副作用、无 I/O
// ==========================================
// 注意: 单参考号装托判定与整单判定的托盘数门控不同, 不得合并
// ==========================================

use crate::domain::types::TransportMode;

/// 零担重量上限 (kg)
pub const MESSAGERIE_MAX_WEIGHT_KG: f64 = 400.0;
/// 整托包价重量上限 (kg)
pub const FORFAIT_MAX_WEIGHT_KG: f64 = 1000.0;

const LIGHT: &[TransportMode] = &[
    TransportMode::Messagerie,
    TransportMode::ForfaitPalette,
    TransportMode::Affretement,
];
const MEDIUM: &[TransportMode] = &[TransportMode::ForfaitPalette, TransportMode::Affretement];
const HEAVY: &[TransportMode] = &[TransportMode::Affretement];

pub struct ModeEligibility;

impl ModeEligibility {
    /// 按重量分档的运输方式
    ///
    /// # 规则
    /// - ≤ 400 kg → 零担、整托包价、包车
    /// - ≤ 1000 kg → 整托包价、包车
    /// - 其他 → 包车
    pub fn by_weight(weight_kg: f64) -> &'static [TransportMode] {
        if weight_kg <= MESSAGERIE_MAX_WEIGHT_KG {
            LIGHT
        } else if weight_kg <= FORFAIT_MAX_WEIGHT_KG {
            MEDIUM
        } else {
            HEAVY
        }
    }

    /// 单参考号装托方案的可选运输方式
    ///
    /// # 参数
    /// - weight_kg: 方案总重
    /// - fits_largest_pallet: 数量 ≤ 最大单托容量
    ///
    /// 超出最大单托容量的数量只能包车, 与重量无关
    pub fn for_reference(weight_kg: f64, fits_largest_pallet: bool) -> &'static [TransportMode] {
        if fits_largest_pallet {
            Self::by_weight(weight_kg)
        } else {
            HEAVY
        }
    }

    /// 整单托盘部分的可选运输方式
    ///
    /// # 规则
    /// - 多参考号: ≤ 400 kg 不限托盘数; ≤ 1000 kg 要求恰好 1 个托盘
    /// - 单参考号: 两个重量档都要求恰好 1 个托盘
    /// - 其他 → 包车
    pub fn for_shipment(
        weight_kg: f64,
        pallet_count: u32,
        multi_reference: bool,
    ) -> &'static [TransportMode] {
        let single_pallet = pallet_count == 1;
        if weight_kg <= MESSAGERIE_MAX_WEIGHT_KG && (multi_reference || single_pallet) {
            LIGHT
        } else if weight_kg <= FORFAIT_MAX_WEIGHT_KG && single_pallet {
            MEDIUM
        } else {
            HEAVY
        }
    }
}
