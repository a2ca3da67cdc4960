// ==========================================
// 运输计算器 - 领域类型定义
// ==========================================
// 职责: 运输方式枚举、托盘类型标签常量
// 红线: 运输方式标签与费率表工作表名称一一对应, 不得改写
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 纸箱变体的托盘类型标签（非托盘化的 DPD 快捷路径）
pub const CARTON_LABEL: &str = "carton";

// ==========================================
// 运输方式 (Transport Mode)
// ==========================================
// 顺序: 小包 → 零担 → 整托包价 → 包车, 即评估顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    #[serde(rename = "Colis (DPD)")]
    Dpd, // 小包快递
    #[serde(rename = "Messagerie")]
    Messagerie, // 零担
    #[serde(rename = "Forfait palette")]
    ForfaitPalette, // 整托包价
    #[serde(rename = "Affrètement")]
    Affretement, // 包车
}

impl TransportMode {
    /// 全部运输方式（按评估顺序）
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Dpd,
        TransportMode::Messagerie,
        TransportMode::ForfaitPalette,
        TransportMode::Affretement,
    ];

    /// 对外标签（同时也是费率表工作表名称）
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Dpd => "Colis (DPD)",
            TransportMode::Messagerie => "Messagerie",
            TransportMode::ForfaitPalette => "Forfait palette",
            TransportMode::Affretement => "Affrètement",
        }
    }

    /// 是否为托盘化运输方式
    pub fn is_palletized(&self) -> bool {
        !matches!(self, TransportMode::Dpd)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TransportMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("未知运输方式: {}", trimmed))
    }
}
