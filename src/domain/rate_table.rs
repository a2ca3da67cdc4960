// ==========================================
// 运输计算器 - 费率表领域模型
// ==========================================
// 职责: 按运输方式划分的二维费率表
// 行: 省份编号 (1-95, 第 0 行为表头)
// 列: 各运输方式自有的分档规则 (见 engine::rate_resolver)
// 红线: 缺失/非数值单元格表示"无费率", 绝不当作 0
// ==========================================

use crate::domain::types::TransportMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// RateCell - 费率单元格
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RateCell {
    Number(f64),
    Text(String),
    Empty,
}

impl RateCell {
    /// 解析单元格费率
    ///
    /// # 返回
    /// - Ok(Some(price)): 有效数值
    /// - Ok(None): 空单元格
    /// - Err(raw): 非数值内容（数据格式错误, 由调用方记录日志）
    pub fn parse_rate(&self) -> Result<Option<f64>, String> {
        match self {
            RateCell::Empty => Ok(None),
            RateCell::Number(value) if value.is_finite() => Ok(Some(*value)),
            RateCell::Number(value) => Err(value.to_string()),
            RateCell::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                // 兼容法语小数逗号 "12,5"
                trimmed
                    .replace(',', ".")
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(Some)
                    .ok_or_else(|| raw.clone())
            }
        }
    }
}

impl From<f64> for RateCell {
    fn from(value: f64) -> Self {
        RateCell::Number(value)
    }
}

// ==========================================
// RateTable - 单一运输方式费率表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    rows: Vec<Vec<RateCell>>,
}

impl RateTable {
    pub fn new(rows: Vec<Vec<RateCell>>) -> Self {
        Self { rows }
    }

    /// 行数（含表头行）
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按行号取行（行号即省份编号）
    pub fn row(&self, index: usize) -> Option<&[RateCell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// 取单元格, 行或列越界时返回 None
    pub fn cell(&self, row: usize, col: usize) -> Option<&RateCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

// ==========================================
// RateTableSet - 全部运输方式的费率表
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateTableSet {
    tables: HashMap<TransportMode, RateTable>,
}

impl RateTableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mode: TransportMode, table: RateTable) {
        self.tables.insert(mode, table);
    }

    pub fn get(&self, mode: TransportMode) -> Option<&RateTable> {
        self.tables.get(&mode)
    }

    /// 已加载的运输方式（按评估顺序）
    pub fn modes(&self) -> Vec<TransportMode> {
        TransportMode::ALL
            .into_iter()
            .filter(|m| self.tables.contains_key(m))
            .collect()
    }
}
