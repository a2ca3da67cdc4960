// ==========================================
// 运输计算器 - 费率表加载器
// ==========================================
// 职责: 费率文件 → RateTableSet
// 格式:
// - xlsx: 每个运输方式一个工作表, 工作表名 = 运输方式标签
// - csv: 每个运输方式一个文件, 由调用方指定运输方式
// 单元格: 空 → Empty, 可解析数值 → Number, 其他 → Text (保留原文)
// ==========================================

use crate::domain::rate_table::{RateCell, RateTable, RateTableSet};
use crate::domain::types::TransportMode;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{CsvParser, ExcelParser, RawGrid};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

pub struct RateTableLoader;

impl RateTableLoader {
    pub fn new() -> Self {
        Self
    }

    /// 从 xlsx 工作簿加载全部运输方式费率表
    ///
    /// 无法识别的工作表名被跳过（记录警告）
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_workbook<P: AsRef<Path>>(&self, path: P) -> ImportResult<RateTableSet> {
        let sheets = ExcelParser.parse_sheets_raw(path.as_ref())?;

        let mut set = RateTableSet::new();
        for (sheet_name, grid) in sheets {
            match sheet_name.trim().parse::<TransportMode>() {
                Ok(mode) => {
                    let table = Self::grid_to_table(grid);
                    debug!(mode = %mode, rows = table.row_count(), "费率表工作表加载");
                    set.insert(mode, table);
                }
                Err(_) => warn!(sheet = %sheet_name, "未知运输方式工作表, 已跳过"),
            }
        }

        if set.modes().is_empty() {
            return Err(ImportError::EmptySource(path.as_ref().display().to_string()));
        }
        info!(modes = set.modes().len(), "费率表加载完成");
        Ok(set)
    }

    /// 从 CSV 加载单个运输方式费率表
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_csv<P: AsRef<Path>>(&self, path: P, mode: TransportMode) -> ImportResult<RateTable> {
        let grid = CsvParser.parse_raw_rows(path.as_ref())?;
        let table = Self::grid_to_table(grid);
        info!(mode = %mode, rows = table.row_count(), "CSV 费率表加载完成");
        Ok(table)
    }

    /// 按文件名主干推断运输方式 (例如 "Messagerie.csv")
    pub fn load_csv_by_name<P: AsRef<Path>>(&self, path: P) -> ImportResult<(TransportMode, RateTable)> {
        let stem = path
            .as_ref()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        let mode = stem
            .parse::<TransportMode>()
            .map_err(|_| ImportError::UnknownTransportMode(stem.clone()))?;
        Ok((mode, self.load_csv(path, mode)?))
    }

    fn grid_to_table(grid: RawGrid) -> RateTable {
        RateTable::new(
            grid.into_iter()
                .map(|row| row.into_iter().map(|v| Self::to_cell(&v)).collect())
                .collect(),
        )
    }

    fn to_cell(raw: &str) -> RateCell {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return RateCell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => RateCell::Number(v),
            _ => RateCell::Text(trimmed.to_string()),
        }
    }
}

impl Default for RateTableLoader {
    fn default() -> Self {
        Self::new()
    }
}
