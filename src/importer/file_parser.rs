// ==========================================
// 运输计算器 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx) / CSV (.csv)
// 两种读取方式:
// - 表头模式: 第一行为表头, 每行 → HashMap (产品表)
// - 原始模式: 不解释表头, 逐行逐格字符串 (费率表)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始网格: 行 × 列 的字符串单元格
pub type RawGrid = Vec<Vec<String>>;

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser {
    /// 表头模式解析（第一个工作表/整个 CSV）
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>>;
}

/// 检查文件存在与扩展名
fn check_file(path: &Path, allowed: &[&str]) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !allowed.contains(&ext.as_str()) {
        return Err(ImportError::UnsupportedFormat(ext));
    }
    Ok(())
}

/// 原始网格 → 表头记录（跳过完全空白的行）
fn grid_to_records(grid: RawGrid) -> Vec<HashMap<String, String>> {
    let mut rows = grid.into_iter();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row.iter().map(|h| h.trim().to_string()).collect();

    rows.filter_map(|row| {
        let row_map: HashMap<String, String> = row
            .into_iter()
            .enumerate()
            .filter_map(|(col_idx, value)| {
                headers
                    .get(col_idx)
                    .map(|header| (header.clone(), value.trim().to_string()))
            })
            .collect();
        (!row_map.values().all(|v| v.is_empty())).then_some(row_map)
    })
    .collect()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 原始模式读取 CSV
    pub fn parse_raw_rows(&self, file_path: &Path) -> ImportResult<RawGrid> {
        check_file(file_path, &["csv"])?;

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut grid = Vec::new();
        for result in reader.records() {
            let record = result?;
            grid.push(record.iter().map(|v| v.trim().to_string()).collect());
        }
        Ok(grid)
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        Ok(grid_to_records(self.parse_raw_rows(file_path)?))
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    /// 原始模式读取全部工作表
    ///
    /// # 返回
    /// (工作表名, 原始网格) 列表, 保持工作簿顺序
    pub fn parse_sheets_raw(&self, file_path: &Path) -> ImportResult<Vec<(String, RawGrid)>> {
        check_file(file_path, &["xlsx"])?;

        let mut workbook: Xlsx<_> = open_workbook(file_path)?;
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError("Excel 文件无工作表".to_string()));
        }

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;
            let grid: RawGrid = range
                .rows()
                .map(|row| row.iter().map(|cell| cell.to_string().trim().to_string()).collect())
                .collect();
            sheets.push((sheet_name, grid));
        }
        Ok(sheets)
    }
}

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        let mut sheets = self.parse_sheets_raw(file_path)?;
        // 只读取第一个工作表
        let (_, grid) = sheets.swap_remove(0);
        Ok(grid_to_records(grid))
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<HashMap<String, String>>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_to_raw_records(path),
            "xlsx" => ExcelParser.parse_to_raw_records(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
