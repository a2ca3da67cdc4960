// ==========================================
// 运输计算器 - 字段映射器实现
// ==========================================
// 职责: 产品表行 → 标准字段映射 + 类型转换
// 列名: 产品表使用法语表头
// 数值: 同时接受小数点与小数逗号 ("0,2")
// ==========================================

use crate::domain::product::Variant;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

// ===== 产品表列名 =====
pub const COL_PRODUCT_NAME: &str = "Nom produit";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_UNIT_WEIGHT: &str = "Poids unitaire";
pub const COL_PALLET_TYPE: &str = "type palette";
pub const COL_PALLET_WEIGHT: &str = "poids palette en kg";
pub const COL_PIECES_PER_PALLET: &str = "pièce par palette";
pub const COL_PALLET_HEIGHT: &str = "hauteur palette en cm";
pub const COL_AUTHORIZED_TRANSPORT: &str = "transport autorisé";

/// 产品表单行映射结果
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub reference: String,
    pub description: String,
    pub unit_weight_kg: f64,
    pub variant: Variant,
    pub row_number: usize,
}

pub struct FieldMapper;

impl FieldMapper {
    /// 映射产品表单行
    ///
    /// # 参数
    /// - row: 表头 → 单元格值
    /// - row_number: 源文件行号 (用于错误定位)
    pub fn map_product_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<ProductRow> {
        let reference = self
            .get_string(row, COL_PRODUCT_NAME)
            .ok_or_else(|| ImportError::MissingField {
                row: row_number,
                field: COL_PRODUCT_NAME.to_string(),
            })?;

        let unit_weight_kg = self
            .parse_f64(row, COL_UNIT_WEIGHT, row_number)?
            .ok_or_else(|| ImportError::MissingField {
                row: row_number,
                field: COL_UNIT_WEIGHT.to_string(),
            })?;

        let pallet_type = self
            .get_string(row, COL_PALLET_TYPE)
            .ok_or_else(|| ImportError::MissingField {
                row: row_number,
                field: COL_PALLET_TYPE.to_string(),
            })?;

        let variant = Variant {
            pallet_type,
            pallet_weight_kg: self.parse_f64(row, COL_PALLET_WEIGHT, row_number)?.unwrap_or(0.0),
            // 缺失件数 → 0, 该变体不参与装托
            pieces_per_unit: self
                .parse_i32(row, COL_PIECES_PER_PALLET, row_number)?
                .unwrap_or(0),
            height_cm: self.parse_f64(row, COL_PALLET_HEIGHT, row_number)?.unwrap_or(0.0),
            authorized_transports: self.parse_list(row, COL_AUTHORIZED_TRANSPORT),
        };

        Ok(ProductRow {
            reference,
            description: self.get_string(row, COL_DESCRIPTION).unwrap_or_default(),
            unit_weight_kg,
            variant,
            row_number,
        })
    }

    /// 提取字符串字段（空值视为缺失）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// 解析浮点数（接受小数逗号）
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<f64>> {
        let Some(raw) = self.get_string(row, key) else {
            return Ok(None);
        };
        let value = raw
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为数值: {}", raw),
            })?;
        Ok(Some(value))
    }

    /// 解析整数（Excel 数值单元格可能带 ".0"）
    fn parse_i32(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<i32>> {
        let Some(raw) = self.get_string(row, key) else {
            return Ok(None);
        };
        if let Ok(v) = raw.parse::<i32>() {
            return Ok(Some(v));
        }
        match self.parse_f64(row, key, row_number)? {
            Some(v) if v.fract() == 0.0 && v.abs() <= i32::MAX as f64 => Ok(Some(v as i32)),
            _ => Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为整数: {}", raw),
            }),
        }
    }

    /// 解析逗号分隔列表
    fn parse_list(&self, row: &HashMap<String, String>, key: &str) -> Vec<String> {
        self.get_string(row, key)
            .map(|raw| {
                raw.split(',')
                    .map(|item| item.trim().to_string())
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_map_carton_row() {
        let r = row(&[
            (COL_PRODUCT_NAME, "CONE-A"),
            (COL_DESCRIPTION, "Cône de signalisation"),
            (COL_UNIT_WEIGHT, "0,2"),
            (COL_PALLET_TYPE, "carton"),
            (COL_PALLET_WEIGHT, "0.5"),
            (COL_PIECES_PER_PALLET, "30"),
            (COL_PALLET_HEIGHT, "40"),
            (COL_AUTHORIZED_TRANSPORT, "DPD, Messagerie"),
        ]);

        let mapped = FieldMapper.map_product_row(&r, 2).unwrap();
        assert_eq!(mapped.reference, "CONE-A");
        assert!((mapped.unit_weight_kg - 0.2).abs() < 1e-9);
        assert!(mapped.variant.is_carton());
        assert_eq!(mapped.variant.pieces_per_unit, 30);
        assert_eq!(
            mapped.variant.authorized_transports,
            vec!["DPD".to_string(), "Messagerie".to_string()]
        );
        assert!(mapped.variant.authorizes_dpd());
    }

    #[test]
    fn test_map_pallet_row_with_float_pieces() {
        let r = row(&[
            (COL_PRODUCT_NAME, "BARRIERE"),
            (COL_UNIT_WEIGHT, "12"),
            (COL_PALLET_TYPE, "80x120"),
            (COL_PALLET_WEIGHT, "25"),
            (COL_PIECES_PER_PALLET, "40.0"),
            (COL_PALLET_HEIGHT, "180"),
        ]);

        let mapped = FieldMapper.map_product_row(&r, 3).unwrap();
        assert_eq!(mapped.variant.pieces_per_unit, 40);
        assert_eq!(mapped.description, "");
        assert!(mapped.variant.authorized_transports.is_empty());
    }

    #[test]
    fn test_missing_pieces_defaults_to_zero() {
        let r = row(&[
            (COL_PRODUCT_NAME, "BARRIERE"),
            (COL_UNIT_WEIGHT, "12"),
            (COL_PALLET_TYPE, "100x120"),
        ]);

        let mapped = FieldMapper.map_product_row(&r, 4).unwrap();
        assert_eq!(mapped.variant.pieces_per_unit, 0);
        assert!(!mapped.variant.is_palletizable());
    }

    #[test]
    fn test_missing_and_invalid_fields() {
        let missing = row(&[(COL_UNIT_WEIGHT, "12"), (COL_PALLET_TYPE, "80x120")]);
        assert!(matches!(
            FieldMapper.map_product_row(&missing, 5),
            Err(ImportError::MissingField { row: 5, .. })
        ));

        let invalid = row(&[
            (COL_PRODUCT_NAME, "X"),
            (COL_UNIT_WEIGHT, "lourd"),
            (COL_PALLET_TYPE, "80x120"),
        ]);
        assert!(matches!(
            FieldMapper.map_product_row(&invalid, 6),
            Err(ImportError::TypeConversionError { row: 6, .. })
        ));
    }
}
