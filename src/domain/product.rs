// ==========================================
// 运输计算器 - 产品目录领域模型
// ==========================================
// 职责: 产品、包装变体、产品目录
// 红线: 目录加载后只读, 引擎只借用不修改
// ==========================================

use crate::domain::types::CARTON_LABEL;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// Variant - 包装变体
// ==========================================
// 一个产品的一种包装方式（某种托盘类型, 或纸箱/DPD）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub pallet_type: String,     // 托盘类型标签 ("carton" 表示纸箱)
    pub pallet_weight_kg: f64,   // 空托盘/空纸箱重量 (kg)
    pub pieces_per_unit: i32,    // 每托盘/每箱件数 (<=0 不参与装托)
    pub height_cm: f64,          // 堆码高度 (cm)
    #[serde(default)]
    pub authorized_transports: Vec<String>, // 授权运输方式 (仅纸箱变体有意义)
}

impl Variant {
    /// 是否为纸箱变体
    pub fn is_carton(&self) -> bool {
        self.pallet_type == CARTON_LABEL
    }

    /// 是否可参与托盘组合搜索
    pub fn is_palletizable(&self) -> bool {
        !self.is_carton() && self.pieces_per_unit > 0
    }

    /// 授权运输方式中是否包含 DPD（不区分大小写, 子串匹配）
    pub fn authorizes_dpd(&self) -> bool {
        self.authorized_transports
            .iter()
            .any(|t| t.to_lowercase().contains("dpd"))
    }
}

// ==========================================
// Product - 产品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub reference: String,   // 产品参考号 (唯一)
    pub description: String, // 描述
    pub unit_weight_kg: f64, // 单件重量 (kg)
    pub variants: Vec<Variant>, // 包装变体 (保持文件顺序)
}

impl Product {
    /// 纸箱变体（取第一个）
    pub fn carton_variant(&self) -> Option<&Variant> {
        self.variants.iter().find(|v| v.is_carton())
    }

    /// 可装托的变体（保持原顺序）
    pub fn pallet_variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter().filter(|v| v.is_palletizable())
    }

    /// 单托最大容量（无可装托变体时返回 None）
    pub fn max_pallet_capacity(&self) -> Option<u32> {
        self.pallet_variants()
            .map(|v| v.pieces_per_unit as u32)
            .max()
    }

    /// 按托盘类型查找变体
    pub fn variant_by_type(&self, pallet_type: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.pallet_type == pallet_type)
    }
}

// ==========================================
// Catalog - 产品目录
// ==========================================
// 由外部加载器构建, 每次计算以只读引用传入引擎
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入产品（同参考号覆盖）
    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.reference.clone(), product);
    }

    pub fn get(&self, reference: &str) -> Option<&Product> {
        self.products.get(reference)
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.products.contains_key(reference)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 全部参考号（字典序, 供下拉选择等使用）
    pub fn references(&self) -> Vec<&str> {
        let mut refs: Vec<&str> = self.products.keys().map(String::as_str).collect();
        refs.sort_unstable();
        refs
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for product in iter {
            catalog.insert(product);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(pallet_type: &str, capacity: i32) -> Variant {
        Variant {
            pallet_type: pallet_type.to_string(),
            pallet_weight_kg: 20.0,
            pieces_per_unit: capacity,
            height_cm: 120.0,
            authorized_transports: vec![],
        }
    }

    #[test]
    fn test_max_pallet_capacity_ignores_carton_and_empty() {
        let product = Product {
            reference: "CONE-01".to_string(),
            description: "Cône".to_string(),
            unit_weight_kg: 1.0,
            variants: vec![
                variant("carton", 500),
                variant("80x120", 100),
                variant("100x120", 160),
                variant("120x120", 0),
            ],
        };

        assert_eq!(product.max_pallet_capacity(), Some(160));
        assert_eq!(product.pallet_variants().count(), 2);
    }

    #[test]
    fn test_authorizes_dpd_case_insensitive() {
        let mut carton = variant("carton", 50);
        carton.authorized_transports = vec!["Messagerie".to_string(), "Colis dpd".to_string()];
        assert!(carton.authorizes_dpd());

        carton.authorized_transports = vec!["Messagerie".to_string()];
        assert!(!carton.authorizes_dpd());
    }

    #[test]
    fn test_catalog_references_sorted() {
        let catalog: Catalog = ["B", "A"]
            .iter()
            .map(|r| Product {
                reference: r.to_string(),
                description: String::new(),
                unit_weight_kg: 1.0,
                variants: vec![],
            })
            .collect();

        assert_eq!(catalog.references(), vec!["A", "B"]);
        assert!(catalog.contains("A"));
    }
}
