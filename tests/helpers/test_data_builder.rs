// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================
// 约定费率（所有省份相同）:
// - Colis (DPD):     第 c 列 = 5.0 + 0.5 × c   (c = 1..=30)
// - Messagerie:      第 c 列 = 40.0 + 5.0 × c  (c = 1..=23)
// - Forfait palette: 第 1 列 = 120.0
// - Affrètement:     第 c 列 = 400.0 + 100.0 × c (c = 1..=19)
// ==========================================

use transport_calc::domain::{Catalog, Product, RateCell, RateTable, RateTableSet, Variant};
use transport_calc::TransportMode;

pub const DEPARTMENT_COUNT: usize = 95;

// ==========================================
// Product 构建器
// ==========================================

pub struct ProductBuilder {
    reference: String,
    description: String,
    unit_weight_kg: f64,
    variants: Vec<Variant>,
}

impl ProductBuilder {
    pub fn new(reference: &str) -> Self {
        Self {
            reference: reference.to_string(),
            description: format!("Produit {}", reference),
            unit_weight_kg: 1.0,
            variants: Vec::new(),
        }
    }

    pub fn unit_weight(mut self, weight_kg: f64) -> Self {
        self.unit_weight_kg = weight_kg;
        self
    }

    /// 纸箱变体
    pub fn carton(mut self, capacity: i32, weight_kg: f64, height_cm: f64, transports: &[&str]) -> Self {
        self.variants.push(Variant {
            pallet_type: "carton".to_string(),
            pallet_weight_kg: weight_kg,
            pieces_per_unit: capacity,
            height_cm,
            authorized_transports: transports.iter().map(|t| t.to_string()).collect(),
        });
        self
    }

    /// 托盘变体
    pub fn pallet(mut self, pallet_type: &str, capacity: i32, weight_kg: f64, height_cm: f64) -> Self {
        self.variants.push(Variant {
            pallet_type: pallet_type.to_string(),
            pallet_weight_kg: weight_kg,
            pieces_per_unit: capacity,
            height_cm,
            authorized_transports: Vec::new(),
        });
        self
    }

    pub fn build(self) -> Product {
        Product {
            reference: self.reference,
            description: self.description,
            unit_weight_kg: self.unit_weight_kg,
            variants: self.variants,
        }
    }
}

// ==========================================
// 标准测试目录
// ==========================================

/// 交通锥: 0.2 kg/件, 纸箱 50 件 (允许 DPD), 80x120 托盘 500 件
pub fn cone() -> Product {
    ProductBuilder::new("CONE-A")
        .unit_weight(0.2)
        .carton(50, 0.5, 40.0, &["DPD", "Messagerie"])
        .pallet("80x120", 500, 20.0, 150.0)
        .build()
}

/// 手套: 0.1 kg/件, 纸箱 100 件 (允许 DPD), 80x120 托盘 2000 件
pub fn glove() -> Product {
    ProductBuilder::new("GANT-B")
        .unit_weight(0.1)
        .carton(100, 0.3, 30.0, &["DPD"])
        .pallet("80x120", 2000, 20.0, 140.0)
        .build()
}

/// 仅纸箱的产品 (无可装托变体)
pub fn carton_only() -> Product {
    ProductBuilder::new("SACHET")
        .unit_weight(0.05)
        .carton(200, 0.2, 20.0, &["DPD"])
        .build()
}

/// 护栏: 12 kg/件, 80x120 托盘 40 件, 纸箱不允许 DPD
pub fn barrier() -> Product {
    ProductBuilder::new("BARRIERE")
        .unit_weight(12.0)
        .carton(2, 1.0, 60.0, &["Messagerie"])
        .pallet("80x120", 40, 25.0, 180.0)
        .build()
}

pub fn standard_catalog() -> Catalog {
    vec![cone(), glove(), barrier(), carton_only()].into_iter().collect()
}

// ==========================================
// RateTable 构建器
// ==========================================

pub struct RateTableBuilder {
    rows: Vec<Vec<RateCell>>,
}

impl RateTableBuilder {
    /// 线性费率表: 第 c 列 = base + step × c
    pub fn linear(columns: usize, base: f64, step: f64) -> Self {
        let mut header = vec![RateCell::Text("Département".to_string())];
        header.extend((1..=columns).map(|c| RateCell::Number(c as f64)));

        let mut rows = vec![header];
        for department in 1..=DEPARTMENT_COUNT {
            let mut row = vec![RateCell::Number(department as f64)];
            row.extend((1..=columns).map(|c| RateCell::Number(base + step * c as f64)));
            rows.push(row);
        }
        Self { rows }
    }

    /// 覆盖单元格
    pub fn cell(mut self, department: usize, col: usize, cell: RateCell) -> Self {
        self.rows[department][col] = cell;
        self
    }

    pub fn build(self) -> RateTable {
        RateTable::new(self.rows)
    }
}

pub fn dpd_table() -> RateTableBuilder {
    RateTableBuilder::linear(30, 5.0, 0.5)
}

pub fn messagerie_table() -> RateTableBuilder {
    RateTableBuilder::linear(23, 40.0, 5.0)
}

pub fn forfait_table() -> RateTableBuilder {
    RateTableBuilder::linear(1, 120.0, 0.0)
}

pub fn affretement_table() -> RateTableBuilder {
    RateTableBuilder::linear(19, 400.0, 100.0)
}

pub fn standard_rates() -> RateTableSet {
    let mut set = RateTableSet::new();
    set.insert(TransportMode::Dpd, dpd_table().build());
    set.insert(TransportMode::Messagerie, messagerie_table().build());
    set.insert(TransportMode::ForfaitPalette, forfait_table().build());
    set.insert(TransportMode::Affretement, affretement_table().build());
    set
}
