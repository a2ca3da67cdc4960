// ==========================================
// 运输计算器 - 产品目录加载器
// ==========================================
// 职责: 产品表 (xlsx/csv) → Catalog
// 规则:
// - 每行描述一个包装变体
// - 同一产品的多行按出现顺序聚合为变体列表 (变体顺序即组合搜索的同容量次序)
// - 产品描述与单件重量取该产品首行
// ==========================================

use crate::domain::product::{Catalog, Product};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

pub struct CatalogLoader {
    parser: UniversalFileParser,
    mapper: FieldMapper,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: FieldMapper,
        }
    }

    /// 从文件加载产品目录
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ImportResult<Catalog> {
        let records = self.parser.parse(path.as_ref())?;
        debug!(rows = records.len(), "产品表解析完成");

        let catalog = self.build_catalog(&records)?;
        if catalog.is_empty() {
            return Err(ImportError::EmptySource(path.as_ref().display().to_string()));
        }

        info!(products = catalog.len(), "产品目录加载完成");
        Ok(catalog)
    }

    /// 行记录 → Catalog
    ///
    /// 行号从 2 开始（第 1 行为表头）
    pub fn build_catalog(&self, records: &[HashMap<String, String>]) -> ImportResult<Catalog> {
        let mut products: HashMap<String, Product> = HashMap::new();

        for (idx, record) in records.iter().enumerate() {
            let row = self.mapper.map_product_row(record, idx + 2)?;

            match products.get_mut(&row.reference) {
                Some(product) => {
                    if product.variant_by_type(&row.variant.pallet_type).is_some() {
                        warn!(
                            reference = %row.reference,
                            pallet_type = %row.variant.pallet_type,
                            row = row.row_number,
                            "重复包装变体, 保留两者"
                        );
                    }
                    product.variants.push(row.variant);
                }
                None => {
                    products.insert(
                        row.reference.clone(),
                        Product {
                            reference: row.reference,
                            description: row.description,
                            unit_weight_kg: row.unit_weight_kg,
                            variants: vec![row.variant],
                        },
                    );
                }
            }
        }

        Ok(products.into_values().collect())
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}
