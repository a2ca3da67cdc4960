// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 生成临时产品表与费率表文件
// ==========================================

#![allow(dead_code)]

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PRODUCT_HEADER: &str = "Nom produit,Description,Poids unitaire,type palette,poids palette en kg,pièce par palette,hauteur palette en cm,transport autorisé";

/// 写入产品表 CSV
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 产品表路径
pub fn write_product_csv(rows: &[&str]) -> Result<(TempDir, PathBuf), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("produits.csv");

    let mut content = String::from(PRODUCT_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content)?;

    Ok((dir, path))
}

/// 写入标准产品表（与 test_data_builder::standard_catalog 一致）
pub fn write_standard_product_csv() -> Result<(TempDir, PathBuf), Box<dyn Error>> {
    write_product_csv(&[
        "CONE-A,Cône,\"0,2\",carton,0.5,50,40,\"DPD, Messagerie\"",
        "CONE-A,Cône,\"0,2\",80x120,20,500,150,",
        "GANT-B,Gants,0.1,carton,0.3,100,30,DPD",
        "GANT-B,Gants,0.1,80x120,20,2000,140,",
        "BARRIERE,Barrière,12,carton,1,2,60,Messagerie",
        "BARRIERE,Barrière,12,80x120,25,40,180,",
    ])
}

/// 写入线性费率 CSV: 第 c 列 = base + step × c, 全部 95 个省份
pub fn write_linear_rate_csv(
    dir: &Path,
    file_name: &str,
    columns: usize,
    base: f64,
    step: f64,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(file_name);

    let mut content = String::from("Département");
    for c in 1..=columns {
        content.push_str(&format!(",{}", c));
    }
    content.push('\n');
    for department in 1..=95 {
        content.push_str(&department.to_string());
        for c in 1..=columns {
            content.push_str(&format!(",{}", base + step * c as f64));
        }
        content.push('\n');
    }
    fs::write(&path, content)?;

    Ok(path)
}

/// 写入标准费率目录（每个运输方式一个 CSV）
pub fn write_standard_rate_dir() -> Result<TempDir, Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    write_linear_rate_csv(dir.path(), "Colis (DPD).csv", 30, 5.0, 0.5)?;
    write_linear_rate_csv(dir.path(), "Messagerie.csv", 23, 40.0, 5.0)?;
    write_linear_rate_csv(dir.path(), "Forfait palette.csv", 1, 120.0, 0.0)?;
    write_linear_rate_csv(dir.path(), "Affrètement.csv", 19, 400.0, 100.0)?;
    Ok(dir)
}
