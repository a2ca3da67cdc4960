// ==========================================
// 运输计算器 - 命令行入口
// ==========================================
// 用法:
//   transport-calc <产品表.xlsx|csv> <费率表.xlsx|费率CSV目录> <省份编号> <参考号>=<数量> ...
//
// 输出: 报价结果 (JSON) 写入 stdout, 日志写入 stderr
// ==========================================

use anyhow::{anyhow, bail, Context};
use std::path::Path;
use std::sync::Arc;
use transport_calc::domain::{OrderLine, QuoteRequest, RateTableSet};
use transport_calc::{logging, CatalogLoader, PricingConfig, QuoteApi, RateTableLoader};

const USAGE: &str =
    "用法: transport-calc <产品表.xlsx|csv> <费率表.xlsx|费率CSV目录> <省份编号> <参考号>=<数量> ...";

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let products_path = args.next().ok_or_else(|| anyhow!(USAGE))?;
    let rates_path = args.next().ok_or_else(|| anyhow!(USAGE))?;
    let department: i32 = args
        .next()
        .ok_or_else(|| anyhow!(USAGE))?
        .trim()
        .parse()
        .context("省份编号必须为整数")?;
    let lines = args
        .map(|arg| parse_line(&arg))
        .collect::<anyhow::Result<Vec<_>>>()?;

    tracing::info!("==================================================");
    tracing::info!("{} v{}", transport_calc::APP_NAME, transport_calc::VERSION);
    tracing::info!("==================================================");

    let config = PricingConfig::load();
    config.validate().map_err(|e| anyhow!(e))?;

    let catalog = CatalogLoader::new()
        .load(&products_path)
        .with_context(|| format!("产品表加载失败: {}", products_path))?;
    let tables = load_rates(Path::new(&rates_path))
        .with_context(|| format!("费率表加载失败: {}", rates_path))?;

    let api = QuoteApi::new(Arc::new(catalog), Arc::new(tables), Arc::new(config));
    let result = api.quote(&QuoteRequest { department, lines })?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// 解析 "参考号=数量" 参数
fn parse_line(arg: &str) -> anyhow::Result<OrderLine> {
    let (reference, quantity) = arg
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("订单行格式应为 <参考号>=<数量>: {}", arg))?;
    let quantity: i64 = quantity
        .trim()
        .parse()
        .with_context(|| format!("数量必须为整数: {}", arg))?;
    Ok(OrderLine::new(reference, quantity))
}

/// 费率表: xlsx 工作簿, 或每个运输方式一个 CSV 的目录
fn load_rates(path: &Path) -> anyhow::Result<RateTableSet> {
    let loader = RateTableLoader::new();
    if !path.is_dir() {
        return Ok(loader.load_workbook(path)?);
    }

    let mut set = RateTableSet::new();
    for entry in std::fs::read_dir(path)? {
        let file = entry?.path();
        let is_csv = file
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !is_csv {
            continue;
        }
        match loader.load_csv_by_name(&file) {
            Ok((mode, table)) => set.insert(mode, table),
            Err(e) => tracing::warn!(file = %file.display(), error = %e, "跳过费率文件"),
        }
    }
    if set.modes().is_empty() {
        bail!("目录中无可识别的费率 CSV: {}", path.display());
    }
    Ok(set)
}
