// ==========================================
// 运输计算器 - 报价 API
// ==========================================
// 职责: 请求校验 + 引擎编排, 对外提供单一报价入口
// 说明: 目录与费率表由外部加载器构建后注入, 只读共享,
//       多个报价可并发执行而无需加锁
// ==========================================

use crate::api::error::ApiResult;
use crate::api::validator::RequestValidator;
use crate::config::PricingConfig;
use crate::domain::product::Catalog;
use crate::domain::rate_table::RateTableSet;
use crate::domain::shipment::{QuoteRequest, QuoteResult};
use crate::engine::QuoteOrchestrator;
use std::sync::Arc;

pub struct QuoteApi {
    catalog: Arc<Catalog>,
    tables: Arc<RateTableSet>,
    validator: RequestValidator,
    orchestrator: QuoteOrchestrator,
}

impl QuoteApi {
    /// 创建报价 API
    ///
    /// # 参数
    /// - catalog: 产品目录
    /// - tables: 费率表
    /// - config: 报价配置
    pub fn new(catalog: Arc<Catalog>, tables: Arc<RateTableSet>, config: Arc<PricingConfig>) -> Self {
        Self {
            catalog,
            tables,
            validator: RequestValidator::new(config),
            orchestrator: QuoteOrchestrator::new(),
        }
    }

    /// 计算报价
    ///
    /// # 返回
    /// - Ok(QuoteResult): 报价结果; `is_priced() == false` 表示无可用费率
    /// - Err(ApiError): 输入无效或所有参考号均无法装托
    pub fn quote(&self, request: &QuoteRequest) -> ApiResult<QuoteResult> {
        let validated = self.validator.validate(request)?;
        let result = self
            .orchestrator
            .quote(&self.catalog, &self.tables, &validated)?;
        Ok(result)
    }

    /// 目录中的全部参考号
    pub fn references(&self) -> Vec<&str> {
        self.catalog.references()
    }
}
