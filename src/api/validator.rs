// ==========================================
// 运输计算器 - 请求校验器
// ==========================================
// 职责: 原始报价请求 → 已校验请求
// 规则:
// 1. 省份编号必须在配置范围内
// 2. 参考号为空或数量 ≤ 0 的行静默跳过
// 3. 至少保留一行, 且不超过参考号上限
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::PricingConfig;
use crate::domain::shipment::{QuoteRequest, ValidLine, ValidatedRequest};
use std::sync::Arc;
use tracing::debug;

pub struct RequestValidator {
    config: Arc<PricingConfig>,
}

impl RequestValidator {
    pub fn new(config: Arc<PricingConfig>) -> Self {
        Self { config }
    }

    /// 校验报价请求
    pub fn validate(&self, request: &QuoteRequest) -> ApiResult<ValidatedRequest> {
        let (min, max) = (self.config.department_min, self.config.department_max);
        if request.department < min || request.department > max {
            return Err(ApiError::InvalidDepartment {
                department: request.department,
                min,
                max,
            });
        }

        let lines: Vec<ValidLine> = request
            .lines
            .iter()
            .filter_map(|line| {
                let reference = line.reference.trim();
                let quantity = u32::try_from(line.quantity).ok().filter(|q| *q > 0);
                match (reference.is_empty(), quantity) {
                    (false, Some(quantity)) => Some(ValidLine {
                        reference: reference.to_string(),
                        quantity,
                    }),
                    _ => {
                        debug!(reference = %line.reference, quantity = line.quantity, "跳过无效订单行");
                        None
                    }
                }
            })
            .collect();

        if lines.is_empty() {
            return Err(ApiError::InvalidInput(
                "至少需要一个有效的参考号/数量".to_string(),
            ));
        }
        if lines.len() > self.config.max_references {
            return Err(ApiError::TooManyReferences {
                count: lines.len(),
                max: self.config.max_references,
            });
        }

        Ok(ValidatedRequest {
            department: request.department as u32,
            lines,
        })
    }
}
