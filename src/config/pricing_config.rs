// ==========================================
// 运输计算器 - 报价配置
// ==========================================
// 职责: 请求级参数（省份范围、参考号数量上限）
// 来源: JSON 文件 (环境变量 TRANSPORT_CALC_CONFIG 指定) → 缺省值
// 说明: 费率阶梯与组合搜索上限属于业务口径, 不开放配置
// ==========================================

use crate::engine::rate_resolver::{DEPARTMENT_MAX, DEPARTMENT_MIN};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;
use tracing::{info, warn};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "TRANSPORT_CALC_CONFIG";

/// 报价配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// 最小省份编号
    #[serde(default = "default_department_min")]
    pub department_min: i32,

    /// 最大省份编号
    #[serde(default = "default_department_max")]
    pub department_max: i32,

    /// 单次请求参考号上限
    #[serde(default = "default_max_references")]
    pub max_references: usize,
}

fn default_department_min() -> i32 {
    DEPARTMENT_MIN
}

fn default_department_max() -> i32 {
    DEPARTMENT_MAX
}

fn default_max_references() -> usize {
    4
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            department_min: default_department_min(),
            department_max: default_department_max(),
            max_references: default_max_references(),
        }
    }
}

impl PricingConfig {
    /// 从 JSON 文件加载（缺失字段取缺省值）
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: PricingConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 加载配置: 环境变量指定文件, 否则缺省值
    ///
    /// 文件读取或校验失败时记录警告并回退缺省值
    pub fn load() -> Self {
        let Ok(path) = std::env::var(CONFIG_PATH_ENV) else {
            return Self::default();
        };

        match Self::from_json_file(&path) {
            Ok(config) => {
                info!(path = %path, "已加载报价配置");
                config
            }
            Err(e) => {
                warn!(path = %path, error = %e, "报价配置加载失败, 使用缺省值");
                Self::default()
            }
        }
    }

    /// 校验配置取值
    ///
    /// 省份范围必须落在 [1, 95] 内（费率表行号范围）
    pub fn validate(&self) -> Result<(), String> {
        if self.department_min < DEPARTMENT_MIN
            || self.department_max > DEPARTMENT_MAX
            || self.department_min > self.department_max
        {
            return Err(format!(
                "省份范围无效: [{}, {}], 必须在 [{}, {}] 内",
                self.department_min, self.department_max, DEPARTMENT_MIN, DEPARTMENT_MAX
            ));
        }
        if self.max_references == 0 {
            return Err("max_references 必须大于 0".to_string());
        }
        Ok(())
    }
}
