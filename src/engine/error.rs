// ==========================================
// 运输计算器 - 引擎层错误类型
// ==========================================
// 说明: 无费率、单个参考号无法装托均不是错误, 不在此列
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// 全部参考号均无法装托
    #[error("无可行装托方案: {}", .references.join(", "))]
    NoFeasiblePackaging { references: Vec<String> },
}

pub type EngineResult<T> = Result<T, EngineError>;
