// ==========================================
// 运输计算器 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 转换引擎错误为用户可读的错误消息
// ==========================================

use crate::engine::error::EngineError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("省份编号无效: {department}（有效范围 {min}-{max}）")]
    InvalidDepartment { department: i32, min: i32, max: i32 },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("参考号过多: {count}（最多 {max} 个）")]
    TooManyReferences { count: usize, max: usize },

    // ==========================================
    // 业务错误
    // ==========================================
    #[error("无可行装托方案: {}", .0.join(", "))]
    NoFeasiblePackaging(Vec<String>),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 是否为输入校验错误（计算未执行）
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidDepartment { .. }
                | ApiError::InvalidInput(_)
                | ApiError::TooManyReferences { .. }
        )
    }
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NoFeasiblePackaging { references } => {
                ApiError::NoFeasiblePackaging(references)
            }
        }
    }
}

/// API 结果类型别名
pub type ApiResult<T> = Result<T, ApiError>;
