// ==========================================
// 运输计算器 - API 层
// ==========================================
// 职责: 对外报价接口, 输入校验, 错误转换
// ==========================================

pub mod error;
pub mod quote_api;
pub mod validator;

pub use error::{ApiError, ApiResult};
pub use quote_api::QuoteApi;
pub use validator::RequestValidator;
