// ==========================================
// 打包工位负载均衡系统 - API层错误类型
// ==========================================
// 职责: 聚合各层错误,转换为调用方友好的错误消息
// 工具: thiserror 派生宏
// ==========================================

use crate::config::ConfigError;
use crate::engine::error::EngineError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 输入校验错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 下层错误透传 =====
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
