// ==========================================
// 打包工位负载均衡系统 - 协作方接口错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// 协作方接口错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 订单来源错误 =====
    #[error("订单加载失败: {0}")]
    OrderLoadError(#[from] ImportError),

    // ===== 结果落盘错误 =====
    #[error("结果写出失败: {path}: {message}")]
    SinkWriteError { path: String, message: String },

    #[error("结果序列化失败: {0}")]
    SerializationError(#[from] serde_json::Error),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
