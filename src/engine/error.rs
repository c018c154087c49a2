// ==========================================
// 打包工位负载均衡系统 - 引擎层错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================
// 传播策略: 引擎只对结构性非法配置报错;
// 单项数据异常就地吸收(回落为 0),不阻断批次
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 配置错误 =====
    #[error("非法配置: 工位数量必须 ≥ 1, 实际 {station_count}")]
    InvalidConfiguration { station_count: u32 },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
