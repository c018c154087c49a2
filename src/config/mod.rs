// ==========================================
// 打包工位负载均衡系统 - 配置层
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 9. 配置项全集
// ==========================================
// 职责: 均衡阈值参数管理
// 存储: JSON 配置文件,缺省回落内置默认值
// ==========================================

pub mod balance_config;

// 重导出核心配置类型
pub use balance_config::{BalanceConfig, ConfigError};
