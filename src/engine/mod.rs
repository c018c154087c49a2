// ==========================================
// 打包工位负载均衡系统 - 引擎层
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 1.2 模块拆分
// ==========================================
// 职责: 实现均衡业务规则,不做文件访问
// 红线: 引擎不做 I/O;数据流严格单向
// Cost Model → Group Builder → Initial Assigner →
// Rebalancer → Metrics Calculator
// ==========================================

pub mod assigner;
pub mod cost;
pub mod error;
pub mod grouping;
pub mod metrics;
pub mod orchestrator;
pub mod rebalancer;

// 重导出核心引擎
pub use assigner::InitialAssigner;
pub use cost::CostModel;
pub use error::{EngineError, EngineResult};
pub use grouping::GroupBuilder;
pub use metrics::{BalanceSummary, MetricsCalculator};
pub use orchestrator::{BalanceOrchestrator, BalanceResult};
pub use rebalancer::Rebalancer;
