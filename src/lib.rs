// ==========================================
// 打包工位负载均衡系统 - 核心库
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md
// 技术栈: Rust + CSV/Excel 导入 + JSON 报告
// 系统定位: 订单分配决策引擎 (纯函数式均衡计算)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 均衡业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 协作方接口层 - 订单来源/结果去向
pub mod repository;

// 配置层 - 均衡参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{OrderStatus, Priority, StationStatus};

// 领域实体
pub use domain::{AssignedItem, GroupedOrders, ItemGroup, Order, OrderItem, Station, StationLoad};

// 引擎
pub use engine::{
    BalanceOrchestrator, BalanceResult, BalanceSummary, CostModel, GroupBuilder, InitialAssigner,
    MetricsCalculator, Rebalancer,
};

// 配置
pub use config::BalanceConfig;

// API
pub use api::{BalanceApi, BalanceReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "打包工位负载均衡系统";

// ==========================================
// 预编译检查
// ==========================================
