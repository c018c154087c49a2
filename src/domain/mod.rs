// ==========================================
// 打包工位负载均衡系统 - 领域模型层
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 2. 数据模型
// ==========================================
// 职责: 定义领域实体、类型、负载查询接口
// 红线: 不含文件访问逻辑,不含引擎逻辑
// ==========================================

pub mod group;
pub mod order;
pub mod station;
pub mod types;

// 重导出核心类型
pub use group::{GroupedOrders, ItemGroup};
pub use order::{AssignedItem, Order, OrderItem};
pub use station::{Station, StationLoad};
pub use types::{OrderStatus, Priority, StationStatus};
