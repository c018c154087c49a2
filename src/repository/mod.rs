// ==========================================
// 打包工位负载均衡系统 - 协作方接口层
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 6. 外部接口
// ==========================================
// 职责: 定义订单来源与结果去向的接口(对核心不透明),
// 并提供文件形态的默认实现
// 红线: 全部 I/O 发生在均衡计算之前或之后,绝不交错
// ==========================================

pub mod csv_order_source;
pub mod error;
pub mod json_sink;

use crate::api::balance_api::BalanceReport;
use crate::domain::order::Order;

// 重导出核心类型
pub use csv_order_source::CsvOrderSource;
pub use error::{RepositoryError, RepositoryResult};
pub use json_sink::JsonReportSink;

// ==========================================
// OrderSource Trait
// ==========================================
// 用途: 订单供给接口（计算前调用一次）
// 实现者: CsvOrderSource（或调用方自备实现）
pub trait OrderSource {
    /// 加载全部待分配订单
    ///
    /// # 返回
    /// - Ok(Vec<Order>): 订单快照（可为空）
    /// - Err: 来源读取/解析错误
    fn load_orders(&self) -> RepositoryResult<Vec<Order>>;
}

// ==========================================
// AssignmentSink Trait
// ==========================================
// 用途: 分配结果消费接口（计算后调用一次）
// 实现者: JsonReportSink（或调用方自备实现）
pub trait AssignmentSink {
    /// 持久化/展示均衡报告
    ///
    /// # 参数
    /// - `report`: 完整均衡报告
    fn persist(&self, report: &BalanceReport) -> RepositoryResult<()>;
}
