// ==========================================
// 打包工位负载均衡系统 - 均衡业务 API
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 6. 外部接口
// ==========================================
// 职责: 参数校验 + 引擎编排 + 报告封装 + 协作方驱动
// 红线: 核心计算保持纯函数;run_id/时间戳只出现在报告信封
// ==========================================

use crate::api::error::ApiResult;
use crate::config::BalanceConfig;
use crate::domain::order::Order;
use crate::engine::orchestrator::{BalanceOrchestrator, BalanceResult};
use crate::repository::{AssignmentSink, OrderSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

// ==========================================
// BalanceReport - 均衡报告（落盘/展示信封）
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceReport {
    /// 本次运行标识
    pub run_id: Uuid,
    /// 报告生成时间
    pub generated_at: DateTime<Utc>,
    /// 请求工位数
    pub station_count: u32,
    /// 均衡结果（工位分配 + 回传订单 + 汇总）
    pub result: BalanceResult,
}

// ==========================================
// BalanceApi - 均衡业务 API
// ==========================================
pub struct BalanceApi {
    config: BalanceConfig,
    orchestrator: BalanceOrchestrator,
}

impl BalanceApi {
    /// 用指定配置创建 API 实例
    ///
    /// # 参数
    /// - `config`: 均衡参数配置
    ///
    /// # 错误
    /// - `Config`: 配置值非法
    pub fn new(config: BalanceConfig) -> ApiResult<Self> {
        config.validate()?;
        let orchestrator = BalanceOrchestrator::new(&config);
        Ok(Self {
            config,
            orchestrator,
        })
    }

    /// 用内置默认配置创建 API 实例
    pub fn with_defaults() -> Self {
        let config = BalanceConfig::default();
        let orchestrator = BalanceOrchestrator::new(&config);
        Self {
            config,
            orchestrator,
        }
    }

    /// 当前生效配置
    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行均衡并封装报告
    ///
    /// 前置条件: station_count ≥ 1（0 由引擎拒绝）;
    /// orders 可为空（产生全空闲工位）。
    ///
    /// # 参数
    /// - `orders`: 订单快照
    /// - `station_count`: 请求工位数
    ///
    /// # 返回
    /// 完整均衡报告
    pub fn balance(&self, orders: Vec<Order>, station_count: u32) -> ApiResult<BalanceReport> {
        let result = self.orchestrator.balance(orders, station_count)?;

        Ok(BalanceReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            station_count,
            result,
        })
    }

    /// 驱动完整协作流程: 来源加载 → 均衡 → 结果落盘
    ///
    /// I/O 严格发生在计算之前（加载）与之后（落盘）,绝不交错。
    ///
    /// # 参数
    /// - `source`: 订单来源
    /// - `sink`: 结果去向
    /// - `station_count`: 请求工位数
    ///
    /// # 返回
    /// 完整均衡报告（已落盘）
    pub fn run(
        &self,
        source: &dyn OrderSource,
        sink: &dyn AssignmentSink,
        station_count: u32,
    ) -> ApiResult<BalanceReport> {
        let orders = source.load_orders()?;

        info!(orders_count = orders.len(), station_count, "订单加载完成");

        let report = self.balance(orders, station_count)?;

        sink.persist(&report)?;

        Ok(report)
    }
}
