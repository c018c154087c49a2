// ==========================================
// 打包工位负载均衡系统 - 引擎编排器
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 1.1 计算主流程
// 用途: 协调五个核心引擎的执行顺序
// ==========================================
// 红线: 纯函数式运行 —— 输入订单快照 + 工位数,
// 输出完整结果;无进程级状态,并发运行互不干扰
// ==========================================

use crate::config::BalanceConfig;
use crate::domain::order::{AssignedItem, Order};
use crate::domain::station::Station;
use crate::domain::types::OrderStatus;
use crate::engine::assigner::InitialAssigner;
use crate::engine::cost::CostModel;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::grouping::GroupBuilder;
use crate::engine::metrics::{BalanceSummary, MetricsCalculator};
use crate::engine::rebalancer::Rebalancer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ==========================================
// BalanceResult - 均衡结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResult {
    /// 终态工位列表（含分配项与指标）
    pub stations: Vec<Station>,
    /// 回传订单列表（status=Assigned）
    pub orders: Vec<Order>,
    /// 全局负载汇总
    pub summary: BalanceSummary,
}

// ==========================================
// BalanceOrchestrator - 引擎编排器
// ==========================================
pub struct BalanceOrchestrator {
    cost_model: CostModel,
    group_builder: GroupBuilder,
    assigner: InitialAssigner,
    rebalancer: Rebalancer,
    metrics: MetricsCalculator,
}

impl BalanceOrchestrator {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - `config`: 均衡参数配置（阈值/轮次上限）
    pub fn new(config: &BalanceConfig) -> Self {
        Self {
            cost_model: CostModel::new(),
            group_builder: GroupBuilder::new(),
            assigner: InitialAssigner::new(config.overload_factor),
            rebalancer: Rebalancer::new(config.rebalance_min_gap, config.max_rebalance_passes),
            metrics: MetricsCalculator::new(),
        }
    }

    /// 执行完整均衡流程
    ///
    /// # 参数
    /// - `orders`: 订单快照（可为空,空集产生全空闲工位）
    /// - `station_count`: 请求工位数（必须 ≥ 1）
    ///
    /// # 返回
    /// 均衡结果（工位分配 + 回传订单 + 汇总）
    ///
    /// # 错误
    /// - `InvalidConfiguration`: station_count = 0
    #[instrument(skip(self, orders), fields(orders_count = orders.len(), station_count))]
    pub fn balance(
        &self,
        mut orders: Vec<Order>,
        station_count: u32,
    ) -> EngineResult<BalanceResult> {
        if station_count == 0 {
            return Err(EngineError::InvalidConfiguration { station_count });
        }

        info!(
            orders_count = orders.len(),
            total_units = orders.iter().map(|o| o.unit_count()).sum::<u32>(),
            station_count,
            "开始执行均衡流程"
        );

        // 每次运行新建工位集,不跨运行复用
        let mut stations: Vec<Station> = (1..=station_count).map(Station::new).collect();

        // ==========================================
        // 步骤1: Cost Model - 成本折算
        // ==========================================
        debug!("步骤1: 执行成本折算");

        let mut order_items: Vec<(String, Vec<AssignedItem>)> = Vec::with_capacity(orders.len());
        for order in &orders {
            let items = order
                .items
                .iter()
                .map(|item| {
                    let cost = self.cost_model.cost(item, order.priority);
                    AssignedItem::from_order_item(&order.order_id, order.priority, item, cost)
                })
                .collect();
            order_items.push((order.order_id.clone(), items));
        }

        // ==========================================
        // 步骤2: Group Builder - 合包分组
        // ==========================================
        debug!("步骤2: 执行合包分组");

        let grouped = self.group_builder.build_all(order_items);
        let total_cost = grouped.total_cost();

        info!(
            groups_count = grouped.combinable_groups.len(),
            isolated_count = grouped.isolated_items.len(),
            total_cost,
            "合包分组完成"
        );

        // ==========================================
        // 步骤3: Initial Assigner - 初始分配
        // ==========================================
        debug!("步骤3: 执行初始分配");

        self.assigner.assign(grouped, &mut stations);

        // ==========================================
        // 步骤4: Rebalancer - 再均衡
        // ==========================================
        debug!("步骤4: 执行再均衡");

        let passes = self.rebalancer.rebalance(&mut stations);

        info!(passes, "再均衡完成");

        // ==========================================
        // 步骤5: Metrics Calculator - 指标终态化
        // ==========================================
        debug!("步骤5: 执行指标终态化");

        self.metrics.finalize(&mut stations);

        // 订单回传: 项级分配才是权威,订单级标记为多工位分布
        for order in &mut orders {
            order.status = OrderStatus::Assigned;
            order.station = Some("Multiple".to_string());
        }

        let summary = self.metrics.summarize(&orders, &stations);

        info!(
            active_stations = summary.active_stations,
            avg_time = summary.avg_time,
            "均衡流程完成"
        );

        Ok(BalanceResult {
            stations,
            orders,
            summary,
        })
    }
}
