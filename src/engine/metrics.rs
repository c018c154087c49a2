// ==========================================
// 打包工位负载均衡系统 - 指标计算引擎
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 4.5 Metrics Calculator
// ==========================================
// 职责: 由最终分配派生工位状态与展示指标
// 输入: 再均衡后的工位列表
// 输出: 工位列表（写入 status/load_balance/efficiency）+ 全局汇总
// 红线: 只读派生,每次运行全量重算,无增量路径
// ==========================================

use crate::domain::order::Order;
use crate::domain::station::{Station, StationLoad};
use crate::domain::types::StationStatus;
use serde::{Deserialize, Serialize};

// ===== 状态判定阈值 (ratio = total_time / avg_time) =====
const OVERLOADED_RATIO: f64 = 1.2;
const OPTIMAL_RATIO: f64 = 0.8;

// ==========================================
// BalanceSummary - 全局负载汇总
// ==========================================
// 用途: 面板统计展示（订单数/活跃工位/均值/均衡效率）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub total_orders: usize,
    pub active_stations: usize,
    /// 全工位平均工时（分钟,取整）
    pub avg_time: i64,
    /// 时间均衡效率: round(min/max * 100),无活跃工位时为 0
    pub time_balance_efficiency: i32,
}

// ==========================================
// MetricsCalculator - 指标计算引擎
// ==========================================
pub struct MetricsCalculator {
    // 无状态引擎,不需要注入依赖
}

impl MetricsCalculator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 终态化工位指标
    ///
    /// 规则 (依据 Balance_Engine_Spec 4.5):
    /// - total_time = 0 → load_balance=0, efficiency=0, status=Idle
    /// - 否则 avg = 全工位均值, max = 全工位最大:
    ///   load_balance = round(100 - |t-avg|/avg*100), 下限截断为 0
    ///   efficiency   = round(t / max(max,1) * 100)
    ///   status: ratio = t/avg; >1.2 Overloaded; >0.8 Optimal; 否则 LightLoad
    ///
    /// # 参数
    /// - `stations`: 工位列表（就地写入指标）
    pub fn finalize(&self, stations: &mut [Station]) {
        if stations.is_empty() {
            return;
        }

        let total: i64 = stations.iter().map(|s| s.total_time).sum();
        let avg_time = total as f64 / stations.len() as f64;
        let max_time = stations.iter().map(|s| s.total_time).max().unwrap_or(0);

        for station in stations.iter_mut() {
            if station.total_time == 0 {
                station.load_balance = 0;
                station.efficiency = 0;
                station.status = StationStatus::Idle;
                continue;
            }

            let time = station.total_time as f64;

            let deviation = (time - avg_time).abs() / avg_time * 100.0;
            station.load_balance = ((100.0 - deviation).round() as i32).max(0);

            station.efficiency = (time / (max_time.max(1) as f64) * 100.0).round() as i32;

            let ratio = time / avg_time;
            station.status = if ratio > OVERLOADED_RATIO {
                StationStatus::Overloaded
            } else if ratio > OPTIMAL_RATIO {
                StationStatus::Optimal
            } else {
                StationStatus::LightLoad
            };
        }
    }

    /// 计算全局负载汇总
    ///
    /// # 参数
    /// - `orders`: 本次运行的订单列表
    /// - `stations`: 终态化后的工位列表
    ///
    /// # 返回
    /// 面板统计汇总
    pub fn summarize(&self, orders: &[Order], stations: &[Station]) -> BalanceSummary {
        let active_stations = stations
            .iter()
            .filter(|s| s.status != StationStatus::Idle)
            .count();

        let avg_time = if stations.is_empty() {
            0
        } else {
            let total: i64 = stations.iter().map(|s| s.total_time).sum();
            (total as f64 / stations.len() as f64).round() as i64
        };

        // 均衡效率: 活跃工位间 min/max 的贴近程度
        let active_times: Vec<i64> = stations
            .iter()
            .filter(|s| !s.is_idle())
            .map(|s| s.total_time)
            .collect();

        let time_balance_efficiency = match (active_times.iter().max(), active_times.iter().min())
        {
            (Some(&max), Some(&min)) if max > 0 => {
                (((max - (max - min)) as f64 / max as f64) * 100.0).round() as i32
            }
            _ => 0,
        };

        BalanceSummary {
            total_orders: orders.len(),
            active_stations,
            avg_time,
            time_balance_efficiency,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}
