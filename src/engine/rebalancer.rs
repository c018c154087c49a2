// ==========================================
// 打包工位负载均衡系统 - 再均衡引擎
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 4.4 Rebalancer
// ==========================================
// 职责: 有界迭代局部搜索,跨工位迁移单项以收窄时间差
// 输入: 初始分配后的工位列表
// 输出: 工位列表（就地迁移）
// 红线: 只接受严格改善的单项迁移;每轮每有序对至多迁移一项
// ==========================================

use crate::domain::station::Station;
use tracing::{debug, instrument};

// ==========================================
// Rebalancer - 再均衡引擎
// ==========================================
pub struct Rebalancer {
    /// 最小迁移门槛（分钟）: T_i > T_j + min_gap 才考虑该有序对,防震荡
    min_gap: i64,
    /// 轮次上限（收敛即提前终止）
    max_passes: u32,
}

impl Rebalancer {
    /// 构造函数
    ///
    /// # 参数
    /// - `min_gap`: 最小迁移门槛（默认配置 5 分钟）
    /// - `max_passes`: 轮次上限（默认配置 10）
    pub fn new(min_gap: i64, max_passes: u32) -> Self {
        Self { min_gap, max_passes }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行再均衡
    ///
    /// 每轮 (依据 Balance_Engine_Spec 4.4):
    /// - 遍历全部有序工位对 (i, j), i ≠ j
    /// - 门槛: T_i > T_j + min_gap 且 i 非空
    /// - 候选评估: improvement = |Ti-Tj| - |(Ti-c)-(Tj+c)|,
    ///   取首个严格最大的正改善项迁移
    /// - 某轮零迁移 → 收敛,提前终止
    ///
    /// # 参数
    /// - `stations`: 工位列表（就地迁移）
    ///
    /// # 返回
    /// 实际执行的轮次数
    #[instrument(skip(self, stations), fields(stations_count = stations.len()))]
    pub fn rebalance(&self, stations: &mut [Station]) -> u32 {
        let mut passes_run = 0;

        for pass in 0..self.max_passes {
            let mut improved = false;
            passes_run = pass + 1;

            for i in 0..stations.len() {
                for j in 0..stations.len() {
                    if i == j {
                        continue;
                    }

                    if self.migrate_best_item(stations, i, j) {
                        improved = true;
                    }
                }
            }

            if !improved {
                // 收敛: 本轮无任何迁移
                debug!(pass = passes_run, "再均衡收敛");
                break;
            }
        }

        passes_run
    }

    /// 在有序对 (from, to) 上迁移至多一个最优项
    ///
    /// # 返回
    /// - `true`: 发生了一次迁移
    fn migrate_best_item(&self, stations: &mut [Station], from: usize, to: usize) -> bool {
        let time_from = stations[from].total_time;
        let time_to = stations[to].total_time;

        // 门槛: 差距不足 min_gap 或源工位为空则跳过
        if time_from <= time_to + self.min_gap || stations[from].items.is_empty() {
            return false;
        }

        // 扫描源工位全部项,取首个严格最大的正改善
        let mut best_index: Option<usize> = None;
        let mut best_improvement: i64 = 0;

        for (index, item) in stations[from].items.iter().enumerate() {
            let cost = item.effective_cost;
            let current_diff = (time_from - time_to).abs();
            let new_diff = ((time_from - cost) - (time_to + cost)).abs();
            let improvement = current_diff - new_diff;

            if improvement > best_improvement {
                best_improvement = improvement;
                best_index = Some(index);
            }
        }

        match best_index {
            Some(index) => {
                let item = stations[from].take_item(index);
                debug!(
                    from = stations[from].station_id,
                    to = stations[to].station_id,
                    item_id = %item.item_id,
                    cost = item.effective_cost,
                    improvement = best_improvement,
                    "迁移分配项"
                );
                stations[to].push_item(item);
                true
            }
            None => false,
        }
    }
}
