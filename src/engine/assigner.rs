// ==========================================
// 打包工位负载均衡系统 - 初始分配引擎
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 4.3 Initial Assigner
// ==========================================
// 职责: LPT 贪心装箱 + 过载触发拆分
// 输入: 分组结果 + 空工位列表
// 输出: 工位列表（就地写入分配项）
// 红线: 合包组优先整组落位;拆分仅在过载判定命中时发生
// ==========================================

use crate::domain::group::{GroupedOrders, ItemGroup};
use crate::domain::order::AssignedItem;
use crate::domain::station::{Station, StationLoad};
use tracing::{debug, instrument};

// ==========================================
// InitialAssigner - 初始分配引擎
// ==========================================
pub struct InitialAssigner {
    /// 过载阈值倍率（整组落位超过 avg * factor 时改走拆分路径）
    overload_factor: f64,
}

impl InitialAssigner {
    /// 构造函数
    ///
    /// # 参数
    /// - `overload_factor`: 过载阈值倍率（默认配置 1.3）
    pub fn new(overload_factor: f64) -> Self {
        Self { overload_factor }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行初始分配
    ///
    /// 算法 (依据 Balance_Engine_Spec 4.3, LPT 贪心):
    /// 1) 合包组按 total_cost 降序稳定排序
    /// 2) 逐组取当前最小负载工位（同负载取编号最小）
    /// 3) 过载判定命中且组内多于 1 项 → 组内项按成本降序逐项
    ///    落最小负载工位（每次落位后重算）
    /// 4) 否则整组落位
    /// 5) 隔离项按成本降序,逐项落最小负载工位
    ///
    /// # 参数
    /// - `grouped`: 分组结果
    /// - `stations`: 工位列表（非空,按编号升序,就地写入）
    #[instrument(skip(self, grouped, stations), fields(
        groups_count = grouped.combinable_groups.len(),
        isolated_count = grouped.isolated_items.len(),
        stations_count = stations.len()
    ))]
    pub fn assign(&self, grouped: GroupedOrders, stations: &mut [Station]) {
        let GroupedOrders {
            mut combinable_groups,
            mut isolated_items,
        } = grouped;

        // LPT: 大组先落位（稳定排序,同成本保持输入顺序）
        combinable_groups.sort_by(|a, b| b.total_cost.cmp(&a.total_cost));

        for group in combinable_groups {
            self.place_group(group, stations);
        }

        // 隔离项同样按 LPT 逐项落位
        isolated_items.sort_by(|a, b| b.effective_cost.cmp(&a.effective_cost));

        for item in isolated_items {
            let idx = least_loaded_index(stations);
            stations[idx].push_item(item);
        }
    }

    /// 落位单个合包组（整组或拆分）
    fn place_group(&self, group: ItemGroup, stations: &mut [Station]) {
        let avg_time = average_time(stations);
        let best = least_loaded_index(stations);

        let would_overload =
            stations[best].would_overload(group.total_cost, avg_time, self.overload_factor);

        if would_overload && group.items.len() > 1 {
            // 拆分路径: 整组落位会让单一工位吃掉过大份额
            debug!(
                order_id = %group.order_id,
                group_cost = group.total_cost,
                avg_time,
                "合包组触发过载拆分"
            );
            self.place_split(group.items, stations);
        } else {
            // 整组落位,保持同单同工位
            for item in group.items {
                stations[best].push_item(item);
            }
        }
    }

    /// 拆分落位: 组内项按成本降序逐项落最小负载工位
    fn place_split(&self, mut items: Vec<AssignedItem>, stations: &mut [Station]) {
        items.sort_by(|a, b| b.effective_cost.cmp(&a.effective_cost));

        for item in items {
            let idx = least_loaded_index(stations);
            stations[idx].push_item(item);
        }
    }
}

// ==========================================
// 工位选择辅助函数
// ==========================================

/// 当前最小负载工位下标（同负载取 station_id 最小）
///
/// 调用方保证 `stations` 非空。
fn least_loaded_index(stations: &[Station]) -> usize {
    let mut best = 0;
    for (idx, station) in stations.iter().enumerate().skip(1) {
        let current = &stations[best];
        if station.total_time < current.total_time
            || (station.total_time == current.total_time
                && station.station_id < current.station_id)
        {
            best = idx;
        }
    }
    best
}

/// 全工位平均负载
fn average_time(stations: &[Station]) -> f64 {
    if stations.is_empty() {
        return 0.0;
    }
    let total: i64 = stations.iter().map(|s| s.total_time).sum();
    total as f64 / stations.len() as f64
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::group::GroupedOrders;
    use crate::domain::types::{Priority, StationStatus};

    // ==========================================
    // 测试辅助函数
    // ==========================================

    fn create_test_item(order_id: &str, item_id: &str, cost: i64, ship_alone: bool) -> AssignedItem {
        AssignedItem {
            order_id: order_id.to_string(),
            item_id: item_id.to_string(),
            item_name: format!("Item {}", item_id),
            quantity: 1,
            priority: Priority::Medium,
            vas: false,
            fragile: false,
            ship_alone,
            effective_cost: cost,
            assigned_station: None,
        }
    }

    fn create_test_group(order_id: &str, costs: &[i64]) -> ItemGroup {
        let items = costs
            .iter()
            .enumerate()
            .map(|(i, &c)| create_test_item(order_id, &format!("I{}", i), c, false))
            .collect();
        ItemGroup::from_items(order_id, items)
    }

    fn create_stations(count: u32) -> Vec<Station> {
        (1..=count).map(Station::new).collect()
    }

    fn total_time(stations: &[Station]) -> i64 {
        stations.iter().map(|s| s.total_time).sum()
    }

    // ==========================================
    // 正常案例测试
    // ==========================================

    #[test]
    fn test_scenario_01_single_group_lands_on_one_station() {
        // 场景1: 单组整组落位,其余工位保持空闲
        let assigner = InitialAssigner::new(1.3);
        let mut stations = create_stations(2);
        let grouped = GroupedOrders {
            combinable_groups: vec![create_test_group("ORD001", &[10])],
            isolated_items: vec![],
        };

        assigner.assign(grouped, &mut stations);

        assert_eq!(stations[0].total_time, 10);
        assert_eq!(stations[0].status, StationStatus::Active);
        assert_eq!(stations[1].total_time, 0);
        assert_eq!(stations[1].status, StationStatus::Idle);
    }

    #[test]
    fn test_scenario_02_lpt_order_biggest_group_first() {
        // 场景2: LPT 降序落位,大组先占空工位
        let assigner = InitialAssigner::new(1.3);
        let mut stations = create_stations(2);
        let grouped = GroupedOrders {
            combinable_groups: vec![
                create_test_group("ORD_SMALL", &[5]),
                create_test_group("ORD_BIG", &[20]),
            ],
            isolated_items: vec![],
        };

        assigner.assign(grouped, &mut stations);

        // 大组先落 Station 1,小组随后落最小负载的 Station 2
        assert_eq!(stations[0].items[0].order_id, "ORD_BIG");
        assert_eq!(stations[0].total_time, 20);
        assert_eq!(stations[1].items[0].order_id, "ORD_SMALL");
        assert_eq!(stations[1].total_time, 5);
    }

    #[test]
    fn test_scenario_03_tie_breaks_on_lowest_station_id() {
        // 场景3: 同负载取编号最小工位
        let assigner = InitialAssigner::new(1.3);
        let mut stations = create_stations(3);
        let grouped = GroupedOrders {
            combinable_groups: vec![create_test_group("ORD001", &[7])],
            isolated_items: vec![],
        };

        assigner.assign(grouped, &mut stations);

        assert_eq!(stations[0].total_time, 7);
        assert_eq!(stations[1].total_time, 0);
        assert_eq!(stations[2].total_time, 0);
    }

    #[test]
    fn test_scenario_04_overload_triggers_split() {
        // 场景4: 过载判定命中时组被拆分到多个工位
        // 预置负载: S1=10, S2=10 → avg 随落位推进变化
        let assigner = InitialAssigner::new(1.3);
        let mut stations = create_stations(2);
        stations[0].push_item(create_test_item("PRE", "P1", 10, false));
        stations[1].push_item(create_test_item("PRE", "P2", 10, false));

        // avg = 10, 整组落位 10 + 30 = 40 > 13 → 拆分
        let grouped = GroupedOrders {
            combinable_groups: vec![create_test_group("ORD001", &[12, 10, 8])],
            isolated_items: vec![],
        };

        assigner.assign(grouped, &mut stations);

        // 拆分: 12→S1(22), 10→S2(20), 8→S2(28)
        assert_eq!(stations[0].total_time, 22);
        assert_eq!(stations[1].total_time, 28);
        // 守恒
        assert_eq!(total_time(&stations), 50);
    }

    #[test]
    fn test_scenario_05_single_item_group_never_splits() {
        // 场景5: 单项组即使过载也整组落位（无可拆分对象）
        let assigner = InitialAssigner::new(1.3);
        let mut stations = create_stations(2);
        stations[0].push_item(create_test_item("PRE", "P1", 10, false));
        stations[1].push_item(create_test_item("PRE", "P2", 10, false));

        let grouped = GroupedOrders {
            combinable_groups: vec![create_test_group("ORD001", &[100])],
            isolated_items: vec![],
        };

        assigner.assign(grouped, &mut stations);

        assert_eq!(stations[0].total_time, 110);
        assert_eq!(stations[1].total_time, 10);
    }

    #[test]
    fn test_scenario_06_isolated_items_placed_individually() {
        // 场景6: 隔离项按成本降序逐项落最小负载工位
        let assigner = InitialAssigner::new(1.3);
        let mut stations = create_stations(2);
        let grouped = GroupedOrders {
            combinable_groups: vec![],
            isolated_items: vec![
                create_test_item("ORD001", "A", 3, true),
                create_test_item("ORD001", "B", 9, true),
                create_test_item("ORD002", "C", 6, true),
            ],
        };

        assigner.assign(grouped, &mut stations);

        // 降序 9, 6, 3: 9→S1, 6→S2, 3→S2
        assert_eq!(stations[0].total_time, 9);
        assert_eq!(stations[1].total_time, 9);
        assert_eq!(stations[0].items[0].item_id, "B");
    }

    #[test]
    fn test_scenario_07_groups_before_isolated() {
        // 场景7: 隔离项在全部合包组之后落位
        let assigner = InitialAssigner::new(1.3);
        let mut stations = create_stations(2);
        let grouped = GroupedOrders {
            combinable_groups: vec![create_test_group("ORD001", &[8])],
            isolated_items: vec![create_test_item("ORD002", "X", 20, true)],
        };

        assigner.assign(grouped, &mut stations);

        // 组先落 S1(8),隔离项后落最小负载的 S2(20)
        assert_eq!(stations[0].total_time, 8);
        assert_eq!(stations[1].total_time, 20);
        assert_eq!(stations[1].items[0].item_id, "X");
    }

    // ==========================================
    // 边界案例测试
    // ==========================================

    #[test]
    fn test_scenario_08_assigned_station_written_on_every_item() {
        // 场景8: 每个分配项都带上工位编号
        let assigner = InitialAssigner::new(1.3);
        let mut stations = create_stations(3);
        let grouped = GroupedOrders {
            combinable_groups: vec![create_test_group("ORD001", &[5, 4])],
            isolated_items: vec![create_test_item("ORD002", "X", 6, true)],
        };

        assigner.assign(grouped, &mut stations);

        for station in &stations {
            for item in &station.items {
                assert_eq!(item.assigned_station, Some(station.station_id));
            }
        }
    }

    #[test]
    fn test_scenario_09_empty_grouped_input_leaves_stations_idle() {
        // 场景9: 空输入不改变工位
        let assigner = InitialAssigner::new(1.3);
        let mut stations = create_stations(2);

        assigner.assign(GroupedOrders::default(), &mut stations);

        assert!(stations.iter().all(|s| s.is_idle()));
        assert!(stations.iter().all(|s| s.status == StationStatus::Idle));
    }
}
