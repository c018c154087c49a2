// ==========================================
// 打包工位负载均衡系统 - 合包分组引擎
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 4.2 Group Builder
// ==========================================
// 职责: 把订单项划分为隔离项与合包组
// 输入: 已折算成本的分配项（按订单）
// 输出: GroupedOrders（合包组列表 + 隔离项扁平列表）
// 红线: ship_alone 项永不并入合包组;每订单至多一个合包组
// ==========================================

use crate::domain::group::{GroupedOrders, ItemGroup};
use crate::domain::order::AssignedItem;

// ==========================================
// GroupBuilder - 合包分组引擎
// ==========================================
pub struct GroupBuilder {
    // 无状态引擎,不需要注入依赖
}

impl GroupBuilder {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 划分单个订单的分配项
    ///
    /// 规则 (依据 Balance_Engine_Spec 4.2):
    /// - ship_alone 项 → 隔离项集合（单体调度,不与同单项捆绑）
    /// - 其余项 → 该订单唯一的合包组（保持同单同工位的拣选便利）
    /// - 无非隔离项的订单不产生合包组
    ///
    /// # 参数
    /// - `order_id`: 订单号
    /// - `items`: 该订单已折算成本的分配项
    /// - `grouped`: 累积输出（跨订单复用）
    pub fn build_into(&self, order_id: &str, items: Vec<AssignedItem>, grouped: &mut GroupedOrders) {
        let mut combinable = Vec::new();

        for item in items {
            if item.ship_alone {
                grouped.isolated_items.push(item);
            } else {
                combinable.push(item);
            }
        }

        if !combinable.is_empty() {
            grouped
                .combinable_groups
                .push(ItemGroup::from_items(order_id, combinable));
        }
    }

    /// 划分多个订单的分配项（保持订单输入顺序）
    ///
    /// # 参数
    /// - `orders`: (订单号, 分配项列表) 序列
    ///
    /// # 返回
    /// 全部订单的分组结果
    pub fn build_all(&self, orders: Vec<(String, Vec<AssignedItem>)>) -> GroupedOrders {
        let mut grouped = GroupedOrders::default();
        for (order_id, items) in orders {
            self.build_into(&order_id, items, &mut grouped);
        }
        grouped
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for GroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Priority;

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

    // ==========================================
    // 正常案例测试
    // ==========================================

    #[test]
    fn test_scenario_01_plain_order_forms_single_group() {
        // 场景1: 无隔离项的订单整体成为一个合包组
        let builder = GroupBuilder::new();
        let items = vec![
            create_test_item("ORD001", "A", 10, false),
            create_test_item("ORD001", "B", 5, false),
        ];

        let grouped = builder.build_all(vec![("ORD001".to_string(), items)]);

        assert_eq!(grouped.combinable_groups.len(), 1);
        assert_eq!(grouped.combinable_groups[0].total_cost, 15);
        assert_eq!(grouped.combinable_groups[0].items.len(), 2);
        assert!(grouped.isolated_items.is_empty());
    }

    #[test]
    fn test_scenario_02_ship_alone_items_split_out() {
        // 场景2: 隔离项从合包组剥离,剩余项仍保持同组
        let builder = GroupBuilder::new();
        let items = vec![
            create_test_item("ORD001", "A", 10, true),
            create_test_item("ORD001", "B", 5, false),
            create_test_item("ORD001", "C", 3, false),
        ];

        let grouped = builder.build_all(vec![("ORD001".to_string(), items)]);

        assert_eq!(grouped.isolated_items.len(), 1);
        assert_eq!(grouped.isolated_items[0].item_id, "A");
        assert_eq!(grouped.combinable_groups.len(), 1);
        assert_eq!(grouped.combinable_groups[0].total_cost, 8);
    }

    #[test]
    fn test_scenario_03_all_ship_alone_order_has_no_group() {
        // 场景3: 全隔离订单不产生合包组
        let builder = GroupBuilder::new();
        let items = vec![
            create_test_item("ORD001", "A", 10, true),
            create_test_item("ORD001", "B", 5, true),
        ];

        let grouped = builder.build_all(vec![("ORD001".to_string(), items)]);

        assert!(grouped.combinable_groups.is_empty());
        assert_eq!(grouped.isolated_items.len(), 2);
    }

    #[test]
    fn test_scenario_04_isolated_items_collected_across_orders() {
        // 场景4: 多订单的隔离项汇入同一扁平列表,合包组按订单各一
        let builder = GroupBuilder::new();
        let orders = vec![
            (
                "ORD001".to_string(),
                vec![
                    create_test_item("ORD001", "A", 10, false),
                    create_test_item("ORD001", "B", 4, true),
                ],
            ),
            (
                "ORD002".to_string(),
                vec![
                    create_test_item("ORD002", "C", 6, false),
                    create_test_item("ORD002", "D", 2, true),
                ],
            ),
        ];

        let grouped = builder.build_all(orders);

        assert_eq!(grouped.combinable_groups.len(), 2);
        assert_eq!(grouped.combinable_groups[0].order_id, "ORD001");
        assert_eq!(grouped.combinable_groups[1].order_id, "ORD002");
        assert_eq!(grouped.isolated_items.len(), 2);
        // 守恒: 10 + 4 + 6 + 2
        assert_eq!(grouped.total_cost(), 22);
    }

    // ==========================================
    // 边界案例测试
    // ==========================================

    #[test]
    fn test_scenario_05_empty_input() {
        // 场景5: 空订单集
        let builder = GroupBuilder::new();
        let grouped = builder.build_all(Vec::new());

        assert!(grouped.combinable_groups.is_empty());
        assert!(grouped.isolated_items.is_empty());
        assert_eq!(grouped.total_cost(), 0);
    }
}
