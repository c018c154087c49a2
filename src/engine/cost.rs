// ==========================================
// 打包工位负载均衡系统 - 成本模型引擎
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 4.1 Cost Model
// ==========================================
// 职责: 折算单个订单项的处理时间（分钟）
// 输入: 订单项属性 + 所属订单优先级
// 输出: 取整后的 effective_cost
// 红线: 纯函数,无副作用;非法数值回落为 0,不上抛
// ==========================================

use crate::domain::order::{Order, OrderItem};
use crate::domain::types::Priority;

// ===== 附加工时常量（分钟/件） =====
const VAS_SURCHARGE: f64 = 2.0; // 增值服务
const FRAGILE_SURCHARGE: f64 = 1.0; // 易碎加固
const BUNDLED_HANDLING_SURCHARGE: f64 = 1.0; // 合包搬运（易碎或化学品且非单独装箱）

/// 触发合包搬运附加工时的品类
const HAZARDOUS_CATEGORY: &str = "Chemicals";

// ==========================================
// CostModel - 成本模型引擎
// ==========================================
pub struct CostModel {
    // 无状态引擎,不需要注入依赖
}

impl CostModel {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 折算订单项处理时间
    ///
    /// 计算顺序 (依据 Balance_Engine_Spec 4.1,顺序固定):
    /// 1) base = base_pack_time * quantity
    /// 2) vas → +2/件
    /// 3) fragile → +1/件
    /// 4) 非单独装箱 且 (易碎 或 化学品) → +1/件 合包搬运
    /// 5) 乘优先级因子 (High 0.8 / Medium 1.0 / Low 1.2)
    /// 6) 四舍五入取整（先取整后累加,保证守恒可复现）
    ///
    /// # 参数
    /// - `item`: 订单项
    /// - `priority`: 所属订单优先级
    ///
    /// # 返回
    /// 折算处理时间（分钟,非负整数）
    pub fn cost(&self, item: &OrderItem, priority: Priority) -> i64 {
        // 非法数值回落为 0（负数视同缺失）
        let quantity = item.quantity as f64;
        let base_pack_time = item.base_pack_time.max(0.0);

        let mut minutes = base_pack_time * quantity;

        if item.vas {
            minutes += VAS_SURCHARGE * quantity;
        }
        if item.fragile {
            minutes += FRAGILE_SURCHARGE * quantity;
        }

        // 合包搬运附加: 与其他物品同箱流转的易碎/危险品
        if !item.ship_alone && (item.fragile || item.category == HAZARDOUS_CATEGORY) {
            minutes += BUNDLED_HANDLING_SURCHARGE * quantity;
        }

        minutes *= priority.time_factor();

        minutes.round() as i64
    }

    /// 订单级预估工时（展示用,不参与均衡）
    ///
    /// 口径与下单页一致: 逐项累加 base+vas+fragile（不含合包搬运附加）,
    /// 订单总量整体乘优先级因子后取整一次。
    ///
    /// # 参数
    /// - `order`: 订单
    ///
    /// # 返回
    /// 预估工时（分钟）
    pub fn estimate_order_time(&self, order: &Order) -> i64 {
        let mut total = 0.0;
        for item in &order.items {
            let quantity = item.quantity as f64;
            let mut minutes = item.base_pack_time.max(0.0) * quantity;
            if item.vas {
                minutes += VAS_SURCHARGE * quantity;
            }
            if item.fragile {
                minutes += FRAGILE_SURCHARGE * quantity;
            }
            total += minutes;
        }

        (total * order.priority.time_factor()).round() as i64
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for CostModel {
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
    use crate::domain::order::OrderItem;

    // ==========================================
    // 测试辅助函数
    // ==========================================

    /// 创建测试用的订单项
    fn create_test_item(
        base_pack_time: f64,
        quantity: u32,
        vas: bool,
        fragile: bool,
        ship_alone: bool,
        category: &str,
    ) -> OrderItem {
        OrderItem {
            item_id: "ITM001".to_string(),
            item_name: "Test Item".to_string(),
            category: category.to_string(),
            quantity,
            base_pack_time,
            weight: 1.0,
            dimensions: None,
            vas,
            fragile,
            ship_alone,
        }
    }

    // ==========================================
    // 正常案例测试
    // ==========================================

    #[test]
    fn test_scenario_01_plain_item_medium_priority() {
        // 场景1: 普通项,Medium 优先级,成本 = 基础工时
        let model = CostModel::new();
        let item = create_test_item(10.0, 1, false, false, false, "General");

        assert_eq!(model.cost(&item, Priority::Medium), 10);
    }

    #[test]
    fn test_scenario_02_all_surcharges_high_priority() {
        // 场景2: vas+fragile+化学品合包,High 优先级
        // (10 + 2 + 1 + 1) * 0.8 = 11.2 → 11
        let model = CostModel::new();
        let item = create_test_item(10.0, 1, true, true, false, "Chemicals");

        assert_eq!(model.cost(&item, Priority::High), 11);
    }

    #[test]
    fn test_scenario_03_quantity_multiplies_every_component() {
        // 场景3: 数量放大基础工时与全部附加工时
        // (5*3 + 2*3 + 1*3 + 1*3) * 1.0 = 27
        let model = CostModel::new();
        let item = create_test_item(5.0, 3, true, true, false, "General");

        assert_eq!(model.cost(&item, Priority::Medium), 27);
    }

    #[test]
    fn test_scenario_04_low_priority_inflates_cost() {
        // 场景4: Low 优先级放大工时 10 * 1.2 = 12
        let model = CostModel::new();
        let item = create_test_item(10.0, 1, false, false, false, "General");

        assert_eq!(model.cost(&item, Priority::Low), 12);
    }

    #[test]
    fn test_scenario_05_ship_alone_skips_bundled_surcharge() {
        // 场景5: 单独装箱的易碎品不计合包搬运附加
        // (10 + 1) * 1.0 = 11（而非 12）
        let model = CostModel::new();
        let item = create_test_item(10.0, 1, false, true, true, "General");

        assert_eq!(model.cost(&item, Priority::Medium), 11);
    }

    #[test]
    fn test_scenario_06_chemicals_bundled_surcharge_without_fragile() {
        // 场景6: 非易碎化学品合包流转仍计搬运附加
        // (10 + 1) * 1.0 = 11
        let model = CostModel::new();
        let item = create_test_item(10.0, 1, false, false, false, "Chemicals");

        assert_eq!(model.cost(&item, Priority::Medium), 11);
    }

    // ==========================================
    // 边界案例测试
    // ==========================================

    #[test]
    fn test_scenario_07_negative_pack_time_coerced_to_zero() {
        // 场景7: 负工时回落为 0,附加工时仍生效
        // (0 + 2) * 1.0 = 2
        let model = CostModel::new();
        let item = create_test_item(-5.0, 1, true, false, false, "General");

        assert_eq!(model.cost(&item, Priority::Medium), 2);
    }

    #[test]
    fn test_scenario_08_zero_quantity_yields_zero_cost() {
        // 场景8: 数量 0（导入回落值）成本为 0
        let model = CostModel::new();
        let item = create_test_item(10.0, 0, true, true, false, "Chemicals");

        assert_eq!(model.cost(&item, Priority::High), 0);
    }

    #[test]
    fn test_scenario_09_rounding_half_up() {
        // 场景9: 取整为四舍五入 (3.5 * 1.0 = 3.5 → 4)
        let model = CostModel::new();
        let item = create_test_item(3.5, 1, false, false, false, "General");

        assert_eq!(model.cost(&item, Priority::Medium), 4);
    }

    // ==========================================
    // 订单级预估测试
    // ==========================================

    #[test]
    fn test_scenario_10_order_estimate_excludes_bundled_surcharge() {
        // 场景10: 订单预估只含 base+vas+fragile,整单乘因子后取整一次
        // ((10+2+1) + 5) * 0.8 = 14.4 → 14
        let model = CostModel::new();
        let items = vec![
            create_test_item(10.0, 1, true, true, false, "Chemicals"),
            create_test_item(5.0, 1, false, false, false, "General"),
        ];
        let order = crate::domain::order::Order::new("ORD001", Priority::High, items);

        assert_eq!(model.estimate_order_time(&order), 14);
    }
}
