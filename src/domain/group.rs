// ==========================================
// 打包工位负载均衡系统 - 合包组领域模型
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 3. Group Builder 输出
// ==========================================
// 生命周期: 仅存在于单次均衡运行内部,不序列化落盘
// ==========================================

use crate::domain::order::AssignedItem;

// ==========================================
// ItemGroup - 合包组
// ==========================================
// 用途: 同一订单的非隔离项集合,倾向整组落在同一工位
#[derive(Debug, Clone)]
pub struct ItemGroup {
    pub order_id: String,
    pub items: Vec<AssignedItem>,
    pub total_cost: i64, // 成员 effective_cost 之和
}

impl ItemGroup {
    /// 由成员项构建合包组,累加总工时
    pub fn from_items(order_id: &str, items: Vec<AssignedItem>) -> Self {
        let total_cost = items.iter().map(|i| i.effective_cost).sum();
        Self {
            order_id: order_id.to_string(),
            items,
            total_cost,
        }
    }
}

// ==========================================
// GroupedOrders - 分组结果
// ==========================================
// Group Builder 对全部订单的结构化输出
#[derive(Debug, Clone, Default)]
pub struct GroupedOrders {
    /// 合包组列表（每订单至多一个,空组不收录）
    pub combinable_groups: Vec<ItemGroup>,
    /// 隔离项扁平列表（ship_alone 项,作为单体调度单元）
    pub isolated_items: Vec<AssignedItem>,
}

impl GroupedOrders {
    /// 全部待分配项的总工时（守恒校验用）
    pub fn total_cost(&self) -> i64 {
        let grouped: i64 = self.combinable_groups.iter().map(|g| g.total_cost).sum();
        let isolated: i64 = self.isolated_items.iter().map(|i| i.effective_cost).sum();
        grouped + isolated
    }
}
