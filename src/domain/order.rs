// ==========================================
// 打包工位负载均衡系统 - 订单领域模型
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 2. 数据模型
// ==========================================
// 职责: 订单与订单项实体定义,不含分配逻辑
// ==========================================

use crate::domain::types::{OrderStatus, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// OrderItem - 订单项（目录形态）
// ==========================================
// 用途: 一条打包工作单元的静态属性
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    // ===== 标识 =====
    pub item_id: String,   // 物品编号
    pub item_name: String, // 物品名称

    // ===== 分类 =====
    pub category: String, // 品类（"Chemicals" 触发合包附加工时）

    // ===== 工时参数 =====
    pub quantity: u32,       // 数量（导入时非法值回落为 0）
    pub base_pack_time: f64, // 单件基础打包时间（分钟）

    // ===== 物理属性（仅展示，不参与成本） =====
    pub weight: f64,                // 重量 (kg)
    pub dimensions: Option<String>, // 尺寸 (如 "30x20x10")

    // ===== 处理标志 =====
    pub vas: bool,        // 增值服务（礼品包装等）
    pub fragile: bool,    // 易碎
    pub ship_alone: bool, // 必须单独装箱（危险品/超规）
}

// ==========================================
// AssignedItem - 分配项（单次均衡运行的工作视图）
// ==========================================
// 生命周期: 每次均衡运行开始时由订单项派生,运行结束即弃,
// 不跨运行保留身份
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignedItem {
    pub order_id: String,
    pub item_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub priority: Priority,
    pub vas: bool,
    pub fragile: bool,
    pub ship_alone: bool,

    // ===== 派生字段 =====
    pub effective_cost: i64,           // 折算处理时间（分钟,已取整）
    pub assigned_station: Option<u32>, // 分配工位（初始分配/再均衡时写入）
}

impl AssignedItem {
    /// 由订单项派生分配项
    ///
    /// # 参数
    /// - `order_id`: 所属订单号
    /// - `priority`: 所属订单优先级
    /// - `item`: 订单项
    /// - `effective_cost`: CostModel 折算后的处理时间
    pub fn from_order_item(
        order_id: &str,
        priority: Priority,
        item: &OrderItem,
        effective_cost: i64,
    ) -> Self {
        Self {
            order_id: order_id.to_string(),
            item_id: item.item_id.clone(),
            item_name: item.item_name.clone(),
            quantity: item.quantity,
            priority,
            vas: item.vas,
            fragile: item.fragile,
            ship_alone: item.ship_alone,
            effective_cost,
            assigned_station: None,
        }
    }
}

// ==========================================
// Order - 客户订单
// ==========================================
// 红线: priority 是运行期不变输入,决定该订单全部项的统一乘法因子
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    // ===== 标识 =====
    pub order_id: String,
    #[serde(default)]
    pub customer_name: Option<String>,

    // ===== 调度属性 =====
    pub priority: Priority,
    pub status: OrderStatus,
    #[serde(default)]
    pub station: Option<String>, // 均衡后固定为 "Multiple"（项级分配才是权威）

    // ===== 订单项 =====
    pub items: Vec<OrderItem>,

    // ===== 展示字段 =====
    pub estimated_time: i64, // 订单级预估工时（导入时计算,不参与均衡）
    #[serde(default)]
    pub has_vas: bool,
    #[serde(default)]
    pub has_fragile: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// 创建待分配订单,派生展示标志
    ///
    /// # 参数
    /// - `order_id`: 订单号
    /// - `priority`: 优先级
    /// - `items`: 订单项列表
    pub fn new(order_id: &str, priority: Priority, items: Vec<OrderItem>) -> Self {
        let has_vas = items.iter().any(|i| i.vas);
        let has_fragile = items.iter().any(|i| i.fragile);
        Self {
            order_id: order_id.to_string(),
            customer_name: None,
            priority,
            status: OrderStatus::Pending,
            station: None,
            items,
            estimated_time: 0,
            has_vas,
            has_fragile,
            created_at: None,
        }
    }

    /// 订单项总数（按数量展开）
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
