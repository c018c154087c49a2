// ==========================================
// 打包工位负载均衡系统 - 订单字段映射
// ==========================================
// 依据: 订单文件导入管道 - 阶段 1: 字段映射与订单聚合
// ==========================================
// 文件形态: 扁平 CSV,一行一个订单项,列:
// orderID,itemID,itemName,category,packTime,weight,
// dimensions,vas,fragile,priority,quantity[,shipAlone]
// (shipAlone 列可缺省,缺省视同 false)
// 红线: 数值字段解析失败回落为 0,不阻断批次;
// 订单优先级由该订单首行确定
// ==========================================

use crate::domain::order::{Order, OrderItem};
use crate::domain::types::Priority;
use crate::engine::cost::CostModel;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{CsvParser, FileParser};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

// ==========================================
// OrderFieldMapper - 订单字段映射器
// ==========================================
pub struct OrderFieldMapper {
    // 无状态映射器,不需要注入依赖
}

impl OrderFieldMapper {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 把原始行记录聚合为订单列表
    ///
    /// 规则:
    /// - 按 orderID 聚合,保持首次出现顺序
    /// - 订单优先级由首行确定（大小写不敏感,未识别回落 Medium）
    /// - orderID 为空的行按数据质量问题跳过
    /// - 聚合后派生 has_vas / has_fragile / estimated_time
    ///
    /// # 参数
    /// - `rows`: 原始行记录（HashMap<列名, 值>）
    ///
    /// # 返回
    /// 待分配订单列表（status=Pending）
    pub fn map_rows(&self, rows: Vec<HashMap<String, String>>) -> Vec<Order> {
        let mut orders: Vec<Order> = Vec::new();
        let mut index_by_id: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0usize;

        for row in rows {
            let order_id = field(&row, "orderID");
            if order_id.is_empty() {
                skipped += 1;
                continue;
            }

            let item = self.map_item(&row);

            match index_by_id.get(&order_id) {
                Some(&idx) => {
                    orders[idx].items.push(item);
                }
                None => {
                    let priority = Priority::from_str(&field(&row, "priority"));
                    let order = Order::new(&order_id, priority, vec![item]);
                    index_by_id.insert(order_id, orders.len());
                    orders.push(order);
                }
            }
        }

        if skipped > 0 {
            debug!(skipped, "跳过 orderID 为空的行");
        }

        // 聚合完成后统一派生展示字段
        let cost_model = CostModel::new();
        for order in &mut orders {
            order.has_vas = order.items.iter().any(|i| i.vas);
            order.has_fragile = order.items.iter().any(|i| i.fragile);
            order.estimated_time = cost_model.estimate_order_time(order);
        }

        orders
    }

    /// 映射单行为订单项（数值字段 fail-soft）
    fn map_item(&self, row: &HashMap<String, String>) -> OrderItem {
        let dimensions = field(row, "dimensions");

        OrderItem {
            item_id: field(row, "itemID"),
            item_name: field(row, "itemName"),
            category: field(row, "category"),
            quantity: parse_u32_or_zero(&field(row, "quantity")),
            base_pack_time: parse_f64_or_zero(&field(row, "packTime")),
            weight: parse_f64_or_zero(&field(row, "weight")),
            dimensions: if dimensions.is_empty() {
                None
            } else {
                Some(dimensions)
            },
            vas: parse_flag(&field(row, "vas")),
            fragile: parse_flag(&field(row, "fragile")),
            ship_alone: parse_flag(&field(row, "shipAlone")),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for OrderFieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// OrderImporter - 订单文件导入门面
// ==========================================
// 用途: 文件解析 + 字段映射的一站式入口
pub struct OrderImporter {
    parser: CsvParser,
    mapper: OrderFieldMapper,
}

impl OrderImporter {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            parser: CsvParser,
            mapper: OrderFieldMapper::new(),
        }
    }

    /// 从 CSV 文件导入订单
    ///
    /// # 参数
    /// - `file_path`: 订单文件路径（.csv）
    ///
    /// # 返回
    /// - Ok(Vec<Order>): 待分配订单列表
    /// - Err: 文件读取/解析错误
    pub fn import_from_csv(&self, file_path: &Path) -> ImportResult<Vec<Order>> {
        let rows = self.parser.parse_to_raw_records(file_path)?;
        let orders = self.mapper.map_rows(rows);

        info!(
            file = %file_path.display(),
            orders_count = orders.len(),
            "订单导入完成"
        );

        Ok(orders)
    }
}

impl Default for OrderImporter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 字段解析辅助函数
// ==========================================

/// 读取列值（缺列视同空串）
fn field(row: &HashMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// 浮点解析,失败回落 0（fail-soft,不上抛）
fn parse_f64_or_zero(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// 无符号整数解析,失败回落 0
fn parse_u32_or_zero(value: &str) -> u32 {
    value.trim().parse::<u32>().unwrap_or(0)
}

/// 布尔标志解析: true/1/yes（大小写不敏感）→ true,其余 → false
fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::OrderStatus;

    // ==========================================
    // 测试辅助函数
    // ==========================================

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn item_row(order_id: &str, item_id: &str, pack_time: &str, priority: &str) -> HashMap<String, String> {
        row(&[
            ("orderID", order_id),
            ("itemID", item_id),
            ("itemName", "Widget"),
            ("category", "General"),
            ("packTime", pack_time),
            ("weight", "1.5"),
            ("dimensions", "10x10x10"),
            ("vas", "false"),
            ("fragile", "false"),
            ("priority", priority),
            ("quantity", "1"),
        ])
    }

    // ==========================================
    // 正常案例测试
    // ==========================================

    #[test]
    fn test_rows_grouped_by_order_in_first_seen_order() {
        let mapper = OrderFieldMapper::new();
        let rows = vec![
            item_row("ORD002", "A", "5", "High"),
            item_row("ORD001", "B", "3", "Low"),
            item_row("ORD002", "C", "2", "High"),
        ];

        let orders = mapper.map_rows(rows);

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, "ORD002");
        assert_eq!(orders[0].items.len(), 2);
        assert_eq!(orders[1].order_id, "ORD001");
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[test]
    fn test_priority_fixed_by_first_row() {
        // 同一订单后续行的 priority 不覆盖首行
        let mapper = OrderFieldMapper::new();
        let rows = vec![
            item_row("ORD001", "A", "5", "High"),
            item_row("ORD001", "B", "3", "Low"),
        ];

        let orders = mapper.map_rows(rows);

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].priority, Priority::High);
    }

    #[test]
    fn test_estimated_time_derived_per_order() {
        // (5 + 3) * 0.8 = 6.4 → 6
        let mapper = OrderFieldMapper::new();
        let rows = vec![
            item_row("ORD001", "A", "5", "High"),
            item_row("ORD001", "B", "3", "High"),
        ];

        let orders = mapper.map_rows(rows);

        assert_eq!(orders[0].estimated_time, 6);
    }

    // ==========================================
    // 边界案例测试
    // ==========================================

    #[test]
    fn test_malformed_numeric_fields_coerced_to_zero() {
        // fail-soft: 非法数值回落 0,不阻断
        let mapper = OrderFieldMapper::new();
        let mut bad = item_row("ORD001", "A", "abc", "Medium");
        bad.insert("quantity".to_string(), "n/a".to_string());
        bad.insert("weight".to_string(), "".to_string());

        let orders = mapper.map_rows(vec![bad]);

        assert_eq!(orders.len(), 1);
        let item = &orders[0].items[0];
        assert_eq!(item.base_pack_time, 0.0);
        assert_eq!(item.quantity, 0);
        assert_eq!(item.weight, 0.0);
    }

    #[test]
    fn test_rows_with_empty_order_id_skipped() {
        let mapper = OrderFieldMapper::new();
        let rows = vec![
            item_row("", "A", "5", "Medium"),
            item_row("ORD001", "B", "3", "Medium"),
        ];

        let orders = mapper.map_rows(rows);

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, "ORD001");
    }

    #[test]
    fn test_unknown_priority_falls_back_to_medium() {
        let mapper = OrderFieldMapper::new();
        let rows = vec![item_row("ORD001", "A", "5", "Critical")];

        let orders = mapper.map_rows(rows);

        assert_eq!(orders[0].priority, Priority::Medium);
    }

    #[test]
    fn test_flag_parsing_variants() {
        let mapper = OrderFieldMapper::new();
        let mut r = item_row("ORD001", "A", "5", "Medium");
        r.insert("vas".to_string(), "TRUE".to_string());
        r.insert("fragile".to_string(), "1".to_string());
        r.insert("shipAlone".to_string(), "no".to_string());

        let orders = mapper.map_rows(vec![r]);

        let item = &orders[0].items[0];
        assert!(item.vas);
        assert!(item.fragile);
        assert!(!item.ship_alone);
        assert!(orders[0].has_vas);
        assert!(orders[0].has_fragile);
    }
}
