// ==========================================
// 打包工位负载均衡系统 - 主数据目录导入
// ==========================================
// 依据: 主数据目录导入管道 (MasterItems 工作簿)
// ==========================================
// 文件形态: 首个工作表,按列位置取值:
// 0=name, 1=category, 2=packTime, 3=weight,
// 4=dimensions, 5=vas, 6=fragile, 7=shipAlone
// 红线: 缺失单元格取目录默认值,不阻断批次
// ==========================================

use crate::domain::order::OrderItem;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

// ===== 目录默认值 =====
const DEFAULT_CATEGORY: &str = "General";
const DEFAULT_PACK_TIME: f64 = 1.0;
const DEFAULT_WEIGHT: f64 = 0.1;
const DEFAULT_DIMENSIONS: &str = "10x10x10";

// ==========================================
// MasterItem - 主数据目录项
// ==========================================
// 用途: 可下单物品的静态档案（下单时补数量成为订单项）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterItem {
    pub item_id: String, // "ITM001" 形式,按行序生成
    pub name: String,
    pub category: String,
    pub pack_time: f64, // 单件基础打包时间（分钟）
    pub weight: f64,
    pub dimensions: String,
    pub vas: bool,
    pub fragile: bool,
    pub ship_alone: bool,
}

impl MasterItem {
    /// 按数量实例化为订单项
    ///
    /// # 参数
    /// - `quantity`: 下单数量
    pub fn to_order_item(&self, quantity: u32) -> OrderItem {
        OrderItem {
            item_id: self.item_id.clone(),
            item_name: self.name.clone(),
            category: self.category.clone(),
            quantity,
            base_pack_time: self.pack_time,
            weight: self.weight,
            dimensions: Some(self.dimensions.clone()),
            vas: self.vas,
            fragile: self.fragile,
            ship_alone: self.ship_alone,
        }
    }
}

// ==========================================
// CatalogImporter - 主数据目录导入器
// ==========================================
pub struct CatalogImporter {
    // 无状态导入器,不需要注入依赖
}

impl CatalogImporter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 从 Excel 工作簿导入主数据目录
    ///
    /// 首行视为表头跳过;数据行按列位置取值,缺失单元格
    /// 回落目录默认值;item_id 按行序生成（ITM001 起）。
    ///
    /// # 参数
    /// - `file_path`: 工作簿路径（.xlsx）
    ///
    /// # 返回
    /// - Ok(Vec<MasterItem>): 目录项列表
    /// - Err: 文件读取/解析错误
    pub fn import_from_excel(&self, file_path: &Path) -> ImportResult<Vec<MasterItem>> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError("Excel 文件无工作表".to_string()));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut items = Vec::new();
        // 跳过表头行,item_id 从 ITM001 起按行序生成
        for (row_idx, data_row) in range.rows().skip(1).enumerate() {
            let cell = |col: usize| -> String {
                data_row
                    .get(col)
                    .map(|c| c.to_string().trim().to_string())
                    .unwrap_or_default()
            };

            let name = cell(0);
            let item = MasterItem {
                item_id: format!("ITM{:03}", row_idx + 1),
                name: if name.is_empty() {
                    format!("Item {}", row_idx + 1)
                } else {
                    name
                },
                category: non_empty_or(cell(1), DEFAULT_CATEGORY),
                pack_time: parse_f64_or(&cell(2), DEFAULT_PACK_TIME),
                weight: parse_f64_or(&cell(3), DEFAULT_WEIGHT),
                dimensions: non_empty_or(cell(4), DEFAULT_DIMENSIONS),
                vas: parse_flag(&cell(5)),
                fragile: parse_flag(&cell(6)),
                ship_alone: parse_flag(&cell(7)),
            };
            items.push(item);
        }

        info!(
            file = %file_path.display(),
            items_count = items.len(),
            "主数据目录导入完成"
        );

        Ok(items)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for CatalogImporter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元格解析辅助函数
// ==========================================

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn parse_f64_or(value: &str, default: f64) -> f64 {
    value.trim().parse::<f64>().unwrap_or(default)
}

/// 布尔单元格: true/1/yes（大小写不敏感）→ true
fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}
