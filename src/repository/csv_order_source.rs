// ==========================================
// 打包工位负载均衡系统 - CSV 订单来源
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 6. 外部接口 / 订单来源
// ==========================================
// 职责: OrderSource 的文件实现,委托导入层解析
// ==========================================

use crate::domain::order::Order;
use crate::importer::order_mapper::OrderImporter;
use crate::repository::error::RepositoryResult;
use crate::repository::OrderSource;
use std::path::PathBuf;

// ==========================================
// CsvOrderSource - CSV 订单来源
// ==========================================
pub struct CsvOrderSource {
    path: PathBuf,
    importer: OrderImporter,
}

impl CsvOrderSource {
    /// 构造函数
    ///
    /// # 参数
    /// - `path`: 订单 CSV 文件路径
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            importer: OrderImporter::new(),
        }
    }
}

impl OrderSource for CsvOrderSource {
    /// 加载全部待分配订单
    fn load_orders(&self) -> RepositoryResult<Vec<Order>> {
        let orders = self.importer.import_from_csv(&self.path)?;
        Ok(orders)
    }
}
