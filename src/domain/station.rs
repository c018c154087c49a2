// ==========================================
// 打包工位负载均衡系统 - 工位领域模型
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 2. 数据模型 / station
// ==========================================

use crate::domain::order::AssignedItem;
use crate::domain::types::StationStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// Station - 打包工位
// ==========================================
// 红线: 工位同质可互换,只以累计工时刻画
// 生命周期: 每次运行新建(total_time=0),运行间不复用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    // ===== 标识 =====
    pub station_id: u32,
    pub name: String,

    // ===== 分配结果 =====
    pub items: Vec<AssignedItem>, // 有序分配项列表
    pub total_time: i64,          // 累计处理时间（分钟）

    // ===== 指标（MetricsCalculator 终态写入） =====
    pub status: StationStatus,
    pub load_balance: i32, // 贴近均值程度 (0-100)
    pub efficiency: i32,   // 贴近最大负载程度 (0-100)
}

impl Station {
    /// 创建空闲工位
    ///
    /// # 参数
    /// - `station_id`: 工位编号（从 1 起）
    pub fn new(station_id: u32) -> Self {
        Self {
            station_id,
            name: format!("Station {}", station_id),
            items: Vec::new(),
            total_time: 0,
            status: StationStatus::Idle,
            load_balance: 0,
            efficiency: 0,
        }
    }

    /// 向工位追加一个分配项
    ///
    /// 写入项的 assigned_station,累加 total_time,状态转为 Active。
    /// 这是分配期唯一的工位变更入口,保证工时守恒。
    pub fn push_item(&mut self, mut item: AssignedItem) {
        item.assigned_station = Some(self.station_id);
        self.total_time += item.effective_cost;
        self.items.push(item);
        self.status = StationStatus::Active;
    }

    /// 按下标移出一个分配项（保持剩余项顺序）,同步扣减 total_time
    ///
    /// # 参数
    /// - `index`: 分配项下标（调用方保证有效）
    pub fn take_item(&mut self, index: usize) -> AssignedItem {
        let item = self.items.remove(index);
        self.total_time -= item.effective_cost;
        item
    }
}

// ==========================================
// Trait: StationLoad
// ==========================================
// 用途: 分配引擎的负载查询接口
pub trait StationLoad {
    /// 是否空闲（无分配项）
    fn is_idle(&self) -> bool;

    /// 分配项数量
    fn item_count(&self) -> usize;

    /// 整组放入是否会造成过载
    fn would_overload(&self, added_cost: i64, avg_time: f64, overload_factor: f64) -> bool;
}

// ==========================================
// StationLoad trait 实现
// ==========================================
impl StationLoad for Station {
    fn is_idle(&self) -> bool {
        self.items.is_empty()
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    /// 整组放入是否会造成过载
    ///
    /// # 参数
    /// - `added_cost`: 待放入组的总工时
    /// - `avg_time`: 当前全工位平均工时
    /// - `overload_factor`: 过载阈值倍率（默认 1.3）
    ///
    /// # 返回
    /// - `true`: 放入后超过 avg_time * overload_factor,应走拆分路径
    fn would_overload(&self, added_cost: i64, avg_time: f64, overload_factor: f64) -> bool {
        (self.total_time + added_cost) as f64 > avg_time * overload_factor
    }
}
