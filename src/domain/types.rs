// ==========================================
// 打包工位负载均衡系统 - 领域类型定义
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 0.2 订单优先级体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订单优先级 (Order Priority)
// ==========================================
// 红线: 优先级是单一乘法因子,不是排序键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,   // 加急 (0.8x)
    Medium, // 常规 (1.0x)
    Low,    // 宽松 (1.2x)
}

impl Priority {
    /// 处理时间乘法因子
    ///
    /// # 返回
    /// - High → 0.8 (加急订单压缩工时)
    /// - Medium → 1.0
    /// - Low → 1.2 (宽松订单放大工时)
    pub fn time_factor(&self) -> f64 {
        match self {
            Priority::High => 0.8,
            Priority::Medium => 1.0,
            Priority::Low => 1.2,
        }
    }

    /// 从字符串解析优先级（大小写不敏感）
    ///
    /// 未识别的值回落为 Medium（导入数据质量问题不阻断批次）
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "HIGH" => Priority::High,
            "MEDIUM" => Priority::Medium,
            "LOW" => Priority::Low,
            _ => Priority::Medium, // 默认值
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 订单生命周期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,  // 待分配
    Assigned, // 已分配
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Assigned => write!(f, "Assigned"),
        }
    }
}

// ==========================================
// 工位状态 (Station Status)
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 5. Metrics Calculator
// Idle/Active 为分配期状态, Optimal/Overloaded/LightLoad 为指标终态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationStatus {
    Idle,       // 空闲（无分配项）
    Active,     // 分配中
    Optimal,    // 负载适中 (0.8 < ratio ≤ 1.2)
    Overloaded, // 过载 (ratio > 1.2)
    #[serde(rename = "Light Load")]
    LightLoad, // 轻载 (ratio ≤ 0.8)
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationStatus::Idle => write!(f, "Idle"),
            StationStatus::Active => write!(f, "Active"),
            StationStatus::Optimal => write!(f, "Optimal"),
            StationStatus::Overloaded => write!(f, "Overloaded"),
            StationStatus::LightLoad => write!(f, "Light Load"),
        }
    }
}
