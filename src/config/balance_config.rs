// ==========================================
// 打包工位负载均衡系统 - 均衡参数配置
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 9. 配置项全集
// ==========================================
// 职责: 阈值参数加载与校验
// 存储: JSON 配置文件（缺省时使用内置默认值）
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

// ===== 内置默认值（与历史行为保持一致,勿随意调整） =====
const DEFAULT_OVERLOAD_FACTOR: f64 = 1.3;
const DEFAULT_REBALANCE_MIN_GAP: i64 = 5;
const DEFAULT_MAX_REBALANCE_PASSES: u32 = 10;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件解析失败: {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("配置值非法 (key={key}): {message}")]
    InvalidValue { key: String, message: String },
}

// ==========================================
// BalanceConfig - 均衡参数配置
// ==========================================
// 两个阈值是经验常量,来源于产线实测,无解析公式;
// 作为配置参数暴露,默认值保持行为兼容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// 过载阈值倍率: 整组落位超过 avg * factor 时改走拆分路径
    #[serde(default = "default_overload_factor")]
    pub overload_factor: f64,

    /// 再均衡最小迁移门槛（分钟）: 工位对差距不超过该值不迁移
    #[serde(default = "default_rebalance_min_gap")]
    pub rebalance_min_gap: i64,

    /// 再均衡轮次上限（收敛即提前终止）
    #[serde(default = "default_max_rebalance_passes")]
    pub max_rebalance_passes: u32,
}

fn default_overload_factor() -> f64 {
    DEFAULT_OVERLOAD_FACTOR
}

fn default_rebalance_min_gap() -> i64 {
    DEFAULT_REBALANCE_MIN_GAP
}

fn default_max_rebalance_passes() -> u32 {
    DEFAULT_MAX_REBALANCE_PASSES
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            overload_factor: DEFAULT_OVERLOAD_FACTOR,
            rebalance_min_gap: DEFAULT_REBALANCE_MIN_GAP,
            max_rebalance_passes: DEFAULT_MAX_REBALANCE_PASSES,
        }
    }
}

impl BalanceConfig {
    /// 从 JSON 文件加载配置
    ///
    /// 文件中缺失的字段回落为内置默认值。
    ///
    /// # 参数
    /// - `path`: 配置文件路径
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: BalanceConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// 加载默认配置
    ///
    /// 探测用户配置目录下的 config.json;文件不存在或加载失败时
    /// 回落为内置默认值（告警,不报错 —— 配置缺失不是故障）。
    pub fn load_default() -> Self {
        match Self::default_config_path() {
            Some(path) if path.exists() => match Self::from_json_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "已加载配置文件");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "配置文件加载失败,使用默认值");
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    /// 默认配置文件路径: {用户配置目录}/pack-station-balancer/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pack-station-balancer").join("config.json"))
    }

    /// 校验配置值
    ///
    /// # 错误
    /// - `InvalidValue`: overload_factor 非正或非有限;min_gap 为负
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.overload_factor.is_finite() || self.overload_factor <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "overload_factor".to_string(),
                message: format!("必须为正有限数, 实际 {}", self.overload_factor),
            });
        }

        if self.rebalance_min_gap < 0 {
            return Err(ConfigError::InvalidValue {
                key: "rebalance_min_gap".to_string(),
                message: format!("不允许为负, 实际 {}", self.rebalance_min_gap),
            });
        }

        Ok(())
    }
}
