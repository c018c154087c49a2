// ==========================================
// 打包工位负载均衡系统 - JSON 结果落盘
// ==========================================
// 依据: Balance_Engine_Spec_v1.0.md - 6. 外部接口 / 结果去向
// ==========================================
// 职责: AssignmentSink 的文件实现（美化 JSON）
// ==========================================

use crate::api::balance_api::BalanceReport;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::AssignmentSink;
use std::path::PathBuf;
use tracing::info;

// ==========================================
// JsonReportSink - JSON 报告落盘
// ==========================================
pub struct JsonReportSink {
    path: PathBuf,
}

impl JsonReportSink {
    /// 构造函数
    ///
    /// # 参数
    /// - `path`: 输出文件路径
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AssignmentSink for JsonReportSink {
    /// 写出均衡报告（美化 JSON,整文件覆盖）
    fn persist(&self, report: &BalanceReport) -> RepositoryResult<()> {
        let json = serde_json::to_string_pretty(report)?;

        std::fs::write(&self.path, json).map_err(|e| RepositoryError::SinkWriteError {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(
            path = %self.path.display(),
            stations_count = report.result.stations.len(),
            "均衡报告已写出"
        );

        Ok(())
    }
}
