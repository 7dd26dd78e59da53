// ==========================================
// 设备预测性维护系统 - 健康报表导出API
// ==========================================
// 职责: 将评估快照序列化为 CSV 报表
// 红线: 导出保持全精度,舍入/格式化交由展示层
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::assessment::AssessmentSnapshot;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// 报表列头
const REPORT_HEADERS: [&str; 12] = [
    "machine_code",
    "label",
    "failure_probability",
    "health_status",
    "remaining_useful_life",
    "maintenance_cost",
    "failure_loss",
    "avoided_loss",
    "roi",
    "action",
    "justification",
    "created_at",
];

// ==========================================
// ReportApi - 报表导出API
// ==========================================
pub struct ReportApi;

impl ReportApi {
    pub fn new() -> Self {
        Self
    }

    /// 将快照序列写出为 CSV
    pub fn write_csv<W: Write>(
        &self,
        snapshots: &[AssessmentSnapshot],
        writer: W,
    ) -> ApiResult<()> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        csv_writer
            .write_record(REPORT_HEADERS)
            .map_err(|e| ApiError::ExportFailed(e.to_string()))?;

        for snapshot in snapshots {
            // f64 的 Display 输出为最短往返表示,不损失精度
            csv_writer
                .write_record(&[
                    snapshot.machine_code.clone(),
                    snapshot.label.to_string(),
                    snapshot.failure_probability.to_string(),
                    snapshot.health_status.to_string(),
                    snapshot.remaining_useful_life.to_string(),
                    snapshot.financial.maintenance_cost.to_string(),
                    snapshot.financial.failure_loss.to_string(),
                    snapshot.financial.avoided_loss.to_string(),
                    snapshot.financial.roi.to_string(),
                    snapshot.decision.action.to_string(),
                    snapshot.decision.justification.to_string(),
                    snapshot.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                ])
                .map_err(|e| ApiError::ExportFailed(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| ApiError::ExportFailed(e.to_string()))?;
        Ok(())
    }

    /// 导出为 CSV 字符串
    pub fn to_csv_string(&self, snapshots: &[AssessmentSnapshot]) -> ApiResult<String> {
        let mut buffer = Vec::new();
        self.write_csv(snapshots, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| ApiError::ExportFailed(e.to_string()))
    }

    /// 导出到文件
    pub fn export_to_file(
        &self,
        snapshots: &[AssessmentSnapshot],
        file_path: &Path,
    ) -> ApiResult<()> {
        let file = File::create(file_path).map_err(|e| {
            ApiError::ExportFailed(format!("{}: {}", file_path.display(), e))
        })?;
        self.write_csv(snapshots, file)?;

        info!(
            path = %file_path.display(),
            rows = snapshots.len(),
            "健康报表已导出"
        );
        Ok(())
    }
}

impl Default for ReportApi {
    fn default() -> Self {
        Self::new()
    }
}
