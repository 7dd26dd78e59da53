// ==========================================
// 设备预测性维护系统 - 导入层
// ==========================================
// 职责: 解析外部上传的特征数据文件
// 红线: 非法数据在进入分类器之前整体拒绝
// ==========================================

pub mod error;
pub mod feature_csv;

// 重导出核心类型
pub use error::ImportError;
pub use feature_csv::FeatureCsvReader;
