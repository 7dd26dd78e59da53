// ==========================================
// 设备预测性维护系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型与会话状态
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod assessment;
pub mod feature;
pub mod machine;
pub mod types;

// 重导出核心类型
pub use assessment::{
    AssessmentSnapshot, DegradationTrajectory, FinancialSummary, MaintenanceDecision,
};
pub use feature::{FeatureVector, FeatureVectorError, FEATURE_COUNT, SENSOR_COUNT, SETTING_COUNT};
pub use machine::{
    MachineSession, MonitoringSession, ProbabilityRecord, DEFAULT_MACHINES,
};
pub use types::{ClassLabel, DecisionBasis, HealthStatus, MaintenanceAction};
