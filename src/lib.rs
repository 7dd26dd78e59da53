// ==========================================
// 设备预测性维护系统 - 核心库
// ==========================================
// 技术栈: Rust + 外部训练模型工件
// 系统定位: 决策支持系统 (人工最终控制权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 分类器适配层 - 外部模型能力
pub mod classifier;

// 导入层 - 外部数据
pub mod importer;

// 监测层 - 实时读数采样
pub mod monitor;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ClassLabel, DecisionBasis, HealthStatus, MaintenanceAction};

// 领域实体
pub use domain::{
    AssessmentSnapshot, DegradationTrajectory, FeatureVector, FinancialSummary, MachineSession,
    MaintenanceDecision, MonitoringSession, ProbabilityRecord,
};

// 引擎
pub use engine::{
    DecisionEngine, DegradationSimulator, FinancialModel, FinancialParams, HealthClassifier,
    ProbabilityEstimator,
};

// 随机采样抽象
pub use engine::{FixedSequenceSampler, ThreadRngSampler, UniformSampler};

// 分类器
pub use classifier::{ArtifactClassifier, ClassifierError, FailureClassifier};

// API
pub use api::{AnalysisApi, ApiError, ApiResult, ReportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设备预测性维护系统";

// ==========================================
// 预编译检查
// ==========================================
