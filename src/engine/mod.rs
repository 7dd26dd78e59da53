// ==========================================
// 设备预测性维护系统 - 引擎层
// ==========================================
// 职责: 实现决策支持流水线的各规则引擎
// 红线: 引擎无状态、不做 I/O,
//       随机源一律通过 UniformSampler 注入,
//       所有决策输出必须可解释
// ==========================================

pub mod decision;
pub mod degradation;
pub mod financial;
pub mod health;
pub mod probability;
pub mod sampling;

// 重导出核心引擎
pub use decision::DecisionEngine;
pub use degradation::DegradationSimulator;
pub use financial::{FinancialModel, FinancialParams};
pub use health::HealthClassifier;
pub use probability::ProbabilityEstimator;
pub use sampling::{FixedSequenceSampler, ThreadRngSampler, UniformSampler};
