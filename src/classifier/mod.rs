// ==========================================
// 设备预测性维护系统 - 分类器适配层
// ==========================================
// 职责: 封装外部训练的二分类器与缩放器,
//       对核心流水线仅暴露 predict 契约
// ==========================================

pub mod adapter;
pub mod artifact;
pub mod error;

// 重导出核心类型
pub use adapter::{
    default_artifact_path, ArtifactClassifier, FailureClassifier, ARTIFACT_FILE_NAME,
    MODEL_PATH_ENV,
};
pub use artifact::{
    ClassifierArtifact, DecisionTree, ScalerParams, TreeNode, ARTIFACT_FORMAT_VERSION,
};
pub use error::ClassifierError;
