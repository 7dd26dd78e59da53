// ==========================================
// 设备预测性维护系统 - 分类器模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 分类器模块错误类型
#[derive(Error, Debug)]
pub enum ClassifierError {
    // ===== 工件加载错误 =====
    /// 致命配置错误: 工件缺失时禁止回退为默认预测
    #[error("模型工件不可用: {0}（请先训练并导出模型工件）")]
    ModelUnavailable(String),

    #[error("模型工件无效: {0}")]
    ArtifactInvalid(String),

    // ===== 推理错误 =====
    #[error("特征数量不匹配: 模型期望 {expected} 维, 输入 {actual} 维")]
    FeatureCountMismatch { expected: usize, actual: usize },

    // ===== 通用错误 =====
    #[error("分类器内部错误: {0}")]
    Internal(String),
}
