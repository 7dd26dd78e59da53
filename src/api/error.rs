// ==========================================
// 设备预测性维护系统 - API层错误类型
// ==========================================
// 职责: 定义应用边界错误类型,
//       将分类器/导入/校验错误转换为业务错误
// 红线: 前置条件未满足必须与"成功但无数据"可区分,
//       除 ROI 除零保护外不得吞错为看似合理的默认值
// ==========================================

use crate::classifier::error::ClassifierError;
use crate::domain::feature::FeatureVectorError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 配置/启动错误
    // ==========================================
    /// 模型工件缺失或不可读: 致命配置错误,不重试,不默认预测
    #[error("模型不可用: {0}")]
    ModelUnavailable(String),

    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("文件导入失败: {0}")]
    ImportFailed(String),

    // ==========================================
    // 前置条件错误
    // ==========================================
    /// 机台尚无预测结果,下游计算 (退化/财务/决策) 被门控
    #[error("尚无预测结果: machine={machine_code}")]
    NoPredictionYet { machine_code: String },

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("报表导出失败: {0}")]
    ExportFailed(String),

    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 从下层错误转换
// ==========================================

impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        match err {
            // 工件缺失与工件损坏对调用方同为"模型不可用"的配置错误
            ClassifierError::ModelUnavailable(msg) => ApiError::ModelUnavailable(msg),
            ClassifierError::ArtifactInvalid(msg) => ApiError::ModelUnavailable(msg),
            ClassifierError::FeatureCountMismatch { expected, actual } => ApiError::InvalidInput(
                format!("特征数量不匹配: 期望 {}, 实际 {}", expected, actual),
            ),
            ClassifierError::Internal(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<FeatureVectorError> for ApiError {
    fn from(err: FeatureVectorError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_error_conversion() {
        let api_err: ApiError =
            ClassifierError::ModelUnavailable("model_artifact.json".to_string()).into();
        assert!(matches!(api_err, ApiError::ModelUnavailable(_)));

        let api_err: ApiError = ClassifierError::FeatureCountMismatch {
            expected: 24,
            actual: 23,
        }
        .into();
        match api_err {
            ApiError::InvalidInput(msg) => {
                assert!(msg.contains("24"));
                assert!(msg.contains("23"));
            }
            other => panic!("期望 InvalidInput, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_feature_error_conversion() {
        let api_err: ApiError = FeatureVectorError::LengthMismatch {
            expected: 24,
            actual: 10,
        }
        .into();
        assert!(matches!(api_err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn test_no_prediction_yet_is_distinguishable() {
        let err = ApiError::NoPredictionYet {
            machine_code: "MC-01".to_string(),
        };
        assert!(err.to_string().contains("MC-01"));
    }
}
