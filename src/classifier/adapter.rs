// ==========================================
// 设备预测性维护系统 - 故障分类器适配层
// ==========================================
// 职责: 以 trait 形式对外提供"特征向量 → 分类标签"
//       的外部能力,并实现基于模型工件的默认适配器
// 红线: 工件在进程启动时加载一次并常驻,
//       预测路径禁止重复读盘;
//       工件缺失是致命配置错误,禁止默认预测
// ==========================================

use crate::classifier::artifact::ClassifierArtifact;
use crate::classifier::error::ClassifierError;
use crate::domain::feature::FeatureVector;
use crate::domain::types::ClassLabel;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::info;

/// 模型工件路径环境变量
pub const MODEL_PATH_ENV: &str = "PREDICT_MAINT_MODEL_PATH";

/// 默认工件文件名
pub const ARTIFACT_FILE_NAME: &str = "model_artifact.json";

// ==========================================
// FailureClassifier - 分类能力接口
// ==========================================
pub trait FailureClassifier: Send + Sync {
    /// 对一条特征向量做二分类预测
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ClassifierError>;
}

// ==========================================
// ArtifactClassifier - 工件分类器
// ==========================================
// 持有加载后的工件;reload 为显式操作,
// 仅在工件文件更新后由调用方触发
pub struct ArtifactClassifier {
    artifact_path: PathBuf,
    artifact: RwLock<ClassifierArtifact>,
}

impl ArtifactClassifier {
    /// 加载模型工件并构造分类器
    ///
    /// # 错误
    /// - 文件缺失/不可读 → ModelUnavailable (致命配置错误)
    /// - JSON 非法或结构校验失败 → ArtifactInvalid
    pub fn load(artifact_path: &Path) -> Result<Self, ClassifierError> {
        let artifact = Self::read_artifact(artifact_path)?;

        info!(
            path = %artifact_path.display(),
            trees = artifact.forest.len(),
            features = artifact.feature_count,
            "模型工件加载完成"
        );

        Ok(Self {
            artifact_path: artifact_path.to_path_buf(),
            artifact: RwLock::new(artifact),
        })
    }

    /// 重新加载工件 (仅在工件文件更新后调用)
    pub fn reload(&self) -> Result<(), ClassifierError> {
        let artifact = Self::read_artifact(&self.artifact_path)?;

        let mut guard = self
            .artifact
            .write()
            .map_err(|e| ClassifierError::Internal(format!("锁获取失败: {}", e)))?;
        *guard = artifact;

        info!(path = %self.artifact_path.display(), "模型工件已重新加载");
        Ok(())
    }

    /// 工件文件路径
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    fn read_artifact(path: &Path) -> Result<ClassifierArtifact, ClassifierError> {
        if !path.exists() {
            return Err(ClassifierError::ModelUnavailable(
                path.display().to_string(),
            ));
        }

        let raw = fs::read_to_string(path)
            .map_err(|e| ClassifierError::ModelUnavailable(format!("{}: {}", path.display(), e)))?;

        let artifact: ClassifierArtifact = serde_json::from_str(&raw)
            .map_err(|e| ClassifierError::ArtifactInvalid(format!("{}: {}", path.display(), e)))?;

        artifact.validate()?;
        Ok(artifact)
    }
}

impl FailureClassifier for ArtifactClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ClassifierError> {
        let guard = self
            .artifact
            .read()
            .map_err(|e| ClassifierError::Internal(format!("锁获取失败: {}", e)))?;
        guard.predict(features)
    }
}

// ==========================================
// 默认工件路径
// ==========================================

/// 解析默认模型工件路径
///
/// 优先级:
/// 1. 环境变量 PREDICT_MAINT_MODEL_PATH
/// 2. 用户数据目录 predictive-maintenance/model_artifact.json
/// 3. 回退 ./model/model_artifact.json
pub fn default_artifact_path() -> PathBuf {
    if let Ok(path) = std::env::var(MODEL_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Some(data_dir) = dirs::data_dir() {
        return data_dir
            .join("predictive-maintenance")
            .join(ARTIFACT_FILE_NAME);
    }

    PathBuf::from("./model").join(ARTIFACT_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_is_model_unavailable() {
        let result = ArtifactClassifier::load(Path::new("/nonexistent/model_artifact.json"));
        assert!(matches!(result, Err(ClassifierError::ModelUnavailable(_))));
    }

    #[test]
    fn test_default_artifact_path_not_empty() {
        let path = default_artifact_path();
        assert!(path.to_string_lossy().ends_with(ARTIFACT_FILE_NAME));
    }
}
