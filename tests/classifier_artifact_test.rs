// ==========================================
// 分类器工件加载集成测试
// ==========================================
// 测试目标: 验证模型工件的加载/推理/显式重载
// 覆盖范围: 正常加载 / 工件缺失 / JSON 损坏 /
//           结构非法 / reload 生效
// ==========================================

use predictive_maintenance::classifier::{
    ArtifactClassifier, ClassifierArtifact, ClassifierError, DecisionTree, FailureClassifier,
    ScalerParams, TreeNode, ARTIFACT_FORMAT_VERSION,
};
use predictive_maintenance::domain::feature::FEATURE_COUNT;
use predictive_maintenance::domain::types::ClassLabel;
use predictive_maintenance::FeatureVector;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ==========================================
// 测试辅助函数
// ==========================================

/// 以首列阈值分裂的单桩树: x0 <= threshold → 无故障, 否则故障
fn stump(threshold: f64) -> DecisionTree {
    DecisionTree {
        nodes: vec![
            TreeNode {
                feature: 0,
                threshold,
                left: 1,
                right: 2,
                class_index: None,
            },
            TreeNode {
                feature: 0,
                threshold: 0.0,
                left: -1,
                right: -1,
                class_index: Some(0),
            },
            TreeNode {
                feature: 0,
                threshold: 0.0,
                left: -1,
                right: -1,
                class_index: Some(1),
            },
        ],
    }
}

/// 恒等缩放的测试工件
fn test_artifact(threshold: f64) -> ClassifierArtifact {
    ClassifierArtifact {
        format_version: ARTIFACT_FORMAT_VERSION,
        feature_count: FEATURE_COUNT,
        scaler: ScalerParams {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        },
        forest: vec![stump(threshold)],
    }
}

/// 将工件序列化写入临时目录
fn write_artifact(dir: &TempDir, artifact: &ClassifierArtifact) -> PathBuf {
    let path = dir.path().join("model_artifact.json");
    std::fs::write(&path, serde_json::to_string(artifact).unwrap()).unwrap();
    path
}

fn features_with_first(value: f64) -> FeatureVector {
    let mut values = vec![0.0; FEATURE_COUNT];
    values[0] = value;
    FeatureVector::new(values).unwrap()
}

#[test]
fn test_load_and_predict() {
    let dir = TempDir::new().unwrap();
    let path = write_artifact(&dir, &test_artifact(0.5));

    let classifier = ArtifactClassifier::load(&path).unwrap();
    assert_eq!(classifier.artifact_path(), path.as_path());

    assert_eq!(
        classifier.predict(&features_with_first(0.1)).unwrap(),
        ClassLabel::NoFailure
    );
    assert_eq!(
        classifier.predict(&features_with_first(0.9)).unwrap(),
        ClassLabel::Failure
    );
}

#[test]
fn test_missing_artifact_is_fatal() {
    let result = ArtifactClassifier::load(Path::new("/nonexistent/model_artifact.json"));
    match result {
        Err(ClassifierError::ModelUnavailable(msg)) => {
            assert!(msg.contains("model_artifact.json"));
        }
        other => panic!("期望 ModelUnavailable, 实际 {:?}", other.err()),
    }
}

#[test]
fn test_corrupt_json_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model_artifact.json");
    std::fs::write(&path, "{ not valid json").unwrap();

    let result = ArtifactClassifier::load(&path);
    assert!(matches!(result, Err(ClassifierError::ArtifactInvalid(_))));
}

#[test]
fn test_invalid_structure_rejected() {
    let dir = TempDir::new().unwrap();

    // 缩放参数维度与特征数不一致
    let mut artifact = test_artifact(0.5);
    artifact.scaler.mean.pop();
    let path = write_artifact(&dir, &artifact);

    let result = ArtifactClassifier::load(&path);
    assert!(matches!(result, Err(ClassifierError::ArtifactInvalid(_))));
}

#[test]
fn test_explicit_reload_picks_up_new_artifact() {
    let dir = TempDir::new().unwrap();
    // 初始阈值 0.5: x0 = 2.0 判为故障
    let path = write_artifact(&dir, &test_artifact(0.5));

    let classifier = ArtifactClassifier::load(&path).unwrap();
    assert_eq!(
        classifier.predict(&features_with_first(2.0)).unwrap(),
        ClassLabel::Failure
    );

    // 工件更新后,未 reload 前仍使用旧模型
    std::fs::write(
        &path,
        serde_json::to_string(&test_artifact(5.0)).unwrap(),
    )
    .unwrap();
    assert_eq!(
        classifier.predict(&features_with_first(2.0)).unwrap(),
        ClassLabel::Failure
    );

    // 显式 reload 后阈值 5.0 生效: x0 = 2.0 判为无故障
    classifier.reload().unwrap();
    assert_eq!(
        classifier.predict(&features_with_first(2.0)).unwrap(),
        ClassLabel::NoFailure
    );
}

#[test]
fn test_reload_failure_reports_model_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = write_artifact(&dir, &test_artifact(0.5));

    let classifier = ArtifactClassifier::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let result = classifier.reload();
    assert!(matches!(result, Err(ClassifierError::ModelUnavailable(_))));
}
