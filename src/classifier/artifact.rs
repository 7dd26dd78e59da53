// ==========================================
// 设备预测性维护系统 - 分类器工件格式与推理
// ==========================================
// 职责: 定义训练侧导出的模型工件 (JSON) 及其推理
// 内容: 标准化缩放参数 + 决策树集成
// 红线: 工件在加载时整体校验,
//       非法结构不得进入预测路径
// ==========================================

use crate::classifier::error::ClassifierError;
use crate::domain::feature::FeatureVector;
use crate::domain::types::ClassLabel;
use serde::{Deserialize, Serialize};

/// 当前工件格式版本
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

// ==========================================
// ScalerParams - 标准化缩放参数
// ==========================================
// 对应训练侧的逐特征均值/标准差
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ScalerParams {
    /// 逐特征标准化: (x - mean) / scale
    ///
    /// scale 为 0 的退化列只做去均值
    fn transform(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| {
                if *scale == 0.0 {
                    x - mean
                } else {
                    (x - mean) / scale
                }
            })
            .collect()
    }
}

// ==========================================
// TreeNode - 决策树节点
// ==========================================
// left/right 为子节点下标, -1 表示叶节点,
// 叶节点以 class_index 给出类别
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default)]
    pub feature: usize,
    #[serde(default)]
    pub threshold: f64,
    pub left: i32,
    pub right: i32,
    #[serde(default)]
    pub class_index: Option<u32>,
}

impl TreeNode {
    fn is_leaf(&self) -> bool {
        self.left < 0 && self.right < 0
    }
}

// ==========================================
// DecisionTree - 单棵决策树
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// 从根节点 (下标 0) 沿分裂条件下行到叶节点
    fn predict_class(&self, scaled: &[f64]) -> Result<u32, ClassifierError> {
        let mut index = 0usize;

        // 下行步数以节点总数为上限,防止坏工件造成环
        for _ in 0..=self.nodes.len() {
            let node = self.nodes.get(index).ok_or_else(|| {
                ClassifierError::ArtifactInvalid(format!("节点下标越界: {}", index))
            })?;

            if node.is_leaf() {
                return node.class_index.ok_or_else(|| {
                    ClassifierError::ArtifactInvalid(format!("叶节点缺少类别: 节点 {}", index))
                });
            }

            let value = scaled.get(node.feature).ok_or_else(|| {
                ClassifierError::ArtifactInvalid(format!(
                    "分裂特征下标越界: 节点 {}, 特征 {}",
                    index, node.feature
                ))
            })?;

            index = if *value <= node.threshold {
                node.left as usize
            } else {
                node.right as usize
            };
        }

        Err(ClassifierError::ArtifactInvalid(
            "决策树下行未终止 (疑似环)".to_string(),
        ))
    }
}

// ==========================================
// ClassifierArtifact - 模型工件
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub format_version: u32,
    pub feature_count: usize,
    pub scaler: ScalerParams,
    pub forest: Vec<DecisionTree>,
}

impl ClassifierArtifact {
    /// 结构校验 (加载时调用一次)
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ClassifierError::ArtifactInvalid(format!(
                "格式版本不支持: {}",
                self.format_version
            )));
        }

        if self.scaler.mean.len() != self.feature_count
            || self.scaler.scale.len() != self.feature_count
        {
            return Err(ClassifierError::ArtifactInvalid(format!(
                "缩放参数维度与特征数不一致: mean={}, scale={}, 期望 {}",
                self.scaler.mean.len(),
                self.scaler.scale.len(),
                self.feature_count
            )));
        }

        if self.forest.is_empty() {
            return Err(ClassifierError::ArtifactInvalid("树集成为空".to_string()));
        }

        for (tree_index, tree) in self.forest.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ClassifierError::ArtifactInvalid(format!(
                    "第 {} 棵树节点为空",
                    tree_index
                )));
            }

            let node_count = tree.nodes.len() as i32;
            for (node_index, node) in tree.nodes.iter().enumerate() {
                if node.is_leaf() {
                    if node.class_index.is_none() {
                        return Err(ClassifierError::ArtifactInvalid(format!(
                            "第 {} 棵树叶节点 {} 缺少类别",
                            tree_index, node_index
                        )));
                    }
                    continue;
                }

                if node.left < 0
                    || node.right < 0
                    || node.left >= node_count
                    || node.right >= node_count
                {
                    return Err(ClassifierError::ArtifactInvalid(format!(
                        "第 {} 棵树节点 {} 子节点下标非法: left={}, right={}",
                        tree_index, node_index, node.left, node.right
                    )));
                }

                if node.feature >= self.feature_count {
                    return Err(ClassifierError::ArtifactInvalid(format!(
                        "第 {} 棵树节点 {} 分裂特征越界: {}",
                        tree_index, node_index, node.feature
                    )));
                }
            }
        }

        Ok(())
    }

    /// 标准化后多数表决预测
    ///
    /// # 返回
    /// 票数相同时判为 Failure (偏安全)
    pub fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ClassifierError> {
        let values = features.values();
        if values.len() != self.feature_count {
            return Err(ClassifierError::FeatureCountMismatch {
                expected: self.feature_count,
                actual: values.len(),
            });
        }

        let scaled = self.scaler.transform(values);

        let mut failure_votes = 0usize;
        for tree in &self.forest {
            let class_index = tree.predict_class(&scaled)?;
            match ClassLabel::from_class_index(class_index) {
                Some(ClassLabel::Failure) => failure_votes += 1,
                Some(ClassLabel::NoFailure) => {}
                None => {
                    return Err(ClassifierError::ArtifactInvalid(format!(
                        "未知类别编号: {}",
                        class_index
                    )))
                }
            }
        }

        if failure_votes * 2 >= self.forest.len() {
            Ok(ClassLabel::Failure)
        } else {
            Ok(ClassLabel::NoFailure)
        }
    }
}
