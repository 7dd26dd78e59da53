// ==========================================
// 设备预测性维护系统 - 特征向量
// ==========================================
// 职责: 定义分类器输入的特征向量
// 布局: 3 个工况设定值 + 21 个传感器读数
// 红线: 长度与数值有效性在构造时校验,
//       非法输入不得进入分类器
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 工况设定值数量 (负载/转速/环境应力)
pub const SETTING_COUNT: usize = 3;

/// 传感器通道数量
pub const SENSOR_COUNT: usize = 21;

/// 特征向量总长度
pub const FEATURE_COUNT: usize = SETTING_COUNT + SENSOR_COUNT;

// ==========================================
// 特征向量校验错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureVectorError {
    #[error("特征向量长度错误: 期望 {expected} 列, 实际 {actual} 列")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("特征向量包含非有限数值 (第 {index} 列): {value}")]
    NonFiniteValue { index: usize, value: f64 },
}

// ==========================================
// FeatureVector - 特征向量
// ==========================================
// 每个监测/上传周期生成一次,由分类器一次性消费
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// 构造特征向量
    ///
    /// # 校验
    /// - 长度必须等于 FEATURE_COUNT (24)
    /// - 所有值必须为有限实数 (拒绝 NaN / ±inf)
    pub fn new(values: Vec<f64>) -> Result<Self, FeatureVectorError> {
        if values.len() != FEATURE_COUNT {
            return Err(FeatureVectorError::LengthMismatch {
                expected: FEATURE_COUNT,
                actual: values.len(),
            });
        }

        for (index, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(FeatureVectorError::NonFiniteValue {
                    index,
                    value: *value,
                });
            }
        }

        Ok(Self { values })
    }

    /// 由工况设定值与传感器读数拼装
    ///
    /// # 参数
    /// - `settings`: 3 个工况设定值
    /// - `sensors`: 21 个传感器读数
    pub fn from_parts(
        settings: &[f64; SETTING_COUNT],
        sensors: &[f64; SENSOR_COUNT],
    ) -> Result<Self, FeatureVectorError> {
        let mut values = Vec::with_capacity(FEATURE_COUNT);
        values.extend_from_slice(settings);
        values.extend_from_slice(sensors);
        Self::new(values)
    }

    /// 全部特征值 (定长 24)
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// 工况设定值切片
    pub fn settings(&self) -> &[f64] {
        &self.values[..SETTING_COUNT]
    }

    /// 传感器读数切片
    pub fn sensors(&self) -> &[f64] {
        &self.values[SETTING_COUNT..]
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = FeatureVectorError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(vector: FeatureVector) -> Self {
        vector.values
    }
}
