// ==========================================
// 设备预测性维护系统 - 概率估计引擎
// ==========================================
// 职责: 将二分类标签映射为连续故障概率
// 输入: ClassLabel
// 输出: 故障概率 [0,1]
// ==========================================
// 说明: 分类器本身只给出二值结论,概率分档是
//       供下游分级使用的启发式表示;
//       两个标签区间按构造不重叠,
//       [0.4, 0.6) 仅作为边界带,估计器不会产出
// ==========================================

use crate::domain::types::ClassLabel;
use crate::engine::sampling::UniformSampler;

/// 故障标签概率下界
pub const FAILURE_PROB_MIN: f64 = 0.6;
/// 故障标签概率上界
pub const FAILURE_PROB_MAX: f64 = 0.95;
/// 无故障标签概率下界
pub const NO_FAILURE_PROB_MIN: f64 = 0.05;
/// 无故障标签概率上界
pub const NO_FAILURE_PROB_MAX: f64 = 0.4;

// ==========================================
// ProbabilityEstimator - 概率估计引擎
// ==========================================
pub struct ProbabilityEstimator {
    // 无状态引擎,随机源由调用方注入
}

impl ProbabilityEstimator {
    pub fn new() -> Self {
        Self {}
    }

    /// 按标签所属区间均匀采样故障概率
    ///
    /// # 参数
    /// - `label`: 分类标签
    /// - `sampler`: 随机采样源
    ///
    /// # 返回
    /// - Failure   → [0.6, 0.95] 内的概率
    /// - NoFailure → [0.05, 0.4] 内的概率
    ///
    /// 标签枚举封闭,不存在区间之外的输入
    pub fn estimate(&self, label: ClassLabel, sampler: &mut dyn UniformSampler) -> f64 {
        match label {
            ClassLabel::Failure => sampler.sample_uniform(FAILURE_PROB_MIN, FAILURE_PROB_MAX),
            ClassLabel::NoFailure => {
                sampler.sample_uniform(NO_FAILURE_PROB_MIN, NO_FAILURE_PROB_MAX)
            }
        }
    }
}

impl Default for ProbabilityEstimator {
    fn default() -> Self {
        Self::new()
    }
}
