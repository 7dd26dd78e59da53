// ==========================================
// 设备预测性维护系统 - 健康状态引擎
// ==========================================
// 职责: 将故障概率映射为面向告警的粗粒度状态,
//       与维护决策引擎相互独立
// 输入: Option<故障概率>
// 输出: HealthStatus
// ==========================================

use crate::domain::types::HealthStatus;

/// 低于该值为 Healthy
pub const HEALTHY_THRESHOLD: f64 = 0.4;

/// 低于该值 (且不低于 HEALTHY_THRESHOLD) 为 Warning,
/// 达到该值即为 Critical
pub const WARNING_THRESHOLD: f64 = 0.7;

// ==========================================
// HealthClassifier - 健康状态引擎
// ==========================================
pub struct HealthClassifier {
    // 无状态引擎
}

impl HealthClassifier {
    pub fn new() -> Self {
        Self {}
    }

    /// 按概率分级
    ///
    /// # 规则 (区间下界闭合)
    /// - None          → Unknown (无数据,不是严重度层级)
    /// - p < 0.4       → Healthy
    /// - 0.4 ≤ p < 0.7 → Warning (p=0.4 属 Warning)
    /// - p ≥ 0.7       → Critical (p=0.7 属 Critical)
    pub fn classify(&self, failure_probability: Option<f64>) -> HealthStatus {
        let probability = match failure_probability {
            Some(p) => p,
            None => return HealthStatus::Unknown,
        };

        if probability < HEALTHY_THRESHOLD {
            HealthStatus::Healthy
        } else if probability < WARNING_THRESHOLD {
            HealthStatus::Warning
        } else {
            HealthStatus::Critical
        }
    }
}

impl Default for HealthClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_without_prediction() {
        let engine = HealthClassifier::new();
        assert_eq!(engine.classify(None), HealthStatus::Unknown);
    }

    #[test]
    fn test_boundaries_lower_closed() {
        let engine = HealthClassifier::new();

        assert_eq!(engine.classify(Some(0.39)), HealthStatus::Healthy);
        assert_eq!(engine.classify(Some(0.4)), HealthStatus::Warning);
        assert_eq!(engine.classify(Some(0.69)), HealthStatus::Warning);
        assert_eq!(engine.classify(Some(0.7)), HealthStatus::Critical);
    }

    #[test]
    fn test_extremes() {
        let engine = HealthClassifier::new();
        assert_eq!(engine.classify(Some(0.0)), HealthStatus::Healthy);
        assert_eq!(engine.classify(Some(1.0)), HealthStatus::Critical);
    }
}
