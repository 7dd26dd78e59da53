// ==========================================
// 设备预测性维护系统 - 领域类型定义
// ==========================================
// 职责: 定义核心枚举类型
// 红线: 枚举封闭,禁止用字符串表达状态
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 故障分类标签 (Class Label)
// ==========================================
// 由外部训练的二分类器产出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassLabel {
    NoFailure, // 无故障
    Failure,   // 故障
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLabel::NoFailure => write!(f, "NO_FAILURE"),
            ClassLabel::Failure => write!(f, "FAILURE"),
        }
    }
}

impl ClassLabel {
    /// 从分类器的类别编号解析 (0=无故障, 1=故障)
    pub fn from_class_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(ClassLabel::NoFailure),
            1 => Some(ClassLabel::Failure),
            _ => None,
        }
    }

    /// 转换为分类器的类别编号
    pub fn class_index(&self) -> u32 {
        match self {
            ClassLabel::NoFailure => 0,
            ClassLabel::Failure => 1,
        }
    }
}

// ==========================================
// 健康状态 (Health Status)
// ==========================================
// 面向告警与驾驶舱徽标的粗粒度分级
// 注意: Unknown 表示"无数据",不是严重度序列的一级,
//       因此本类型不实现 Ord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Unknown,  // 无预测数据
    Healthy,  // 健康
    Warning,  // 预警
    Critical, // 危急
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Unknown => write!(f, "UNKNOWN"),
            HealthStatus::Healthy => write!(f, "HEALTHY"),
            HealthStatus::Warning => write!(f, "WARNING"),
            HealthStatus::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 维护动作 (Maintenance Action)
// ==========================================
// 决策引擎的输出,按规则优先级产生
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceAction {
    ImmediateAction, // 立即处置
    MaintainNow,     // 立即维护
    PlanMaintenance, // 计划维护
    Monitor,         // 持续监控
}

impl fmt::Display for MaintenanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceAction::ImmediateAction => write!(f, "IMMEDIATE_ACTION"),
            MaintenanceAction::MaintainNow => write!(f, "MAINTAIN_NOW"),
            MaintenanceAction::PlanMaintenance => write!(f, "PLAN_MAINTENANCE"),
            MaintenanceAction::Monitor => write!(f, "MONITOR"),
        }
    }
}

// ==========================================
// 决策依据 (Decision Basis)
// ==========================================
// 与维护动作一一对应的理由标签,
// 展示层据此映射为显示文案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionBasis {
    HighRisk,           // 高风险
    FinanciallyJustified, // 财务合算
    UpcomingRisk,       // 风险临近
    LowFinancialImpact, // 财务影响低
}

impl fmt::Display for DecisionBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionBasis::HighRisk => write!(f, "HIGH_RISK"),
            DecisionBasis::FinanciallyJustified => write!(f, "FINANCIALLY_JUSTIFIED"),
            DecisionBasis::UpcomingRisk => write!(f, "UPCOMING_RISK"),
            DecisionBasis::LowFinancialImpact => write!(f, "LOW_FINANCIAL_IMPACT"),
        }
    }
}

impl DecisionBasis {
    /// 标准显示文案
    pub fn description(&self) -> &'static str {
        match self {
            DecisionBasis::HighRisk => "High Risk",
            DecisionBasis::FinanciallyJustified => "Financially Justified",
            DecisionBasis::UpcomingRisk => "Upcoming Risk",
            DecisionBasis::LowFinancialImpact => "Low Financial Impact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_label_index_roundtrip() {
        assert_eq!(ClassLabel::from_class_index(0), Some(ClassLabel::NoFailure));
        assert_eq!(ClassLabel::from_class_index(1), Some(ClassLabel::Failure));
        assert_eq!(ClassLabel::from_class_index(2), None);
        assert_eq!(ClassLabel::Failure.class_index(), 1);
        assert_eq!(ClassLabel::NoFailure.class_index(), 0);
    }

    #[test]
    fn test_serde_screaming_snake_case() {
        let json = serde_json::to_string(&HealthStatus::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");

        let action: MaintenanceAction = serde_json::from_str("\"PLAN_MAINTENANCE\"").unwrap();
        assert_eq!(action, MaintenanceAction::PlanMaintenance);

        let basis: DecisionBasis = serde_json::from_str("\"HIGH_RISK\"").unwrap();
        assert_eq!(basis, DecisionBasis::HighRisk);
    }

    #[test]
    fn test_decision_basis_description() {
        assert_eq!(DecisionBasis::HighRisk.description(), "High Risk");
        assert_eq!(
            DecisionBasis::FinanciallyJustified.description(),
            "Financially Justified"
        );
        assert_eq!(DecisionBasis::UpcomingRisk.description(), "Upcoming Risk");
        assert_eq!(
            DecisionBasis::LowFinancialImpact.description(),
            "Low Financial Impact"
        );
    }
}
