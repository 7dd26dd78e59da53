// ==========================================
// 设备预测性维护系统 - 维护决策引擎
// ==========================================
// 职责: 由 (RUL, ROI) 产生唯一推荐动作与决策依据
// 输入: 剩余使用寿命 + 投资回报率 (不读原始概率)
// 输出: MaintenanceDecision
// 红线: 规则按优先级首次命中即返回,不是独立条件;
//       所有决策必须输出 reason
// ==========================================

use crate::domain::assessment::MaintenanceDecision;
use crate::domain::types::{DecisionBasis, MaintenanceAction};
use serde_json::json;

/// 立即处置的 RUL 阈值
pub const IMMEDIATE_RUL_THRESHOLD: u32 = 3;

/// 立即维护的 RUL 阈值
pub const MAINTAIN_NOW_RUL_THRESHOLD: u32 = 6;

// ==========================================
// DecisionEngine - 维护决策引擎
// ==========================================
pub struct DecisionEngine {
    // 无状态引擎
}

impl DecisionEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 产生维护决策
    ///
    /// # 规则 (优先级排序,首次命中生效)
    /// 1. RUL ≤ 3              → 立即处置 (高风险)
    /// 2. ROI > 0 且 RUL ≤ 6   → 立即维护 (财务合算)
    /// 3. ROI > 0              → 计划维护 (风险临近)
    /// 4. 其余                 → 持续监控 (财务影响低)
    ///
    /// 规则 1 在寿命临界时完全压过财务判断,
    /// 即使 ROI 为负也立即处置
    ///
    /// # 参数
    /// - `remaining_useful_life`: 剩余使用寿命 (周期数)
    /// - `roi`: 投资回报率
    pub fn decide(&self, remaining_useful_life: u32, roi: f64) -> MaintenanceDecision {
        if remaining_useful_life <= IMMEDIATE_RUL_THRESHOLD {
            return self.build_decision(
                MaintenanceAction::ImmediateAction,
                DecisionBasis::HighRisk,
                remaining_useful_life,
                roi,
                "rul<=3",
            );
        }

        if roi > 0.0 && remaining_useful_life <= MAINTAIN_NOW_RUL_THRESHOLD {
            return self.build_decision(
                MaintenanceAction::MaintainNow,
                DecisionBasis::FinanciallyJustified,
                remaining_useful_life,
                roi,
                "roi>0 && rul<=6",
            );
        }

        if roi > 0.0 {
            return self.build_decision(
                MaintenanceAction::PlanMaintenance,
                DecisionBasis::UpcomingRisk,
                remaining_useful_life,
                roi,
                "roi>0",
            );
        }

        self.build_decision(
            MaintenanceAction::Monitor,
            DecisionBasis::LowFinancialImpact,
            remaining_useful_life,
            roi,
            "default",
        )
    }

    /// 构造决策并生成可解释的 reason (JSON)
    fn build_decision(
        &self,
        action: MaintenanceAction,
        justification: DecisionBasis,
        remaining_useful_life: u32,
        roi: f64,
        matched_rule: &str,
    ) -> MaintenanceDecision {
        let reason = json!({
            "action": action.to_string(),
            "justification": justification.to_string(),
            "rul": remaining_useful_life,
            "roi": roi,
            "matched_rule": matched_rule,
        })
        .to_string();

        MaintenanceDecision {
            action,
            justification,
            reason,
        }
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}
