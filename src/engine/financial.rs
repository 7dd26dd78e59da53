// ==========================================
// 设备预测性维护系统 - 财务模型引擎
// ==========================================
// 职责: 将技术风险换算为可比的货币量,
//       支撑维护策略间的成本/收益对比
// 输入: 故障概率 p + 剩余使用寿命 RUL
// 输出: FinancialSummary (成本/损失/回报率)
// 红线: 四项输出均为 (p, RUL) 的纯函数,
//       按需重算,禁止缓存过期值
// ==========================================

use crate::domain::assessment::FinancialSummary;
use serde::{Deserialize, Serialize};

/// 计划检修成本 (RUL 临近时)
pub const SCHEDULED_MAINTENANCE_COST: f64 = 20_000.0;

/// 例行保养成本
pub const ROUTINE_MAINTENANCE_COST: f64 = 5_000.0;

/// 故障停机时长 (小时)
pub const FAILURE_DOWNTIME_HOURS: f64 = 24.0;

/// 每小时产值
pub const REVENUE_PER_HOUR: f64 = 15_000.0;

/// RUL 不大于该值时采用计划检修成本
pub const SCHEDULED_RUL_THRESHOLD: u32 = 6;

// ==========================================
// FinancialParams - 财务参数档案
// ==========================================
// 货币单位无关;默认值来自上方常量,
// 可由配置覆盖后整体注入
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialParams {
    /// 计划检修成本
    pub scheduled_cost: f64,

    /// 例行保养成本
    pub routine_cost: f64,

    /// 故障停机时长 (小时)
    pub failure_downtime_hours: f64,

    /// 每小时产值
    pub revenue_per_hour: f64,

    /// 计划检修的 RUL 阈值
    pub scheduled_rul_threshold: u32,
}

impl Default for FinancialParams {
    fn default() -> Self {
        Self {
            scheduled_cost: SCHEDULED_MAINTENANCE_COST,
            routine_cost: ROUTINE_MAINTENANCE_COST,
            failure_downtime_hours: FAILURE_DOWNTIME_HOURS,
            revenue_per_hour: REVENUE_PER_HOUR,
            scheduled_rul_threshold: SCHEDULED_RUL_THRESHOLD,
        }
    }
}

// ==========================================
// FinancialModel - 财务模型引擎
// ==========================================
pub struct FinancialModel {
    params: FinancialParams,
}

impl FinancialModel {
    /// 使用默认参数构造
    pub fn new() -> Self {
        Self {
            params: FinancialParams::default(),
        }
    }

    /// 使用指定参数档案构造
    pub fn with_params(params: FinancialParams) -> Self {
        Self { params }
    }

    /// 计算财务摘要
    ///
    /// # 规则
    /// - maintenance_cost: RUL ≤ 6 取计划检修成本,否则取例行保养成本
    /// - failure_loss  = p × 停机时长 × 每小时产值
    /// - avoided_loss  = failure_loss − maintenance_cost
    /// - roi = (avoided_loss − maintenance_cost) / maintenance_cost;
    ///   maintenance_cost 为 0 时取 0 (除零保护,实际参数恒为正)
    ///
    /// # 参数
    /// - `failure_probability`: 故障概率 [0,1]
    /// - `remaining_useful_life`: 剩余使用寿命 (周期数)
    pub fn evaluate(&self, failure_probability: f64, remaining_useful_life: u32) -> FinancialSummary {
        let maintenance_cost = if remaining_useful_life <= self.params.scheduled_rul_threshold {
            self.params.scheduled_cost
        } else {
            self.params.routine_cost
        };

        let failure_loss =
            failure_probability * self.params.failure_downtime_hours * self.params.revenue_per_hour;

        let avoided_loss = failure_loss - maintenance_cost;

        let roi = if maintenance_cost == 0.0 {
            0.0
        } else {
            (avoided_loss - maintenance_cost) / maintenance_cost
        };

        FinancialSummary {
            maintenance_cost,
            failure_loss,
            avoided_loss,
            roi,
        }
    }
}

impl Default for FinancialModel {
    fn default() -> Self {
        Self::new()
    }
}
