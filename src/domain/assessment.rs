// ==========================================
// 设备预测性维护系统 - 评估结果领域模型
// ==========================================
// 职责: 定义退化轨迹、财务摘要、维护决策与评估快照
// 红线: 不含引擎逻辑,全部为可序列化的纯数据
// ==========================================

use crate::domain::types::{ClassLabel, DecisionBasis, HealthStatus, MaintenanceAction};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// DegradationTrajectory - 退化轨迹
// ==========================================
// 由退化仿真引擎产出的未来故障概率序列
// 不变量: 非递减, 长度在 [1, 仿真步数上限] 内
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationTrajectory {
    /// 逐周期的预测故障概率 (非递减)
    points: Vec<f64>,

    /// 仿真停止时使用的危急阈值
    critical_threshold: f64,
}

impl DegradationTrajectory {
    /// 构造轨迹 (由退化仿真引擎调用)
    pub fn new(points: Vec<f64>, critical_threshold: f64) -> Self {
        debug_assert!(!points.is_empty());
        Self {
            points,
            critical_threshold,
        }
    }

    /// 轨迹点序列
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// 剩余使用寿命 (RUL): 轨迹长度,即距危急阈值的周期数
    ///
    /// 仿真在阈值未触发时于步数上限处截止,
    /// 此时 RUL 为保守下限而非"寿命无限"
    pub fn remaining_useful_life(&self) -> u32 {
        self.points.len() as u32
    }

    /// 轨迹是否触及危急阈值
    pub fn reached_critical(&self) -> bool {
        self.points
            .last()
            .map(|p| *p >= self.critical_threshold)
            .unwrap_or(false)
    }

    /// 轨迹终点概率
    pub fn final_probability(&self) -> f64 {
        *self.points.last().expect("轨迹至少包含一个点")
    }
}

// ==========================================
// FinancialSummary - 财务摘要
// ==========================================
// 由财务模型按需重算,不做缓存持久化
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// 维护成本 (计划检修或例行保养)
    pub maintenance_cost: f64,

    /// 预期故障损失
    pub failure_loss: f64,

    /// 避免损失 = 故障损失 - 维护成本
    pub avoided_loss: f64,

    /// 投资回报率 (可为负)
    pub roi: f64,
}

// ==========================================
// MaintenanceDecision - 维护决策
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceDecision {
    /// 推荐动作
    pub action: MaintenanceAction,

    /// 决策依据标签
    pub justification: DecisionBasis,

    /// 决策原因 (JSON, 可解释性)
    pub reason: String,
}

// ==========================================
// AssessmentSnapshot - 评估快照
// ==========================================
// 用途: 驾驶舱指标与报表导出的只读数据源
// 每次完整分析流水线运行产出一份
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    pub snapshot_id: String,      // 快照ID
    pub machine_code: String,     // 机台代码

    // ===== 分类与概率 =====
    pub label: ClassLabel,        // 分类器输出标签
    pub failure_probability: f64, // 故障概率 [0,1]

    // ===== 退化与寿命 =====
    pub trajectory: DegradationTrajectory, // 退化轨迹
    pub remaining_useful_life: u32,        // 剩余使用寿命 (周期数)

    // ===== 财务与决策 =====
    pub financial: FinancialSummary,   // 财务摘要
    pub decision: MaintenanceDecision, // 维护决策

    // ===== 健康状态 =====
    pub health_status: HealthStatus, // 健康状态

    // ===== 元数据 =====
    pub created_at: NaiveDateTime, // 创建时间
}
