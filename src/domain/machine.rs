// ==========================================
// 设备预测性维护系统 - 机台会话状态
// ==========================================
// 职责: 定义调用方持有的每机台监测上下文
// 红线: 核心引擎不持有全局状态;
//       机台之间的历史与轨迹严格隔离
// ==========================================

use crate::domain::assessment::DegradationTrajectory;
use crate::domain::types::ClassLabel;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// 默认监测机台集合
pub const DEFAULT_MACHINES: [&str; 3] = ["MC-01", "MC-02", "MC-03"];

// ==========================================
// ProbabilityRecord - 概率历史记录
// ==========================================
// 每次预测运行向所属机台的历史序列追加一条
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityRecord {
    pub record_id: String,         // 记录ID
    pub label: ClassLabel,         // 当次分类标签
    pub probability: f64,          // 当次故障概率
    pub recorded_at: NaiveDateTime, // 记录时间
}

// ==========================================
// MachineSession - 单机台会话状态
// ==========================================
// 当前概率与轨迹在下一次预测运行时被整体替换,
// 历史序列只追加
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MachineSession {
    /// 当前故障概率 (尚无预测时为 None)
    pub current_probability: Option<f64>,

    /// 当前退化轨迹 (尚无预测时为 None)
    pub trajectory: Option<DegradationTrajectory>,

    /// 概率历史序列 (按时间追加)
    pub history: Vec<ProbabilityRecord>,
}

impl MachineSession {
    /// 以新一次预测结果替换当前状态并追加历史
    ///
    /// # 参数
    /// - `label`: 分类标签
    /// - `probability`: 故障概率
    /// - `trajectory`: 退化轨迹
    pub fn record_prediction(
        &mut self,
        label: ClassLabel,
        probability: f64,
        trajectory: DegradationTrajectory,
    ) {
        self.current_probability = Some(probability);
        self.trajectory = Some(trajectory);
        self.history.push(ProbabilityRecord {
            record_id: Uuid::new_v4().to_string(),
            label,
            probability,
            recorded_at: Utc::now().naive_utc(),
        });
    }
}

// ==========================================
// MonitoringSession - 监测会话 (全部机台)
// ==========================================
// 由调用方 (会话/请求处理器) 持有并传入每次流水线调用,
// 以机台代码为键,各机台状态互不可见
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringSession {
    machines: HashMap<String, MachineSession>,
}

impl MonitoringSession {
    /// 创建空会话
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建包含默认机台集合的会话
    pub fn with_default_machines() -> Self {
        Self::with_machines(&DEFAULT_MACHINES)
    }

    /// 创建包含指定机台集合的会话
    pub fn with_machines(machine_codes: &[&str]) -> Self {
        let machines = machine_codes
            .iter()
            .map(|code| (code.to_string(), MachineSession::default()))
            .collect();
        Self { machines }
    }

    /// 只读获取机台状态
    pub fn machine(&self, machine_code: &str) -> Option<&MachineSession> {
        self.machines.get(machine_code)
    }

    /// 可变获取机台状态 (首次访问时创建)
    pub fn machine_mut(&mut self, machine_code: &str) -> &mut MachineSession {
        self.machines.entry(machine_code.to_string()).or_default()
    }

    /// 当前会话内的机台代码列表 (排序后)
    pub fn machine_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.machines.keys().cloned().collect();
        codes.sort();
        codes
    }
}
