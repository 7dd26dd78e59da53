// ==========================================
// 设备预测性维护系统 - 退化仿真引擎
// ==========================================
// 职责: 在无人工干预假设下外推故障概率轨迹,
//       据此估计剩余使用寿命 (RUL)
// 输入: 当前故障概率 p0 ∈ [0,1]
// 输出: DegradationTrajectory (长度即 RUL)
// ==========================================
// 说明: 步长为随机采样,同一 p0 的重复调用
//       产出不同轨迹属预期行为,并非缺陷;
//       需要可复现时注入确定性采样源
// ==========================================

use crate::domain::assessment::DegradationTrajectory;
use crate::engine::sampling::UniformSampler;

/// 危急阈值: 仿真概率到达该值即视为临近故障
pub const CRITICAL_THRESHOLD: f64 = 0.9;

/// 仿真步数上限 (未来周期数)
pub const SIMULATION_HORIZON: usize = 15;

/// 单步概率增量下界
pub const STEP_MIN: f64 = 0.02;

/// 单步概率增量上界
pub const STEP_MAX: f64 = 0.08;

// ==========================================
// DegradationSimulator - 退化仿真引擎
// ==========================================
pub struct DegradationSimulator {
    // 无状态引擎,随机源由调用方注入
}

impl DegradationSimulator {
    pub fn new() -> Self {
        Self {}
    }

    /// 执行退化仿真
    ///
    /// # 算法
    /// 1. 以当前概率为起点,每步叠加 [0.02, 0.08] 内的随机增量
    /// 2. 概率上限截断为 1.0,每步结果追加到轨迹
    /// 3. 触及危急阈值 0.9 或满 15 步即停止
    ///
    /// # 参数
    /// - `current_probability`: 当前故障概率,前置条件 p ∈ [0,1]
    /// - `sampler`: 随机采样源
    ///
    /// # 返回
    /// 非递减轨迹,长度 ∈ [1, 15];
    /// p0 ≥ 0.9 时第一步即触发阈值,RUL = 1
    pub fn simulate(
        &self,
        current_probability: f64,
        sampler: &mut dyn UniformSampler,
    ) -> DegradationTrajectory {
        let mut probability = current_probability;
        let mut points = Vec::with_capacity(SIMULATION_HORIZON);

        for _ in 0..SIMULATION_HORIZON {
            let step = sampler.sample_uniform(STEP_MIN, STEP_MAX);
            probability = (probability + step).min(1.0);
            points.push(probability);

            if probability >= CRITICAL_THRESHOLD {
                break;
            }
        }

        DegradationTrajectory::new(points, CRITICAL_THRESHOLD)
    }
}

impl Default for DegradationSimulator {
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
    use crate::engine::sampling::{FixedSequenceSampler, ThreadRngSampler};

    /// 轨迹不变量: 非递减, 长度 ∈ [1,15], 终点达阈值或满步长
    fn assert_trajectory_invariants(trajectory: &DegradationTrajectory) {
        let points = trajectory.points();
        assert!(!points.is_empty());
        assert!(points.len() <= SIMULATION_HORIZON);

        for window in points.windows(2) {
            assert!(window[1] >= window[0], "轨迹必须非递减: {:?}", points);
        }

        let last = *points.last().unwrap();
        assert!(
            last >= CRITICAL_THRESHOLD || points.len() == SIMULATION_HORIZON,
            "终止条件未满足: last={}, len={}",
            last,
            points.len()
        );
    }

    #[test]
    fn test_invariants_across_probability_range() {
        let engine = DegradationSimulator::new();
        let mut sampler = ThreadRngSampler::new();

        for i in 0..=20 {
            let p0 = i as f64 / 20.0;
            for _ in 0..50 {
                let trajectory = engine.simulate(p0, &mut sampler);
                assert_trajectory_invariants(&trajectory);
            }
        }
    }

    #[test]
    fn test_rul_is_one_at_or_above_threshold() {
        let engine = DegradationSimulator::new();
        let mut sampler = ThreadRngSampler::new();

        for p0 in [0.9, 0.93, 0.97, 1.0] {
            let trajectory = engine.simulate(p0, &mut sampler);
            assert_eq!(trajectory.remaining_useful_life(), 1, "p0={}", p0);
            assert!(trajectory.reached_critical());
        }
    }

    #[test]
    fn test_low_start_exhausts_horizon_with_min_steps() {
        let engine = DegradationSimulator::new();
        // 恒取最小步长 0.02: 从 0 出发 15 步只到 0.30,不触阈值
        let mut sampler = FixedSequenceSampler::constant(0.0);

        let trajectory = engine.simulate(0.0, &mut sampler);
        assert_eq!(trajectory.remaining_useful_life(), SIMULATION_HORIZON as u32);
        assert!(!trajectory.reached_critical());
        assert!((trajectory.final_probability() - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic_trajectory_with_fixed_sampler() {
        let engine = DegradationSimulator::new();
        // 恒取最大步长 0.08: 0.7 → 0.78 → 0.86 → 0.94 (第 3 步触阈值)
        let mut sampler = FixedSequenceSampler::constant(1.0);

        let trajectory = engine.simulate(0.7, &mut sampler);
        assert_eq!(trajectory.remaining_useful_life(), 3);
        let points = trajectory.points();
        assert!((points[0] - 0.78).abs() < 1e-9);
        assert!((points[1] - 0.86).abs() < 1e-9);
        assert!((points[2] - 0.94).abs() < 1e-9);
    }

    #[test]
    fn test_probability_clamped_at_one() {
        let engine = DegradationSimulator::new();
        let mut sampler = FixedSequenceSampler::constant(1.0);

        let trajectory = engine.simulate(0.99, &mut sampler);
        assert_eq!(trajectory.final_probability(), 1.0);
        assert_eq!(trajectory.remaining_useful_life(), 1);
    }
}
