// ==========================================
// 设备预测性维护系统 - 随机采样抽象
// ==========================================
// 职责: 将概率估计/退化仿真/传感器模拟依赖的
//       随机源抽象为可注入接口
// 红线: 引擎不直接调用全局随机函数,
//       测试必须能注入确定性序列
// ==========================================

use rand::Rng;

// ==========================================
// UniformSampler - 均匀采样接口
// ==========================================
pub trait UniformSampler {
    /// 在闭区间 [low, high] 内均匀采样
    fn sample_uniform(&mut self, low: f64, high: f64) -> f64;
}

// ==========================================
// ThreadRngSampler - 生产实现
// ==========================================
// 每次采样取线程本地 RNG,自身无状态
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSampler;

impl ThreadRngSampler {
    pub fn new() -> Self {
        Self
    }
}

impl UniformSampler for ThreadRngSampler {
    fn sample_uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

// ==========================================
// FixedSequenceSampler - 测试实现
// ==========================================
// 按给定单位值序列 (每个值在 [0,1] 内) 循环产出,
// 将单位值线性映射到请求区间,保证测试可复现
#[derive(Debug, Clone)]
pub struct FixedSequenceSampler {
    unit_values: Vec<f64>,
    cursor: usize,
}

impl FixedSequenceSampler {
    /// # 参数
    /// - `unit_values`: 单位区间 [0,1] 内的采样序列,耗尽后从头循环
    pub fn new(unit_values: Vec<f64>) -> Self {
        debug_assert!(!unit_values.is_empty());
        debug_assert!(unit_values.iter().all(|v| (0.0..=1.0).contains(v)));
        Self {
            unit_values,
            cursor: 0,
        }
    }

    /// 恒定采样值的简便构造
    pub fn constant(unit_value: f64) -> Self {
        Self::new(vec![unit_value])
    }
}

impl UniformSampler for FixedSequenceSampler {
    fn sample_uniform(&mut self, low: f64, high: f64) -> f64 {
        let unit = self.unit_values[self.cursor % self.unit_values.len()];
        self.cursor += 1;
        low + unit * (high - low)
    }
}
