// ==========================================
// 设备预测性维护系统 - 实时监测采样
// ==========================================
// 职责: 按操作员设定的工况生成一条实时特征读数,
//       供流水线在无上传数据时演示/联调使用
// 说明: 传感器读数为模拟值,真实部署中由
//       数据采集侧替换本模块产出
// ==========================================

use crate::domain::feature::{FeatureVector, FeatureVectorError, SENSOR_COUNT};
use crate::engine::sampling::UniformSampler;
use serde::{Deserialize, Serialize};

/// 模拟传感器读数下界
pub const SENSOR_VALUE_MIN: f64 = 0.0;

/// 模拟传感器读数上界
pub const SENSOR_VALUE_MAX: f64 = 100.0;

// ==========================================
// OperationalSettings - 工况设定值
// ==========================================
// 三项设定值均为 [0,1] 内的归一化量
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationalSettings {
    /// 机台负载
    pub load: f64,

    /// 运行转速
    pub speed: f64,

    /// 环境应力
    pub ambient_stress: f64,
}

impl Default for OperationalSettings {
    fn default() -> Self {
        Self {
            load: 0.45,
            speed: 0.34,
            ambient_stress: 0.89,
        }
    }
}

// ==========================================
// SensorSimulator - 传感器模拟器
// ==========================================
pub struct SensorSimulator;

impl SensorSimulator {
    pub fn new() -> Self {
        Self
    }

    /// 生成一条实时读数
    ///
    /// # 参数
    /// - `settings`: 工况设定值 (进入特征向量前 3 列)
    /// - `sampler`: 随机采样源 (21 个传感器在 [0,100] 内均匀采样)
    pub fn sample_reading(
        &self,
        settings: &OperationalSettings,
        sampler: &mut dyn UniformSampler,
    ) -> Result<FeatureVector, FeatureVectorError> {
        let mut sensors = [0.0; SENSOR_COUNT];
        for value in sensors.iter_mut() {
            *value = sampler.sample_uniform(SENSOR_VALUE_MIN, SENSOR_VALUE_MAX);
        }

        FeatureVector::from_parts(
            &[settings.load, settings.speed, settings.ambient_stress],
            &sensors,
        )
    }
}

impl Default for SensorSimulator {
    fn default() -> Self {
        Self::new()
    }
}
