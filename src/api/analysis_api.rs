// ==========================================
// 设备预测性维护系统 - 分析流水线API
// ==========================================
// 职责: 编排一次完整的预测分析流水线,
//       并提供按需重算的门控查询
// 流水线: 分类 → 概率估计 → 退化仿真 → 财务模型 → 维护决策
//         (健康状态由同一概率并行派生)
// 红线: 会话状态由调用方持有并传入;
//       财务与决策结果按需重算,不缓存
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::classifier::adapter::FailureClassifier;
use crate::domain::assessment::{
    AssessmentSnapshot, DegradationTrajectory, FinancialSummary, MaintenanceDecision,
};
use crate::domain::feature::FeatureVector;
use crate::domain::machine::{MachineSession, MonitoringSession, ProbabilityRecord};
use crate::domain::types::HealthStatus;
use crate::engine::decision::DecisionEngine;
use crate::engine::degradation::DegradationSimulator;
use crate::engine::financial::{FinancialModel, FinancialParams};
use crate::engine::health::HealthClassifier;
use crate::engine::probability::ProbabilityEstimator;
use crate::engine::sampling::{ThreadRngSampler, UniformSampler};
use chrono::Utc;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use uuid::Uuid;

/// 健康评分系数: 评分 = 100 − 概率 × 60
const HEALTH_SCORE_PROBABILITY_WEIGHT: f64 = 60.0;

// ==========================================
// AnalysisApi - 分析流水线API
// ==========================================
pub struct AnalysisApi {
    classifier: Arc<dyn FailureClassifier>,
    estimator: ProbabilityEstimator,
    simulator: DegradationSimulator,
    financial: FinancialModel,
    decision: DecisionEngine,
    health: HealthClassifier,
    sampler: Mutex<Box<dyn UniformSampler + Send>>,
}

impl AnalysisApi {
    /// 使用默认引擎参数与生产随机源构造
    ///
    /// # 参数
    /// - `classifier`: 已完成工件加载的分类器 (进程级共享)
    pub fn new(classifier: Arc<dyn FailureClassifier>) -> Self {
        Self::with_components(
            classifier,
            FinancialParams::default(),
            Box::new(ThreadRngSampler::new()),
        )
    }

    /// 注入财务参数与随机源构造 (测试注入确定性序列)
    pub fn with_components(
        classifier: Arc<dyn FailureClassifier>,
        financial_params: FinancialParams,
        sampler: Box<dyn UniformSampler + Send>,
    ) -> Self {
        Self {
            classifier,
            estimator: ProbabilityEstimator::new(),
            simulator: DegradationSimulator::new(),
            financial: FinancialModel::with_params(financial_params),
            decision: DecisionEngine::new(),
            health: HealthClassifier::new(),
            sampler: Mutex::new(sampler),
        }
    }

    // ==========================================
    // 核心流水线
    // ==========================================

    /// 执行一次完整分析
    ///
    /// 单次顺序通过: 分类 → 概率估计 → 退化仿真 → 财务 → 决策,
    /// 更新该机台的会话状态 (当前概率/轨迹整体替换, 历史追加)
    ///
    /// # 参数
    /// - `session`: 调用方持有的监测会话
    /// - `machine_code`: 目标机台
    /// - `features`: 特征向量 (构造时已校验)
    pub fn run_analysis(
        &self,
        session: &mut MonitoringSession,
        machine_code: &str,
        features: &FeatureVector,
    ) -> ApiResult<AssessmentSnapshot> {
        // 1. 外部分类器预测
        let label = self.classifier.predict(features)?;
        debug!(machine = machine_code, label = %label, "分类完成");

        let (probability, trajectory) = {
            let mut sampler = self
                .sampler
                .lock()
                .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))?;

            // 2. 标签 → 连续故障概率
            let probability = self.estimator.estimate(label, sampler.as_mut());

            // 3. 退化仿真 → 轨迹与 RUL
            let trajectory = self.simulator.simulate(probability, sampler.as_mut());

            (probability, trajectory)
        };

        let remaining_useful_life = trajectory.remaining_useful_life();

        // 4. 财务模型
        let financial = self
            .financial
            .evaluate(probability, remaining_useful_life);

        // 5. 维护决策
        let decision = self.decision.decide(remaining_useful_life, financial.roi);

        // 6. 健康状态 (与决策引擎相互独立)
        let health_status = self.health.classify(Some(probability));

        // 7. 更新会话状态
        session
            .machine_mut(machine_code)
            .record_prediction(label, probability, trajectory.clone());

        let snapshot = AssessmentSnapshot {
            snapshot_id: Uuid::new_v4().to_string(),
            machine_code: machine_code.to_string(),
            label,
            failure_probability: probability,
            trajectory,
            remaining_useful_life,
            financial,
            decision,
            health_status,
            created_at: Utc::now().naive_utc(),
        };

        info!(
            machine = machine_code,
            probability = snapshot.failure_probability,
            rul = snapshot.remaining_useful_life,
            roi = snapshot.financial.roi,
            action = %snapshot.decision.action,
            health = %snapshot.health_status,
            "分析流水线完成"
        );

        Ok(snapshot)
    }

    // ==========================================
    // 门控查询 (按需重算)
    // ==========================================

    /// 健康状态 (无预测时为 Unknown,属正常状态而非错误)
    pub fn health_status(&self, session: &MonitoringSession, machine_code: &str) -> HealthStatus {
        let probability = session
            .machine(machine_code)
            .and_then(|m| m.current_probability);
        self.health.classify(probability)
    }

    /// 健康评分 (驾驶舱仪表值, 全精度, 舍入交由展示层)
    pub fn health_score(&self, session: &MonitoringSession, machine_code: &str) -> Option<f64> {
        session
            .machine(machine_code)
            .and_then(|m| m.current_probability)
            .map(|p| 100.0 - p * HEALTH_SCORE_PROBABILITY_WEIGHT)
    }

    /// 当前退化轨迹
    pub fn degradation_outlook(
        &self,
        session: &MonitoringSession,
        machine_code: &str,
    ) -> ApiResult<DegradationTrajectory> {
        let machine = self.predicted_machine(session, machine_code)?;
        machine
            .trajectory
            .clone()
            .ok_or_else(|| ApiError::NoPredictionYet {
                machine_code: machine_code.to_string(),
            })
    }

    /// 财务摘要 (由当前概率与 RUL 重算)
    pub fn financial_summary(
        &self,
        session: &MonitoringSession,
        machine_code: &str,
    ) -> ApiResult<FinancialSummary> {
        let (probability, remaining_useful_life) =
            self.current_prediction(session, machine_code)?;
        Ok(self.financial.evaluate(probability, remaining_useful_life))
    }

    /// 维护建议 (由当前财务摘要重算)
    pub fn recommendation(
        &self,
        session: &MonitoringSession,
        machine_code: &str,
    ) -> ApiResult<MaintenanceDecision> {
        let (probability, remaining_useful_life) =
            self.current_prediction(session, machine_code)?;
        let financial = self.financial.evaluate(probability, remaining_useful_life);
        Ok(self.decision.decide(remaining_useful_life, financial.roi))
    }

    /// 概率历史 (只读, 无预测时为空)
    pub fn probability_history(
        &self,
        session: &MonitoringSession,
        machine_code: &str,
    ) -> Vec<ProbabilityRecord> {
        session
            .machine(machine_code)
            .map(|m| m.history.clone())
            .unwrap_or_default()
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 取已有预测的机台状态, 否则报前置条件错误
    fn predicted_machine<'a>(
        &self,
        session: &'a MonitoringSession,
        machine_code: &str,
    ) -> ApiResult<&'a MachineSession> {
        session
            .machine(machine_code)
            .filter(|m| m.current_probability.is_some())
            .ok_or_else(|| ApiError::NoPredictionYet {
                machine_code: machine_code.to_string(),
            })
    }

    /// 取当前 (概率, RUL), 两者缺一即报前置条件错误
    fn current_prediction(
        &self,
        session: &MonitoringSession,
        machine_code: &str,
    ) -> ApiResult<(f64, u32)> {
        let machine = self.predicted_machine(session, machine_code)?;

        let probability = machine
            .current_probability
            .ok_or_else(|| ApiError::NoPredictionYet {
                machine_code: machine_code.to_string(),
            })?;

        let remaining_useful_life = machine
            .trajectory
            .as_ref()
            .map(|t| t.remaining_useful_life())
            .ok_or_else(|| ApiError::NoPredictionYet {
                machine_code: machine_code.to_string(),
            })?;

        Ok((probability, remaining_useful_life))
    }
}
