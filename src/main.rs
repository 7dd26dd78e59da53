// ==========================================
// 设备预测性维护系统 - 命令行入口
// ==========================================
// 用途: 在不启动任何界面的情况下,
//       对默认机台集合各执行一次监测采样与完整分析,
//       并可选导出 CSV 健康报表
//
// 用法:
//   predictive-maintenance [artifact_path] [report_path]
//
// 工件路径缺省时依次取环境变量 PREDICT_MAINT_MODEL_PATH
// 与用户数据目录下的默认位置
// ==========================================

use anyhow::Context;
use predictive_maintenance::classifier::{default_artifact_path, ArtifactClassifier};
use predictive_maintenance::domain::machine::DEFAULT_MACHINES;
use predictive_maintenance::engine::sampling::ThreadRngSampler;
use predictive_maintenance::monitor::{OperationalSettings, SensorSimulator};
use predictive_maintenance::{logging, AnalysisApi, MonitoringSession, ReportApi};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", predictive_maintenance::APP_NAME);
    tracing::info!("系统版本: {}", predictive_maintenance::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let artifact_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(default_artifact_path);
    let report_path = args.next().map(PathBuf::from);

    // 模型工件一次性加载,进程生命周期内复用
    tracing::info!("加载模型工件: {}", artifact_path.display());
    let classifier = ArtifactClassifier::load(&artifact_path)
        .with_context(|| format!("模型工件加载失败: {}", artifact_path.display()))?;

    let api = AnalysisApi::new(Arc::new(classifier));
    let report_api = ReportApi::new();

    let simulator = SensorSimulator::new();
    let settings = OperationalSettings::default();
    let mut sampler = ThreadRngSampler::new();

    // 会话状态由入口持有,逐机台传入流水线
    let mut session = MonitoringSession::with_default_machines();
    let mut snapshots = Vec::with_capacity(DEFAULT_MACHINES.len());

    for machine_code in DEFAULT_MACHINES {
        let reading = simulator
            .sample_reading(&settings, &mut sampler)
            .context("监测读数生成失败")?;

        let snapshot = api
            .run_analysis(&mut session, machine_code, &reading)
            .with_context(|| format!("分析流水线执行失败: machine={}", machine_code))?;

        tracing::info!(
            "{}: 概率={:.4} RUL={} ROI={:.2} 动作={} 健康={}",
            machine_code,
            snapshot.failure_probability,
            snapshot.remaining_useful_life,
            snapshot.financial.roi,
            snapshot.decision.action,
            snapshot.health_status
        );

        snapshots.push(snapshot);
    }

    if let Some(path) = report_path {
        report_api
            .export_to_file(&snapshots, &path)
            .with_context(|| format!("报表导出失败: {}", path.display()))?;
        tracing::info!("健康报表: {}", path.display());
    }

    Ok(())
}
