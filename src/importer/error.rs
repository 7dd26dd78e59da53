// ==========================================
// 设备预测性维护系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("文件不含数据行: {0}")]
    EmptyFile(String),

    // ===== 数据映射错误 =====
    #[error("列数错误 (行 {row}): 期望 {expected} 列, 实际 {actual} 列")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("数值转换失败 (行 {row}, 列 {column}): {value}")]
    InvalidValue {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("数值非有限 (行 {row}, 列 {column}): {value}")]
    NonFiniteValue {
        row: usize,
        column: usize,
        value: f64,
    },
}
