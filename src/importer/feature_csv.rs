// ==========================================
// 设备预测性维护系统 - 特征数据文件解析
// ==========================================
// 职责: 将上传的 CSV 文件解析为特征向量序列
// 格式: 每个数据行恰好 24 个数值列
//       (3 工况设定值 + 21 传感器读数), 首行为表头
// ==========================================

use crate::domain::feature::{FeatureVector, FeatureVectorError, FEATURE_COUNT};
use crate::importer::error::ImportError;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// FeatureCsvReader - 特征 CSV 解析器
// ==========================================
pub struct FeatureCsvReader;

impl FeatureCsvReader {
    pub fn new() -> Self {
        Self
    }

    /// 解析 CSV 文件为特征向量序列
    ///
    /// # 校验
    /// - 文件存在且扩展名为 .csv
    /// - 每个数据行恰好 24 列, 全部可解析为有限数值
    /// - 至少包含一个数据行
    pub fn parse_file(&self, file_path: &Path) -> Result<Vec<FeatureVector>, ImportError> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = file_path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)
            .map_err(|e| ImportError::CsvParseError(e.to_string()))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致,列数在逐行校验时报错
            .from_reader(file);

        let mut vectors = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            // 行号从 1 起算 (不含表头)
            let row = row_idx + 1;
            let record = result.map_err(|e| ImportError::CsvParseError(e.to_string()))?;

            // 跳过完全空白的行
            if record.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            if record.len() != FEATURE_COUNT {
                return Err(ImportError::ColumnCountMismatch {
                    row,
                    expected: FEATURE_COUNT,
                    actual: record.len(),
                });
            }

            let mut values = Vec::with_capacity(FEATURE_COUNT);
            for (column, raw) in record.iter().enumerate() {
                let value: f64 = raw.trim().parse().map_err(|_| ImportError::InvalidValue {
                    row,
                    column,
                    value: raw.trim().to_string(),
                })?;
                values.push(value);
            }

            let vector = FeatureVector::new(values).map_err(|e| match e {
                FeatureVectorError::LengthMismatch { expected, actual } => {
                    ImportError::ColumnCountMismatch {
                        row,
                        expected,
                        actual,
                    }
                }
                FeatureVectorError::NonFiniteValue { index, value } => {
                    ImportError::NonFiniteValue {
                        row,
                        column: index,
                        value,
                    }
                }
            })?;

            vectors.push(vector);
        }

        if vectors.is_empty() {
            return Err(ImportError::EmptyFile(file_path.display().to_string()));
        }

        Ok(vectors)
    }

    /// 解析并取第一条特征向量 (对应单条上传场景)
    pub fn parse_first(&self, file_path: &Path) -> Result<FeatureVector, ImportError> {
        let mut vectors = self.parse_file(file_path)?;
        Ok(vectors.remove(0))
    }
}

impl Default for FeatureCsvReader {
    fn default() -> Self {
        Self::new()
    }
}
