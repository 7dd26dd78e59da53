// ==========================================
// 特征数据导入集成测试
// ==========================================
// 测试目标: 验证 CSV 上传文件到特征向量的解析
// 覆盖范围: 合法文件 / 列数错误 / 非数值 /
//           空文件 / 文件缺失 / 扩展名不支持
// ==========================================

use predictive_maintenance::domain::feature::FEATURE_COUNT;
use predictive_maintenance::importer::{FeatureCsvReader, ImportError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

// ==========================================
// 测试辅助函数
// ==========================================

/// CSV 表头: op1..op3 + s1..s21
fn csv_header() -> String {
    let mut columns: Vec<String> = (1..=3).map(|i| format!("op{}", i)).collect();
    columns.extend((1..=21).map(|i| format!("s{}", i)));
    columns.join(",")
}

/// 由数值序列拼一行 CSV
fn csv_row(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// 在临时目录写入 CSV 文件
fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_parse_valid_file() {
    let dir = TempDir::new().unwrap();
    let row_a = vec![0.5; FEATURE_COUNT];
    let mut row_b = vec![1.5; FEATURE_COUNT];
    row_b[0] = 0.45;

    let content = format!("{}\n{}\n{}\n", csv_header(), csv_row(&row_a), csv_row(&row_b));
    let path = write_csv(&dir, "upload.csv", &content);

    let reader = FeatureCsvReader::new();
    let vectors = reader.parse_file(&path).unwrap();

    assert_eq!(vectors.len(), 2);
    assert_eq!(vectors[0].values(), row_a.as_slice());
    assert_eq!(vectors[1].settings()[0], 0.45);

    // 单条上传场景取第一行
    let first = reader.parse_first(&path).unwrap();
    assert_eq!(first.values(), row_a.as_slice());
}

#[test]
fn test_blank_lines_skipped() {
    let dir = TempDir::new().unwrap();
    let row = vec![2.0; FEATURE_COUNT];
    let content = format!("{}\n{}\n\n", csv_header(), csv_row(&row));
    let path = write_csv(&dir, "upload.csv", &content);

    let vectors = FeatureCsvReader::new().parse_file(&path).unwrap();
    assert_eq!(vectors.len(), 1);
}

#[test]
fn test_column_count_mismatch() {
    let dir = TempDir::new().unwrap();
    // 23 列数据行
    let content = format!("{}\n{}\n", csv_header(), csv_row(&vec![1.0; 23]));
    let path = write_csv(&dir, "upload.csv", &content);

    let result = FeatureCsvReader::new().parse_file(&path);
    match result {
        Err(ImportError::ColumnCountMismatch {
            row,
            expected,
            actual,
        }) => {
            assert_eq!(row, 1);
            assert_eq!(expected, 24);
            assert_eq!(actual, 23);
        }
        other => panic!("期望 ColumnCountMismatch, 实际 {:?}", other.err()),
    }
}

#[test]
fn test_invalid_value_addressed_by_row_and_column() {
    let dir = TempDir::new().unwrap();
    let good = csv_row(&vec![1.0; FEATURE_COUNT]);
    let mut bad_cells: Vec<String> = vec!["1.0".to_string(); FEATURE_COUNT];
    bad_cells[5] = "abc".to_string();

    let content = format!("{}\n{}\n{}\n", csv_header(), good, bad_cells.join(","));
    let path = write_csv(&dir, "upload.csv", &content);

    let result = FeatureCsvReader::new().parse_file(&path);
    match result {
        Err(ImportError::InvalidValue { row, column, value }) => {
            assert_eq!(row, 2);
            assert_eq!(column, 5);
            assert_eq!(value, "abc");
        }
        other => panic!("期望 InvalidValue, 实际 {:?}", other.err()),
    }
}

#[test]
fn test_header_only_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "upload.csv", &format!("{}\n", csv_header()));

    let result = FeatureCsvReader::new().parse_file(&path);
    assert!(matches!(result, Err(ImportError::EmptyFile(_))));
}

#[test]
fn test_missing_file() {
    let result = FeatureCsvReader::new().parse_file(std::path::Path::new("/nonexistent/x.csv"));
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "upload.xlsx", "whatever");

    let result = FeatureCsvReader::new().parse_file(&path);
    assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
}
