// 変換処理に関連するデータ型定義

use super::error::{ConversionError, ConversionResult, ErrorSeverity};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 走査で見つかった変換対象ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// ソースファイルのパス（ルートと結合済み）
    pub path: PathBuf,
    /// ソースルートからの相対パス
    pub relative_path: PathBuf,
}

impl FileEntry {
    /// ルート配下のパスからエントリを作成
    pub fn new(source_root: &Path, path: impl Into<PathBuf>) -> ConversionResult<Self> {
        let path = path.into();
        let relative_path = path
            .strip_prefix(source_root)
            .map_err(|_| ConversionError::invalid_path(&path, source_root))?
            .to_path_buf();

        Ok(Self {
            path,
            relative_path,
        })
    }
}

/// 入力パスと出力パスの組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConversionTask {
    /// 出力ルートに相対パスを結合し、最後の拡張子を置き換える
    pub fn derive(entry: &FileEntry, dest_root: &Path, target_extension: &str) -> Self {
        let output_path = dest_root
            .join(&entry.relative_path)
            .with_extension(target_extension);

        Self {
            input_path: entry.path.clone(),
            output_path,
        }
    }

    /// 作成が必要な出力先ディレクトリ
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }
}

/// 個別ファイルの変換結果
#[derive(Debug)]
pub enum ConversionOutcome {
    Converted { task: ConversionTask },
    Failed {
        input_path: PathBuf,
        error: ConversionError,
    },
}

/// 失敗したファイルの記録
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureRecord {
    pub path: String,
    pub severity: ErrorSeverity,
    pub error: String,
}

impl FailureRecord {
    fn new(path: &Path, error: &ConversionError) -> Self {
        Self {
            path: path.display().to_string(),
            severity: error.severity(),
            error: error.to_string(),
        }
    }
}

/// バッチ全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionSummary {
    pub source_root: String,
    pub dest_root: String,
    pub started_at: DateTime<Utc>,
    /// サフィックスに一致したファイル数
    pub discovered_files: usize,
    pub attempted_files: usize,
    pub converted_files: usize,
    pub failed_files: usize,
    /// 走査中に読めなかったエントリ数
    pub traversal_errors: usize,
    pub total_time_ms: u64,
    pub failures: Vec<FailureRecord>,
}

impl ConversionSummary {
    pub fn new(source_root: &Path, dest_root: &Path) -> Self {
        Self {
            source_root: source_root.display().to_string(),
            dest_root: dest_root.display().to_string(),
            started_at: Utc::now(),
            discovered_files: 0,
            attempted_files: 0,
            converted_files: 0,
            failed_files: 0,
            traversal_errors: 0,
            total_time_ms: 0,
            failures: Vec::new(),
        }
    }

    /// 個別ファイルの結果を集計に反映
    pub fn record(&mut self, outcome: &ConversionOutcome) {
        self.attempted_files += 1;
        match outcome {
            ConversionOutcome::Converted { .. } => self.converted_files += 1,
            ConversionOutcome::Failed { input_path, error } => {
                self.failed_files += 1;
                self.failures.push(FailureRecord::new(input_path, error));
            }
        }
    }

    pub fn record_traversal_error(&mut self, error: &ConversionError) {
        self.traversal_errors += 1;
        let path = error.path().unwrap_or_else(|| Path::new(""));
        self.failures.push(FailureRecord::new(path, error));
    }

    pub fn has_failures(&self) -> bool {
        self.failed_files > 0 || self.traversal_errors > 0
    }

    /// サマリーをJSONファイルとして書き出す
    pub fn write_json(&self, path: &Path) -> ConversionResult<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize conversion summary")
            .map_err(|error| ConversionError::summary(path, error))?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write file: {}", path.display()))
            .map_err(|error| ConversionError::summary(path, error))
    }
}
