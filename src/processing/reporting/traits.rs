// 進捗報告のトレイト定義

use crate::core::ConversionSummary;
use std::path::Path;

/// 進捗報告を抽象化するトレイト
#[async_trait::async_trait]
pub trait ProgressReporter: Send + Sync {
    /// バッチ開始時の報告
    async fn report_started(&self, source_root: &Path, dest_root: &Path, total_files: usize);

    /// ファイル変換開始時の報告
    async fn report_file_started(&self, input_path: &Path, output_path: &Path);

    /// ファイル変換成功時の報告
    async fn report_file_converted(&self, output_path: &Path);

    /// エラー発生時の報告
    async fn report_error(&self, path: &Path, error: &str);

    /// バッチ完了時の報告
    async fn report_completed(&self, summary: &ConversionSummary);
}
