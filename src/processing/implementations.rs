// 変換処理の基本具象実装

use super::{ConversionConfig, ProgressReporter};
use crate::core::ConversionSummary;
use async_trait::async_trait;
use image::ImageFormat;
use std::path::Path;

/// 既定の入力サフィックス
pub const DEFAULT_SOURCE_EXTENSION: &str = ".ppm";

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultConversionConfig {
    source_extension: String,
    enable_progress: bool,
}

impl DefaultConversionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultConversionConfig {
    fn default() -> Self {
        Self {
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            enable_progress: true,
        }
    }
}

impl ConversionConfig for DefaultConversionConfig {
    fn source_extension(&self) -> &str {
        &self.source_extension
    }

    fn target_format(&self) -> ImageFormat {
        ImageFormat::Png
    }

    fn target_extension(&self) -> &str {
        "png"
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

/// コンソール出力による進捗報告実装
///
/// quietモードでもエラーと完了報告は出力する
#[derive(Debug, Default)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, source_root: &Path, dest_root: &Path, total_files: usize) {
        if !self.quiet {
            println!(
                "🚀 Converting {total_files} files from {} to {}",
                source_root.display(),
                dest_root.display()
            );
        }
    }

    async fn report_file_started(&self, input_path: &Path, output_path: &Path) {
        if !self.quiet {
            println!(
                "Converting {} to {}",
                input_path.display(),
                output_path.display()
            );
        }
    }

    async fn report_file_converted(&self, output_path: &Path) {
        if !self.quiet {
            println!("Converted: {}", output_path.display());
        }
    }

    async fn report_error(&self, path: &Path, error: &str) {
        println!("❌ Error converting {}: {error}", path.display());
    }

    async fn report_completed(&self, summary: &ConversionSummary) {
        println!("Conversion complete!");
        println!(
            "📊 Succeeded: {}, Failed: {}, Traversal errors: {} ({}ms)",
            summary.converted_files,
            summary.failed_files,
            summary.traversal_errors,
            summary.total_time_ms
        );
    }
}

/// 何もしない進捗報告実装（テスト・組み込み用）
#[derive(Debug, Default)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _source_root: &Path, _dest_root: &Path, _total_files: usize) {
        // 何もしない
    }

    async fn report_file_started(&self, _input_path: &Path, _output_path: &Path) {
        // 何もしない
    }

    async fn report_file_converted(&self, _output_path: &Path) {
        // 何もしない
    }

    async fn report_error(&self, _path: &Path, _error: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &ConversionSummary) {
        // 何もしない
    }
}
