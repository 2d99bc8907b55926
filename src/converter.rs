// 変換エンジン - 一回のバッチ変換を実行する

use crate::core::{ConversionOutcome, ConversionResult, ConversionSummary, ConversionTask};
use crate::file_scanner::FileScanner;
use crate::imaging::ImagingBackend;
use crate::processing::{worker, ConversionConfig, ProgressReporter};
use std::path::Path;
use std::time::Instant;

/// バッチ変換エンジン
///
/// 依存関係をジェネリクスで受け取り、コンストラクタで注入する
pub struct Converter<B, C, R>
where
    B: ImagingBackend,
    C: ConversionConfig,
    R: ProgressReporter,
{
    backend: B,
    config: C,
    reporter: R,
}

impl<B, C, R> Converter<B, C, R>
where
    B: ImagingBackend,
    C: ConversionConfig,
    R: ProgressReporter,
{
    pub fn new(backend: B, config: C, reporter: R) -> Self {
        Self {
            backend,
            config,
            reporter,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 画像処理機能が利用可能か確認する（走査前に呼ぶ）
    pub fn check_capability(&self) -> ConversionResult<()> {
        self.backend.check_capability()
    }

    /// `source_root` 以下の一致するファイルを `dest_root` 以下へ変換する
    ///
    /// ファイル単位の失敗はサマリーに記録して続行し、バッチは中断しない。
    /// ソースが存在しない場合や空の場合は何もせずに空のサマリーを返す。
    pub async fn convert(&self, source_root: &Path, dest_root: &Path) -> ConversionSummary {
        let start_time = Instant::now();
        let mut summary = ConversionSummary::new(source_root, dest_root);
        let progress = self.config.enable_progress_reporting();

        let scan = FileScanner::scan_directory(source_root, self.config.source_extension());

        for error in &scan.errors {
            summary.record_traversal_error(error);
            let path = error.path().unwrap_or(source_root);
            self.reporter.report_error(path, &error.to_string()).await;
        }

        summary.discovered_files = scan.entries.len();
        self.reporter
            .report_started(source_root, dest_root, scan.entries.len())
            .await;

        for entry in &scan.entries {
            let task = ConversionTask::derive(entry, dest_root, self.config.target_extension());

            if progress {
                self.reporter
                    .report_file_started(&task.input_path, &task.output_path)
                    .await;
            }

            let outcome =
                worker::convert_single_file(&self.backend, task, self.config.target_format())
                    .await;

            match &outcome {
                ConversionOutcome::Converted { task, .. } => {
                    if progress {
                        self.reporter.report_file_converted(&task.output_path).await;
                    }
                }
                ConversionOutcome::Failed { input_path, error } => {
                    self.reporter
                        .report_error(input_path, &error.to_string())
                        .await;
                }
            }

            summary.record(&outcome);
        }

        summary.total_time_ms = start_time.elapsed().as_millis() as u64;
        self.reporter.report_completed(&summary).await;

        summary
    }
}
