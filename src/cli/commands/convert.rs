use crate::cli::Cli;
use crate::converter::Converter;
use crate::core::ConversionSummary;
use crate::imaging::{standard::StandardImagingBackend, ImagingBackend};
use crate::processing::{ConsoleProgressReporter, ProgressReporter};
use anyhow::Result;

/// 標準バックエンドとコンソール出力で変換コマンドを実行する
pub async fn execute_convert(cli: Cli) -> Result<ConversionSummary> {
    let reporter = if cli.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };
    execute_convert_with(cli, StandardImagingBackend::new(), reporter).await
}

/// バックエンドと報告先を指定して変換コマンドを実行する
///
/// 画像処理機能が使えない場合は走査を始める前にエラーを返す。
/// ファイル単位の失敗はエラーにならず、サマリーに集計される。
pub async fn execute_convert_with<B, R>(
    cli: Cli,
    backend: B,
    reporter: R,
) -> Result<ConversionSummary>
where
    B: ImagingBackend,
    R: ProgressReporter,
{
    let converter = Converter::new(backend, cli.conversion_config(), reporter);

    converter.check_capability()?;
    if !cli.quiet {
        println!(
            "✅ Imaging backend '{}' is available, proceeding...",
            converter.backend().backend_name()
        );
    }

    let summary = converter.convert(&cli.source, &cli.dest).await;

    if let Some(summary_path) = &cli.summary_json {
        summary.write_json(summary_path)?;
        if !cli.quiet {
            println!("📄 Summary written to {}", summary_path.display());
        }
    }

    Ok(summary)
}
