use clap::Parser;
use ppm_to_png::cli::{execute_convert, Cli};
use ppm_to_png::ConversionError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // ファイル単位の失敗は終了コードに影響しない
    if let Err(error) = execute_convert(cli).await {
        match error.downcast_ref::<ConversionError>() {
            Some(conversion_error) => eprintln!(
                "❌ [{}] エラー: {error:#}",
                conversion_error.severity().as_str()
            ),
            None => eprintln!("❌ エラー: {error:#}"),
        }
        std::process::exit(1);
    }
}
