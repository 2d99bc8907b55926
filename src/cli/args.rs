use crate::processing::{DefaultConversionConfig, DEFAULT_SOURCE_EXTENSION};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ppm_to_png")]
#[command(about = "Convert PPM images in a directory tree to PNG, mirroring the directory layout")]
#[command(version)]
pub struct Cli {
    /// Source directory to scan for PPM files
    #[arg(default_value = "outputs")]
    pub source: PathBuf,

    /// Destination directory for PNG files
    #[arg(default_value = "png_outputs")]
    pub dest: PathBuf,

    /// File name suffix to convert (case-sensitive)
    #[arg(
        short,
        long,
        default_value = DEFAULT_SOURCE_EXTENSION,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub extension: String,

    /// Only print errors and the final summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the conversion summary as JSON to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}

impl Cli {
    /// 引数から変換設定を作成
    pub fn conversion_config(&self) -> DefaultConversionConfig {
        DefaultConversionConfig::new()
            .with_source_extension(self.extension.clone())
            .with_progress_reporting(!self.quiet)
    }
}
