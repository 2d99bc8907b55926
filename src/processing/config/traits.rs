// 設定管理のトレイト定義

use image::ImageFormat;

/// 変換処理の設定を抽象化するトレイト
pub trait ConversionConfig: Send + Sync {
    /// 変換対象とするファイル名のサフィックス（大文字小文字を区別）
    fn source_extension(&self) -> &str;

    /// 出力フォーマット
    fn target_format(&self) -> ImageFormat;

    /// 出力ファイルの拡張子（ドットなし）
    fn target_extension(&self) -> &str;

    /// ファイルごとの進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}
