// 変換処理のモジュール
// 機能別フォルダ構造によるアーキテクチャ

// 機能モジュール
pub mod config; // 設定管理
pub mod reporting; // 進捗報告
pub mod worker; // 単一ファイル変換

// 具象実装
pub mod implementations;

// 公開API - 各機能から再エクスポート
pub use config::ConversionConfig;
pub use implementations::*;
pub use reporting::ProgressReporter;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use config::MockConversionConfig;
#[cfg(test)]
pub use reporting::MockProgressReporter;
