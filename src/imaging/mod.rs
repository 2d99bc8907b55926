use crate::core::ConversionResult;
use anyhow::Result;
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};
use mockall::automock;
use std::path::Path;

pub mod standard;

/// 画像のデコードとエンコードを担うバックエンドのトレイト
///
/// コーデック自体には関与せず、テストではモックに差し替える
#[automock]
#[async_trait]
pub trait ImagingBackend: Send + Sync {
    /// 入力形式の読み込みと出力形式の書き込みが可能か確認する
    fn check_capability(&self) -> ConversionResult<()>;

    /// ファイルパスから画像を読み込む
    async fn open(&self, path: &Path) -> Result<DynamicImage>;

    /// 指定フォーマットで画像を書き込む（既存ファイルは上書き）
    async fn save(&self, image: DynamicImage, path: &Path, format: ImageFormat) -> Result<()>;

    /// バックエンドの名前を取得
    fn backend_name(&self) -> &'static str;
}
