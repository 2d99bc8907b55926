use super::ImagingBackend;
use crate::core::{ConversionError, ConversionResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// `image` クレートによる標準実装
#[derive(Clone, Debug)]
pub struct StandardImagingBackend {
    source_format: ImageFormat,
    target_format: ImageFormat,
}

impl Default for StandardImagingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardImagingBackend {
    /// PNM読み込み・PNG書き込み用のバックエンドを作成
    pub fn new() -> Self {
        Self {
            source_format: ImageFormat::Pnm,
            target_format: ImageFormat::Png,
        }
    }

    /// 確認対象のフォーマットを指定して作成
    pub fn with_formats(source_format: ImageFormat, target_format: ImageFormat) -> Self {
        Self {
            source_format,
            target_format,
        }
    }
}

#[async_trait]
impl ImagingBackend for StandardImagingBackend {
    fn check_capability(&self) -> ConversionResult<()> {
        if !self.source_format.reading_enabled() {
            return Err(ConversionError::capability_missing(format!(
                "{:?} decoder",
                self.source_format
            )));
        }
        if !self.target_format.writing_enabled() {
            return Err(ConversionError::capability_missing(format!(
                "{:?} encoder",
                self.target_format
            )));
        }
        Ok(())
    }

    async fn open(&self, path: &Path) -> Result<DynamicImage> {
        // 形式は内容から判定し、判定できなければ拡張子に従う
        let image = tokio::task::spawn_blocking({
            let path = path.to_path_buf();
            move || -> Result<DynamicImage> {
                let reader = ImageReader::open(&path)
                    .with_context(|| format!("Failed to open file: {}", path.display()))?
                    .with_guessed_format()
                    .with_context(|| format!("Failed to read file header: {}", path.display()))?;
                reader
                    .decode()
                    .with_context(|| format!("Failed to decode image: {}", path.display()))
            }
        })
        .await
        .context("Failed to spawn blocking task for image loading")??;

        Ok(image)
    }

    async fn save(&self, image: DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
        tokio::task::spawn_blocking({
            let path = path.to_path_buf();
            move || {
                image
                    .save_with_format(&path, format)
                    .with_context(|| format!("Failed to save image: {}", path.display()))
            }
        })
        .await
        .context("Failed to spawn blocking task for image saving")?
    }

    fn backend_name(&self) -> &'static str {
        "image"
    }
}
