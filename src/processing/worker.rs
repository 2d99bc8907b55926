// Worker - 単一ファイル変換機能

use crate::core::{ConversionError, ConversionOutcome, ConversionResult, ConversionTask};
use crate::imaging::ImagingBackend;
use image::ImageFormat;

/// 単一ファイルの変換
///
/// 出力先ディレクトリの作成、読み込み、書き込みのどこで失敗しても
/// `ConversionOutcome::Failed` を返し、呼び出し側のバッチは継続できる
pub async fn convert_single_file<B>(
    backend: &B,
    task: ConversionTask,
    format: ImageFormat,
) -> ConversionOutcome
where
    B: ImagingBackend + ?Sized,
{
    let result = async {
        if let Some(output_dir) = task.output_dir() {
            tokio::fs::create_dir_all(output_dir)
                .await
                .map_err(|error| ConversionError::directory_creation(output_dir, error))?;
        }

        let image = backend
            .open(&task.input_path)
            .await
            .map_err(|error| ConversionError::decode(&task.input_path, error))?;

        backend
            .save(image, &task.output_path, format)
            .await
            .map_err(|error| ConversionError::encode(&task.output_path, error))?;

        ConversionResult::Ok(())
    }
    .await;

    match result {
        Ok(()) => ConversionOutcome::Converted { task },
        Err(error) => ConversionOutcome::Failed {
            input_path: task.input_path,
            error,
        },
    }
}
