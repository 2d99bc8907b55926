// エラーハンドリングの統合テスト
use ppm_to_png::{
    core::{ConversionError, ErrorSeverity},
    imaging::{standard::StandardImagingBackend, ImagingBackend},
    processing::{DefaultConversionConfig, NoOpProgressReporter},
    Converter,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::*;

fn standard_converter(
) -> Converter<StandardImagingBackend, DefaultConversionConfig, NoOpProgressReporter> {
    Converter::new(
        StandardImagingBackend::new(),
        DefaultConversionConfig::default(),
        NoOpProgressReporter::new(),
    )
}

#[tokio::test]
async fn test_corrupted_file_does_not_abort_batch() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("outputs");
    let dest = temp_dir.path().join("png_outputs");

    write_ppm(&source.join("a.ppm"), 1, 1);
    write_bytes(&source.join("bad.ppm"), b"definitely not pixels");
    write_ppm(&source.join("z.ppm"), 1, 1);

    let summary = standard_converter().convert(&source, &dest).await;

    assert_eq!(summary.attempted_files, 3);
    assert_eq!(summary.converted_files, 2);
    assert_eq!(summary.failed_files, 1);
    assert!(summary.failures[0].path.ends_with("bad.ppm"));
    assert!(!dest.join("bad.png").exists());
    assert_eq!(
        list_files(&dest),
        vec![PathBuf::from("a.png"), PathBuf::from("z.png")]
    );
}

#[tokio::test]
async fn test_truncated_pixel_data() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("in");
    let dest = temp_dir.path().join("out");

    // ヘッダーは正しいが画素データが足りない
    let mut data = ppm_bytes(4, 4);
    data.truncate(data.len() - 10);
    write_bytes(&source.join("short.ppm"), &data);

    let summary = standard_converter().convert(&source, &dest).await;

    assert_eq!(summary.failed_files, 1);
    assert!(!dest.join("short.png").exists());
}

#[tokio::test]
async fn test_empty_directory_handling() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("empty");
    fs::create_dir_all(&source).unwrap();
    let dest = temp_dir.path().join("out");

    let summary = standard_converter().convert(&source, &dest).await;

    // 空のディレクトリは正常に処理される（エラーではない）
    assert_eq!(summary.discovered_files, 0);
    assert!(!summary.has_failures());
    assert!(list_files(&dest).is_empty());
}

#[tokio::test]
async fn test_nonexistent_source_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("out");

    let summary = standard_converter()
        .convert(&temp_dir.path().join("nonexistent_directory"), &dest)
        .await;

    assert_eq!(summary.discovered_files, 0);
    assert!(!summary.has_failures());
    assert!(!dest.exists());
}

#[tokio::test]
async fn test_directory_with_image_suffix_is_not_converted() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("in");
    let dest = temp_dir.path().join("out");
    fs::create_dir_all(source.join("looks_like.ppm")).unwrap();

    let summary = standard_converter().convert(&source, &dest).await;

    assert_eq!(summary.discovered_files, 0);
    assert!(!dest.join("looks_like.png").exists());
}

#[tokio::test]
async fn test_non_matching_files_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("in");
    let dest = temp_dir.path().join("out");

    // 内容はPPMでも拡張子が一致しなければ対象外
    write_ppm(&source.join("image.PPM"), 1, 1);
    write_ppm(&source.join("image.ppm.bak"), 1, 1);
    write_ppm(&source.join("notes.txt"), 1, 1);

    let summary = standard_converter().convert(&source, &dest).await;

    assert_eq!(summary.discovered_files, 0);
    assert!(list_files(&dest).is_empty());
}

#[tokio::test]
async fn test_directory_creation_failure_is_per_file() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("in");
    let dest = temp_dir.path().join("out");

    write_ppm(&source.join("blocked/a.ppm"), 1, 1);
    write_ppm(&source.join("ok.ppm"), 1, 1);
    // 出力先のディレクトリ名と同じ名前のファイルを置いておく
    write_bytes(&dest.join("blocked"), b"in the way");

    let summary = standard_converter().convert(&source, &dest).await;

    assert_eq!(summary.failed_files, 1);
    assert_eq!(summary.converted_files, 1);
    assert!(summary.failures[0].path.ends_with("a.ppm"));
    assert!(dest.join("ok.png").is_file());
}

#[test]
fn test_capability_check_for_unwritable_format() {
    let backend =
        StandardImagingBackend::with_formats(image::ImageFormat::Pnm, image::ImageFormat::Dds);

    let error = backend.check_capability().unwrap_err();

    assert!(matches!(error, ConversionError::CapabilityMissing { .. }));
    assert_eq!(error.severity(), ErrorSeverity::Critical);
}

#[cfg(unix)]
#[tokio::test]
async fn test_dangling_symlink_is_a_per_file_failure() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("in");
    let dest = temp_dir.path().join("out");

    write_ppm(&source.join("ok.ppm"), 1, 1);
    symlink(source.join("deleted.ppm"), source.join("dangling.ppm")).unwrap();

    let summary = standard_converter().convert(&source, &dest).await;

    assert_eq!(summary.discovered_files, 2);
    assert_eq!(summary.converted_files, 1);
    assert_eq!(summary.failed_files, 1);
    assert!(summary.failures[0].path.ends_with("dangling.ppm"));
    assert!(!dest.join("dangling.png").exists());
    assert!(dest.join("ok.png").is_file());
}
