use crate::core::{ConversionError, FileEntry};
use std::ffi::OsStr;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// 走査結果
#[derive(Debug, Default)]
pub struct ScanResult {
    /// サフィックスに一致したファイル（ファイル名順）
    pub entries: Vec<FileEntry>,
    /// 読めなかったエントリのエラー
    pub errors: Vec<ConversionError>,
}

pub struct FileScanner;

impl FileScanner {
    /// ディレクトリを再帰的に走査し、名前が `extension` で終わるファイルを集める
    ///
    /// ルートが存在しない場合は空の結果を返す。
    /// 個別エントリのエラーは `errors` に積んで走査を続ける。
    pub fn scan_directory(directory: &Path, extension: &str) -> ScanResult {
        let mut result = ScanResult::default();

        if !directory.exists() {
            return result;
        }

        for entry in WalkDir::new(directory).min_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    result.errors.push(ConversionError::traversal(directory, error));
                    continue;
                }
            };

            if !Self::is_file_candidate(&entry) {
                continue;
            }
            if !Self::matches_extension(entry.file_name(), extension) {
                continue;
            }

            match FileEntry::new(directory, entry.into_path()) {
                Ok(file_entry) => result.entries.push(file_entry),
                Err(error) => result.errors.push(error),
            }
        }

        result
    }

    /// 通常ファイル、またはファイルを指すシンボリックリンク
    ///
    /// リンク切れのシンボリックリンクも対象に含め、読み込み時の失敗として報告させる
    fn is_file_candidate(entry: &DirEntry) -> bool {
        if entry.file_type().is_file() {
            return true;
        }
        if !entry.path_is_symlink() {
            return false;
        }
        match std::fs::metadata(entry.path()) {
            Ok(metadata) => metadata.is_file(),
            Err(_) => true,
        }
    }

    /// 大文字小文字を区別する完全なサフィックス一致
    fn matches_extension(file_name: &OsStr, extension: &str) -> bool {
        file_name
            .as_encoded_bytes()
            .ends_with(extension.as_bytes())
    }
}
