// 変換処理のカスタムエラー型定義

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 変換処理固有のエラー型
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("必要な画像処理機能がありません: {capability}")]
    CapabilityMissing { capability: String },

    #[error("走査エラー: {} - {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("不正なパス: {} はルート {} の配下にありません", .path.display(), .root.display())]
    InvalidPath { path: PathBuf, root: PathBuf },

    #[error("ディレクトリ作成エラー: {} - {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("画像読み込みエラー: {} - {source:#}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("画像書き込みエラー: {} - {source:#}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("サマリー出力エラー: {} - {source:#}", .path.display())]
    Summary {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl ConversionError {
    /// 画像処理機能不足エラーの作成
    pub fn capability_missing(capability: impl Into<String>) -> Self {
        Self::CapabilityMissing {
            capability: capability.into(),
        }
    }

    /// 走査エラーの作成
    ///
    /// walkdirのエラーにパスが含まれない場合はルートを使う
    pub fn traversal(root: &Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        Self::Traversal { path, source }
    }

    pub fn invalid_path(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            root: root.into(),
        }
    }

    /// ディレクトリ作成エラーの作成
    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// 画像読み込みエラーの作成
    pub fn decode(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// 画像書き込みエラーの作成
    pub fn encode(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }

    pub fn summary(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Summary {
            path: path.into(),
            source,
        }
    }

    /// エラーに関連するパスを取得
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::CapabilityMissing { .. } => None,
            Self::Traversal { path, .. }
            | Self::InvalidPath { path, .. }
            | Self::DirectoryCreation { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Summary { path, .. } => Some(path.as_path()),
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CapabilityMissing { .. } => ErrorSeverity::Critical,
            Self::Summary { .. } => ErrorSeverity::High,
            Self::Traversal { .. } | Self::DirectoryCreation { .. } => ErrorSeverity::Medium,
            Self::Decode { .. } | Self::Encode { .. } => ErrorSeverity::Medium,
            Self::InvalidPath { .. } => ErrorSeverity::Low,
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorSeverity {
    /// 低重要度 - ログ出力程度
    Low,
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - 処理を開始できない
    Critical,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// 変換処理の結果型
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
