// コアレイヤー - エラーとデータ型の定義
// 他のレイヤーから参照される基本的な型を提供

pub mod error;
pub mod types;

pub use error::{ConversionError, ConversionResult, ErrorSeverity};
pub use types::{ConversionOutcome, ConversionSummary, ConversionTask, FailureRecord, FileEntry};
