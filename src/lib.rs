pub mod cli;
pub mod converter;
pub mod core;
pub mod file_scanner;
pub mod imaging;
pub mod processing;

pub use converter::Converter;
pub use crate::core::{ConversionError, ConversionSummary};
