//! Error types for the flowwrap engine.

use thiserror::Error;

/// Errors raised while configuring or sizing flow children.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Invalid line slot count {count}: must be between 1 and {max}", max = i32::MAX)]
    InvalidSlotCount { count: u32 },

    #[error("Gutter size must not be negative, got {gutter}")]
    NegativeGutter { gutter: i32 },

    #[error("Child index {index} out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Errors from a single display width query.
///
/// These never escape a tiered provider; they only drive fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("Display width source '{source_name}' unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },

    #[error("Display width source '{source_name}' reported invalid width {width}")]
    InvalidWidth { source_name: String, width: i64 },
}
