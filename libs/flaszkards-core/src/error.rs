//! Error types for flaszkards-core.

use thiserror::Error;

/// Result type alias using DecodeError.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while turning an uploaded file into rows.
///
/// Every variant leaves the session untouched; the user recovers by
/// uploading again.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("unreadable workbook: {0}")]
    Workbook(String),

    #[error("workbook has no sheets")]
    EmptyWorkbook,

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(&'static str),

    #[error("file is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },
}

#[cfg(feature = "xlsx")]
impl From<calamine::Error> for DecodeError {
    fn from(e: calamine::Error) -> Self {
        Self::Workbook(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_large_display() {
        let err = DecodeError::TooLarge { size: 20, limit: 10 };
        assert_eq!(err.to_string(), "file is 20 bytes, limit is 10");
    }

    #[test]
    fn empty_workbook_display() {
        assert_eq!(DecodeError::EmptyWorkbook.to_string(), "workbook has no sheets");
    }
}
