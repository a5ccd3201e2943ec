use thiserror::Error;

/// 整個 pipeline 共用的錯誤型別。
///
/// `InvalidInputFormat` 與 `InvalidArgument` 代表測試資料本身有問題，
/// 直接往上傳遞、不重試。`AssertionMismatch` 只由 validator 產生，
/// 攜帶足以診斷的完整中間值。
#[derive(Debug, Error)]
pub enum PrecisionError {
    #[error("invalid decimal literal '{literal}': {reason}")]
    InvalidInputFormat {
        literal: String,
        reason: String
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{literal}: expected '{expected}' but naive rounding produced '{actual}' (binary {binary}, rounded {rounded})")]
    AssertionMismatch {
        literal: String,
        expected: String,
        actual: String,
        binary: String,
        rounded: String
    },

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error)
}

impl PrecisionError {
    pub fn invalid_input(literal: &str, reason: &str) -> PrecisionError {
        PrecisionError::InvalidInputFormat {
            literal: literal.to_owned(),
            reason: reason.to_owned()
        }
    }

    pub fn negative_digits(digits: i64) -> PrecisionError {
        PrecisionError::InvalidArgument(format!("fractional digit count must be non-negative, got {}", digits))
    }

    pub fn scale_out_of_range(digits: i64, scale: i64) -> PrecisionError {
        PrecisionError::InvalidArgument(format!("cannot widen a value of scale {} to {} fractional digits", scale, digits))
    }
}
