//! Error types for the tokenizer adapter

use thiserror::Error;
use unitext_core::CoreError;

/// Error raised by a user supplied tokenizer function
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Tokenizer adapter errors
#[derive(Error, Debug)]
pub enum FtsError {
    /// Segmentation error
    #[error("segmentation error: {0}")]
    Core(#[from] CoreError),

    /// Reason flags that are not one of the allowed combinations
    #[error("reason is not an allowed value ({0})")]
    InvalidReason(i32),

    /// Token flags other than 0 or colocated
    #[error("invalid tokenize flags ({0})")]
    InvalidTokenFlags(i32),

    /// Token span outside the input buffer or inverted
    #[error("invalid start ({start}) or end ({end}) of token for input buffer size ({len})")]
    InvalidSpan {
        /// Reported start offset
        start: usize,
        /// Reported end offset
        end: usize,
        /// Input buffer length in bytes
        len: usize,
    },

    /// Colocated token reported before any token
    #[error("colocated token reported when there is no previous token")]
    ColocatedWithoutToken,

    /// Input buffer larger than the token contract can address
    #[error("utf8 buffer is too large ({0} bytes)")]
    BufferTooLarge(usize),

    /// Token larger than the token contract can address
    #[error("token is too long ({0} bytes)")]
    TokenTooLong(usize),

    /// Input buffer is not UTF-8
    #[error("invalid UTF-8 at position {position}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence
        position: usize,
    },

    /// No tokenizer registered under the name
    #[error("no tokenizer named '{0}'")]
    TokenizerNotFound(String),

    /// Tokenizer was registered again after the handle was created
    #[error("tokenizer '{0}' has been changed since it was loaded")]
    TokenizerChanged(String),

    /// Tokenizer was unregistered after the handle was created
    #[error("tokenizer '{0}' has been removed since it was loaded")]
    TokenizerRemoved(String),

    /// Tokenizer implementation reported its own failure
    #[error("tokenizer failed: {0}")]
    TokenizerFailed(#[source] BoxError),

    /// Malformed value reported by a tokenizer function
    #[error("invalid reported token: {0}")]
    InvalidReportedToken(String),

    /// Malformed tokenizer argument list
    #[error("invalid arguments for tokenizer '{tokenizer}': {reason}")]
    InvalidArgument {
        /// Tokenizer being created
        tokenizer: String,
        /// What is wrong with the arguments
        reason: String,
    },

    /// Tokenizers wrapping each other too deeply, usually a cycle
    #[error("tokenizer '{name}' nested {depth} levels deep")]
    NestingTooDeep {
        /// Tokenizer being created
        name: String,
        /// Nesting depth reached
        depth: usize,
    },
}

impl FtsError {
    pub(crate) fn invalid_argument(tokenizer: &str, reason: impl Into<String>) -> Self {
        FtsError::InvalidArgument {
            tokenizer: tokenizer.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<std::str::Utf8Error> for FtsError {
    fn from(err: std::str::Utf8Error) -> Self {
        FtsError::InvalidUtf8 {
            position: err.valid_up_to(),
        }
    }
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, FtsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = FtsError::InvalidSpan { start: 5, end: 2, len: 4 };
        assert_eq!(
            err.to_string(),
            "invalid start (5) or end (2) of token for input buffer size (4)"
        );

        let err = FtsError::TokenizerChanged("words".to_string());
        assert!(err.to_string().contains("changed"));
    }

    #[test]
    fn test_utf8_error_position() {
        let bytes = [b'a', b'b', 0xFF];
        let err: FtsError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, FtsError::InvalidUtf8 { position: 2 }));
    }

    #[test]
    fn test_failed_keeps_source() {
        let err = FtsError::TokenizerFailed("boom".into());
        assert_eq!(err.to_string(), "tokenizer failed: boom");
        assert!(std::error::Error::source(&err).is_some());
    }
}
