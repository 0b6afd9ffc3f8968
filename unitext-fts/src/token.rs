//! Token contract and the validating collector

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::error::{FtsError, Result};

/// Token flag marking a token colocated with the previous one
pub const TOKEN_COLOCATED: i32 = 0x0001;

/// Largest buffer or token the contract can address
pub const MAX_LEN: usize = i32::MAX as usize;

/// Receives tokens from a tokenizer
///
/// Returning an error aborts tokenization and the error is passed back to
/// the caller unchanged.
pub trait TokenSink {
    /// Report one token with its byte span in the input
    fn token(&mut self, flags: i32, token: &str, start: usize, end: usize) -> Result<()>;
}

/// Byte span of a token in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start offset
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

/// One token with any colocated alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token text
    pub token: String,
    /// Position in the input, absent when offsets were not requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Alternatives sharing this token's position
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub colocated: SmallVec<[String; 2]>,
}

impl Token {
    /// Token and its colocated alternatives in report order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.token.as_str()).chain(self.colocated.iter().map(String::as_str))
    }
}

/// Shape of the tokens returned by [`crate::TokenizerHandle::tokenize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizeOptions {
    /// Keep each token's byte span
    pub include_offsets: bool,
    /// Keep colocated alternatives
    pub include_colocated: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            include_offsets: true,
            include_colocated: true,
        }
    }
}

/// Reject buffers the contract cannot address
pub fn check_buffer_len(len: usize) -> Result<()> {
    if len > MAX_LEN {
        return Err(FtsError::BufferTooLarge(len));
    }
    Ok(())
}

/// Sink that validates reports and groups colocated tokens
///
/// Every report is checked against the input length before anything is
/// recorded, so an invalid report leaves no partial token behind.
#[derive(Debug)]
pub struct TokenCollector {
    buffer_len: usize,
    options: TokenizeOptions,
    tokens: Vec<Token>,
}

impl TokenCollector {
    /// Collector for an input of `buffer_len` bytes
    pub fn new(buffer_len: usize, options: TokenizeOptions) -> Self {
        Self {
            buffer_len,
            options,
            tokens: Vec::new(),
        }
    }

    /// Tokens collected so far
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Finish collecting
    pub fn finish(self) -> Vec<Token> {
        self.tokens
    }
}

impl TokenSink for TokenCollector {
    fn token(&mut self, flags: i32, token: &str, start: usize, end: usize) -> Result<()> {
        if flags != 0 && flags != TOKEN_COLOCATED {
            warn!(flags, "rejected token with invalid flags");
            return Err(FtsError::InvalidTokenFlags(flags));
        }
        if start > end || end > self.buffer_len {
            warn!(start, end, len = self.buffer_len, "rejected token span");
            return Err(FtsError::InvalidSpan {
                start,
                end,
                len: self.buffer_len,
            });
        }

        if flags == TOKEN_COLOCATED {
            let Some(last) = self.tokens.last_mut() else {
                warn!("rejected colocated token with no previous token");
                return Err(FtsError::ColocatedWithoutToken);
            };
            if self.options.include_colocated {
                last.colocated.push(token.to_string());
            }
            return Ok(());
        }

        self.tokens.push(Token {
            token: token.to_string(),
            span: self.options.include_offsets.then_some(Span { start, end }),
            colocated: SmallVec::new(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector() -> TokenCollector {
        TokenCollector::new(10, TokenizeOptions::default())
    }

    #[test]
    fn test_groups_colocated_tokens() {
        let mut sink = collector();
        sink.token(0, "first", 0, 5).unwrap();
        sink.token(TOKEN_COLOCATED, "1st", 0, 5).unwrap();
        sink.token(TOKEN_COLOCATED, "one", 0, 5).unwrap();
        sink.token(0, "two", 6, 9).unwrap();

        let tokens = sink.finish();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].texts().collect::<Vec<_>>(), vec!["first", "1st", "one"]);
        assert_eq!(tokens[0].span, Some(Span { start: 0, end: 5 }));
        assert!(tokens[1].colocated.is_empty());
    }

    #[test]
    fn test_rejects_bad_spans() {
        let mut sink = collector();
        assert!(matches!(
            sink.token(0, "x", 5, 4),
            Err(FtsError::InvalidSpan { start: 5, end: 4, len: 10 })
        ));
        assert!(matches!(sink.token(0, "x", 0, 11), Err(FtsError::InvalidSpan { .. })));
        assert!(sink.tokens().is_empty());

        sink.token(0, "x", 10, 10).unwrap();
        assert_eq!(sink.tokens().len(), 1);
    }

    #[test]
    fn test_rejects_bad_flags() {
        let mut sink = collector();
        assert!(matches!(sink.token(2, "x", 0, 1), Err(FtsError::InvalidTokenFlags(2))));
    }

    #[test]
    fn test_colocated_needs_previous_token() {
        let mut sink = collector();
        assert!(matches!(
            sink.token(TOKEN_COLOCATED, "x", 0, 1),
            Err(FtsError::ColocatedWithoutToken)
        ));

        let mut sink = TokenCollector::new(
            10,
            TokenizeOptions {
                include_offsets: true,
                include_colocated: false,
            },
        );
        assert!(matches!(
            sink.token(TOKEN_COLOCATED, "x", 0, 1),
            Err(FtsError::ColocatedWithoutToken)
        ));
    }

    #[test]
    fn test_options_strip_fields() {
        let mut sink = TokenCollector::new(
            10,
            TokenizeOptions {
                include_offsets: false,
                include_colocated: false,
            },
        );
        sink.token(0, "a", 0, 1).unwrap();
        sink.token(TOKEN_COLOCATED, "b", 0, 1).unwrap();

        let tokens = sink.finish();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, None);
        assert!(tokens[0].colocated.is_empty());
    }

    #[test]
    fn test_buffer_limit() {
        assert!(check_buffer_len(MAX_LEN).is_ok());
        assert!(matches!(check_buffer_len(MAX_LEN + 1), Err(FtsError::BufferTooLarge(_))));
    }

    #[test]
    fn test_token_json_shape() {
        let token = Token {
            token: "word".to_string(),
            span: Some(Span { start: 1, end: 5 }),
            colocated: SmallVec::new(),
        };
        assert_eq!(
            serde_json::to_string(&token).unwrap(),
            r#"{"token":"word","span":{"start":1,"end":5}}"#
        );
    }
}
