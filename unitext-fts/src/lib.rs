//! Full-text-search tokenizer adapter
//!
//! Exposes unitext segmentation through the tokenizer contract used by
//! full-text-search engines: factories create tokenizers from string
//! argument lists, tokenizers report `(flags, token, start, end)` to a sink,
//! and a registry hands out handles that detect when the tokenizer they
//! were created from has been replaced or removed.
//!
//! ```rust
//! use unitext_fts::{register_builtins, Reason, TokenizeOptions, TokenizerRegistry};
//!
//! let registry = TokenizerRegistry::new();
//! register_builtins(&registry);
//!
//! let mut handle = registry.tokenizer("casefold", &[]).unwrap();
//! let tokens = handle
//!     .tokenize("Hello World".as_bytes(), Reason::Document, TokenizeOptions::default())
//!     .unwrap();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.token.as_str()).collect();
//! assert_eq!(texts, vec!["hello", "world"]);
//! ```

#![warn(missing_docs)]

pub mod builtins;
pub mod error;
pub mod function;
pub mod reason;
pub mod registry;
pub mod token;
pub mod tokenizer;

pub use builtins::{
    register_builtins, Casefold, CasefoldFactory, UnicodeWords, UnicodeWordsFactory, UnicodeWordsOptions, CASEFOLD,
    UNICODE_WORDS,
};
pub use error::{BoxError, FtsError, Result};
pub use function::{FunctionTokenizerFactory, TokenizeFn};
pub use reason::{Reason, TOKENIZE_AUX, TOKENIZE_DOCUMENT, TOKENIZE_PREFIX, TOKENIZE_QUERY};
pub use registry::{TokenizerHandle, TokenizerRegistry, MAX_NESTING};
pub use token::{check_buffer_len, Span, Token, TokenCollector, TokenSink, TokenizeOptions, MAX_LEN, TOKEN_COLOCATED};
pub use tokenizer::{Tokenizer, TokenizerFactory};
