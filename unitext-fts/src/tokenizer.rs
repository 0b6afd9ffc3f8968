//! Tokenizer traits for pluggable implementations

use crate::error::Result;
use crate::reason::Reason;
use crate::registry::TokenizerRegistry;
use crate::token::TokenSink;

/// A created tokenizer instance
///
/// Dropping the instance releases it.
pub trait Tokenizer {
    /// Report the tokens of `text` to `sink`, in order
    fn tokenize(&mut self, reason: Reason, text: &str, sink: &mut dyn TokenSink) -> Result<()>;
}

/// Creates tokenizer instances from argument lists
pub trait TokenizerFactory {
    /// Create an instance configured by `args`
    ///
    /// The registry is passed so that wrapping tokenizers can load the
    /// tokenizers they delegate to.
    fn create<'r>(&self, registry: &'r TokenizerRegistry, args: &[String]) -> Result<Box<dyn Tokenizer + 'r>>;
}
