//! Tokenizers built on unitext segmentation

use tracing::debug;
use unitext_core::{casefold, word_next, WordFilter};

use crate::error::{FtsError, Result};
use crate::reason::Reason;
use crate::registry::{TokenizerHandle, TokenizerRegistry};
use crate::token::{TokenSink, TOKEN_COLOCATED};
use crate::tokenizer::{Tokenizer, TokenizerFactory};

/// Name of the word tokenizer
pub const UNICODE_WORDS: &str = "unicode_words";
/// Name of the case folding tokenizer
pub const CASEFOLD: &str = "casefold";

/// Register the built-in tokenizers
pub fn register_builtins(registry: &TokenizerRegistry) {
    registry.register(UNICODE_WORDS, UnicodeWordsFactory);
    registry.register(CASEFOLD, CasefoldFactory);
}

/// Options for [`UNICODE_WORDS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnicodeWordsOptions {
    /// Which word segments become tokens
    pub filter: WordFilter,
}

impl UnicodeWordsOptions {
    /// Parse `categories <list>` style arguments
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut options = Self::default();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "categories" => {
                    let value = args
                        .next()
                        .ok_or_else(|| FtsError::invalid_argument(UNICODE_WORDS, "categories needs a value"))?;
                    options.filter = value
                        .parse::<WordFilter>()
                        .map_err(|err| FtsError::invalid_argument(UNICODE_WORDS, format!("{err}")))?;
                    if options.filter == WordFilter::NONE {
                        return Err(FtsError::invalid_argument(UNICODE_WORDS, "categories is empty"));
                    }
                }
                other => {
                    return Err(FtsError::invalid_argument(
                        UNICODE_WORDS,
                        format!("unknown argument '{other}'"),
                    ))
                }
            }
        }
        Ok(options)
    }
}

/// Factory for [`UnicodeWords`]
#[derive(Debug, Default)]
pub struct UnicodeWordsFactory;

impl TokenizerFactory for UnicodeWordsFactory {
    fn create<'r>(&self, _registry: &'r TokenizerRegistry, args: &[String]) -> Result<Box<dyn Tokenizer + 'r>> {
        let options = UnicodeWordsOptions::from_args(args)?;
        Ok(Box::new(UnicodeWords { options }))
    }
}

/// Emits each word segment containing a selected category
#[derive(Debug)]
pub struct UnicodeWords {
    options: UnicodeWordsOptions,
}

impl Tokenizer for UnicodeWords {
    fn tokenize(&mut self, _reason: Reason, text: &str, sink: &mut dyn TokenSink) -> Result<()> {
        let mut offset = 0;
        while offset < text.len() {
            let (start, end) = word_next(text, offset, self.options.filter)?;
            if start == end {
                break;
            }
            sink.token(0, &text[start..end], start, end)?;
            offset = end;
        }
        Ok(())
    }
}

/// Factory for [`Casefold`]
///
/// Arguments are `[colocate] [<tokenizer> <args>...]`. Without a tokenizer
/// name the words tokenizer is wrapped.
#[derive(Debug, Default)]
pub struct CasefoldFactory;

impl TokenizerFactory for CasefoldFactory {
    fn create<'r>(&self, registry: &'r TokenizerRegistry, args: &[String]) -> Result<Box<dyn Tokenizer + 'r>> {
        let (colocate, rest) = match args.split_first() {
            Some((first, rest)) if first == "colocate" => (true, rest),
            _ => (false, args),
        };
        let inner = match rest.split_first() {
            Some((name, inner_args)) => registry.tokenizer(name, inner_args)?,
            None => registry.tokenizer(UNICODE_WORDS, &[])?,
        };
        debug!(inner = inner.name(), colocate, "casefold wraps tokenizer");
        Ok(Box::new(Casefold { inner, colocate }))
    }
}

/// Case folds the tokens of another tokenizer
///
/// With `colocate` the original token is kept and the folded form added as
/// a colocated token when it differs.
#[derive(Debug)]
pub struct Casefold<'r> {
    inner: TokenizerHandle<'r>,
    colocate: bool,
}

impl Tokenizer for Casefold<'_> {
    fn tokenize(&mut self, reason: Reason, text: &str, sink: &mut dyn TokenSink) -> Result<()> {
        let mut folding = FoldingSink {
            sink,
            colocate: self.colocate,
        };
        self.inner.tokenize_into(text, reason, &mut folding)
    }
}

struct FoldingSink<'s> {
    sink: &'s mut dyn TokenSink,
    colocate: bool,
}

impl TokenSink for FoldingSink<'_> {
    fn token(&mut self, flags: i32, token: &str, start: usize, end: usize) -> Result<()> {
        let folded = casefold(token);
        if !self.colocate {
            return self.sink.token(flags, &folded, start, end);
        }
        self.sink.token(flags, token, start, end)?;
        if folded != token {
            self.sink.token(TOKEN_COLOCATED, &folded, start, end)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenizeOptions;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn texts(registry: &TokenizerRegistry, name: &str, list: &[&str], text: &str) -> Vec<String> {
        let mut handle = registry.tokenizer(name, &args(list)).unwrap();
        handle
            .tokenize(text.as_bytes(), Reason::Document, TokenizeOptions::default())
            .unwrap()
            .into_iter()
            .map(|token| token.texts().collect::<Vec<_>>().join("|"))
            .collect()
    }

    #[test]
    fn test_words_options() {
        let options = UnicodeWordsOptions::from_args(&args(&["categories", "letter,emoji"])).unwrap();
        assert!(options.filter.letter && options.filter.emoji && !options.filter.number);

        let bad_args: [&[&str]; 4] = [&["categories"], &["categories", "colour"], &["categories", ""], &["bogus"]];
        for bad in bad_args {
            assert!(matches!(
                UnicodeWordsOptions::from_args(&args(bad)),
                Err(FtsError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_words_offsets() {
        let registry = TokenizerRegistry::new();
        register_builtins(&registry);
        let mut handle = registry.tokenizer(UNICODE_WORDS, &[]).unwrap();
        let tokens = handle
            .tokenize("Hi, it's 3.5!".as_bytes(), Reason::Document, TokenizeOptions::default())
            .unwrap();
        let spans: Vec<(usize, usize)> = tokens
            .iter()
            .filter_map(|t| t.span.map(|s| (s.start, s.end)))
            .collect();
        assert_eq!(spans, vec![(0, 2), (4, 8), (9, 12)]);
    }

    #[test]
    fn test_words_categories() {
        let registry = TokenizerRegistry::new();
        register_builtins(&registry);
        assert_eq!(texts(&registry, UNICODE_WORDS, &[], "a 1 \u{1F600}"), vec!["a", "1"]);
        assert_eq!(
            texts(&registry, UNICODE_WORDS, &["categories", "number,emoji"], "a 1 \u{1F600}"),
            vec!["1", "\u{1F600}"]
        );
    }

    #[test]
    fn test_casefold_replaces_tokens() {
        let registry = TokenizerRegistry::new();
        register_builtins(&registry);
        assert_eq!(
            texts(&registry, CASEFOLD, &[], "Stra\u{00DF}e MAIN"),
            vec!["strasse", "main"]
        );
    }

    #[test]
    fn test_casefold_colocates() {
        let registry = TokenizerRegistry::new();
        register_builtins(&registry);
        assert_eq!(
            texts(&registry, CASEFOLD, &["colocate", UNICODE_WORDS, "categories", "letter"], "Hello world 42"),
            vec!["Hello|hello", "world"]
        );
    }

    #[test]
    fn test_casefold_unknown_inner() {
        let registry = TokenizerRegistry::new();
        register_builtins(&registry);
        assert!(matches!(
            registry.tokenizer(CASEFOLD, &args(&["nope"])),
            Err(FtsError::TokenizerNotFound(name)) if name == "nope"
        ));
    }
}
