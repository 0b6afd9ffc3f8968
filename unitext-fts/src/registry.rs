//! Named tokenizer registry with stale handle detection
//!
//! Every registration gets a fresh generation number. A
//! [`TokenizerHandle`] remembers the generation it was created from and
//! checks it again before each use, so a handle never silently runs a
//! tokenizer that has since been replaced or removed.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::error::{FtsError, Result};
use crate::reason::Reason;
use crate::token::{check_buffer_len, Token, TokenCollector, TokenSink, TokenizeOptions};
use crate::tokenizer::{Tokenizer, TokenizerFactory};

/// Deepest chain of tokenizers wrapping each other
pub const MAX_NESTING: usize = 16;

struct Entry {
    factory: Rc<dyn TokenizerFactory>,
    generation: u64,
}

/// Tokenizer factories by name
///
/// Uses interior mutability so that a tokenizer running through a handle
/// may register or unregister tokenizers. The registry is not `Sync`; the
/// owner serialises access to it.
#[derive(Default)]
pub struct TokenizerRegistry {
    entries: RefCell<HashMap<String, Entry>>,
    generation: Cell<u64>,
    depth: Cell<usize>,
}

impl fmt::Debug for TokenizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerRegistry")
            .field("names", &self.names())
            .field("generation", &self.generation.get())
            .finish()
    }
}

impl TokenizerRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`, replacing any previous registration
    pub fn register(&self, name: &str, factory: impl TokenizerFactory + 'static) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let previous = self.entries.borrow_mut().insert(
            name.to_string(),
            Entry {
                factory: Rc::new(factory),
                generation,
            },
        );
        match previous {
            Some(old) => debug!(tokenizer = name, old = old.generation, generation, "replaced tokenizer"),
            None => debug!(tokenizer = name, generation, "registered tokenizer"),
        }
    }

    /// Remove the tokenizer registered under `name`
    ///
    /// Returns whether anything was removed.
    pub fn unregister(&self, name: &str) -> bool {
        let removed = self.entries.borrow_mut().remove(name);
        if let Some(entry) = &removed {
            debug!(tokenizer = name, generation = entry.generation, "unregistered tokenizer");
        }
        removed.is_some()
    }

    /// Whether a tokenizer is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.borrow().contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    /// Current generation of `name`, if registered
    pub fn generation(&self, name: &str) -> Option<u64> {
        self.entries.borrow().get(name).map(|entry| entry.generation)
    }

    /// Create a tokenizer instance and wrap it in a handle
    pub fn tokenizer(&self, name: &str, args: &[String]) -> Result<TokenizerHandle<'_>> {
        let (factory, generation) = {
            let entries = self.entries.borrow();
            let entry = entries
                .get(name)
                .ok_or_else(|| FtsError::TokenizerNotFound(name.to_string()))?;
            (Rc::clone(&entry.factory), entry.generation)
        };

        let depth = self.depth.get();
        if depth >= MAX_NESTING {
            return Err(FtsError::NestingTooDeep {
                name: name.to_string(),
                depth,
            });
        }
        self.depth.set(depth + 1);
        let created = factory.create(self, args);
        self.depth.set(depth);

        let instance = created?;
        debug!(tokenizer = name, generation, ?args, "created tokenizer");
        Ok(TokenizerHandle {
            registry: self,
            name: name.to_string(),
            generation,
            args: args.to_vec(),
            instance,
        })
    }
}

/// A created tokenizer bound to the registration it came from
pub struct TokenizerHandle<'r> {
    registry: &'r TokenizerRegistry,
    name: String,
    generation: u64,
    args: Vec<String>,
    instance: Box<dyn Tokenizer + 'r>,
}

impl fmt::Debug for TokenizerHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerHandle")
            .field("name", &self.name)
            .field("generation", &self.generation)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

impl<'r> TokenizerHandle<'r> {
    /// Name the tokenizer was loaded under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments the tokenizer was created with
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Registry the tokenizer was loaded from
    pub fn registry(&self) -> &'r TokenizerRegistry {
        self.registry
    }

    /// Check the registration is still the one this handle was created from
    pub fn validate(&self) -> Result<()> {
        match self.registry.generation(&self.name) {
            Some(generation) if generation == self.generation => Ok(()),
            Some(generation) => {
                debug!(tokenizer = %self.name, cached = self.generation, generation, "stale tokenizer handle");
                Err(FtsError::TokenizerChanged(self.name.clone()))
            }
            None => {
                debug!(tokenizer = %self.name, cached = self.generation, "tokenizer handle outlived registration");
                Err(FtsError::TokenizerRemoved(self.name.clone()))
            }
        }
    }

    /// Tokenize `text`, reporting straight to `sink`
    pub fn tokenize_into(&mut self, text: &str, reason: Reason, sink: &mut dyn TokenSink) -> Result<()> {
        self.validate()?;
        self.instance.tokenize(reason, text, sink)
    }

    /// Tokenize a UTF-8 buffer into validated tokens
    pub fn tokenize(&mut self, utf8: &[u8], reason: Reason, options: TokenizeOptions) -> Result<Vec<Token>> {
        check_buffer_len(utf8.len())?;
        let text = std::str::from_utf8(utf8)?;
        let mut collector = TokenCollector::new(utf8.len(), options);
        self.tokenize_into(text, reason, &mut collector)?;
        Ok(collector.finish())
    }

    /// Tokenize with the raw reason flags
    pub fn tokenize_flags(&mut self, utf8: &[u8], flags: i32, options: TokenizeOptions) -> Result<Vec<Token>> {
        let reason = Reason::try_from(flags)?;
        self.tokenize(utf8, reason, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Whole;

    impl Tokenizer for Whole {
        fn tokenize(&mut self, _reason: Reason, text: &str, sink: &mut dyn TokenSink) -> Result<()> {
            sink.token(0, text, 0, text.len())
        }
    }

    struct WholeFactory;

    impl TokenizerFactory for WholeFactory {
        fn create<'r>(&self, _registry: &'r TokenizerRegistry, _args: &[String]) -> Result<Box<dyn Tokenizer + 'r>> {
            Ok(Box::new(Whole))
        }
    }

    struct Recursive;

    impl TokenizerFactory for Recursive {
        fn create<'r>(&self, registry: &'r TokenizerRegistry, args: &[String]) -> Result<Box<dyn Tokenizer + 'r>> {
            registry.tokenizer("loop", args)?;
            Ok(Box::new(Whole))
        }
    }

    #[test]
    fn test_generations_increase() {
        let registry = TokenizerRegistry::new();
        registry.register("a", WholeFactory);
        let first = registry.generation("a").unwrap();
        registry.register("a", WholeFactory);
        assert!(registry.generation("a").unwrap() > first);
        assert_eq!(registry.names(), vec!["a".to_string()]);
    }

    #[test]
    fn test_handle_detects_changes() {
        let registry = TokenizerRegistry::new();
        registry.register("whole", WholeFactory);
        let mut handle = registry.tokenizer("whole", &[]).unwrap();
        assert!(handle.validate().is_ok());

        registry.register("whole", WholeFactory);
        assert!(matches!(
            handle.tokenize(b"abc", Reason::Document, TokenizeOptions::default()),
            Err(FtsError::TokenizerChanged(name)) if name == "whole"
        ));

        registry.unregister("whole");
        assert!(matches!(handle.validate(), Err(FtsError::TokenizerRemoved(_))));
    }

    #[test]
    fn test_removed_then_registered_again_is_changed() {
        let registry = TokenizerRegistry::new();
        registry.register("whole", WholeFactory);
        let handle = registry.tokenizer("whole", &[]).unwrap();
        registry.unregister("whole");
        registry.register("whole", WholeFactory);
        assert!(matches!(handle.validate(), Err(FtsError::TokenizerChanged(_))));
    }

    #[test]
    fn test_unknown_name() {
        let registry = TokenizerRegistry::new();
        assert!(matches!(
            registry.tokenizer("missing", &[]),
            Err(FtsError::TokenizerNotFound(name)) if name == "missing"
        ));
        assert!(!registry.unregister("missing"));
    }

    #[test]
    fn test_cycles_are_cut_off() {
        let registry = TokenizerRegistry::new();
        registry.register("loop", Recursive);
        assert!(matches!(
            registry.tokenizer("loop", &[]),
            Err(FtsError::NestingTooDeep { depth: MAX_NESTING, .. })
        ));
        // Depth is restored after the failure
        registry.register("whole", WholeFactory);
        assert!(registry.tokenizer("whole", &[]).is_ok());
    }

    #[test]
    fn test_buffer_checks() {
        let registry = TokenizerRegistry::new();
        registry.register("whole", WholeFactory);
        let mut handle = registry.tokenizer("whole", &[]).unwrap();

        assert!(matches!(
            handle.tokenize(&[b'a', 0xC3], Reason::Document, TokenizeOptions::default()),
            Err(FtsError::InvalidUtf8 { position: 1 })
        ));
        assert!(matches!(
            handle.tokenize_flags(b"a", 6, TokenizeOptions::default()),
            Err(FtsError::InvalidReason(6))
        ));

        let tokens = handle.tokenize_flags(b"abc", 3, TokenizeOptions::default()).unwrap();
        assert_eq!(tokens[0].token, "abc");
    }
}
