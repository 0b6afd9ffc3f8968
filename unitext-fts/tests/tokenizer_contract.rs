//! Integration tests for the tokenizer contract and registry behaviour

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use serde_json::{json, Value};
use unitext_fts::{
    register_builtins, BoxError, FtsError, FunctionTokenizerFactory, Reason, TokenizeFn, TokenizeOptions,
    TokenizerRegistry, CASEFOLD, UNICODE_WORDS,
};

fn fixed(values: Vec<Value>) -> FunctionTokenizerFactory {
    FunctionTokenizerFactory::from_fn(move |_, _| Ok(values.clone()))
}

fn document(registry: &TokenizerRegistry, name: &str, text: &str) -> Result<Vec<String>, FtsError> {
    let mut handle = registry.tokenizer(name, &[])?;
    let tokens = handle.tokenize(text.as_bytes(), Reason::Document, TokenizeOptions::default())?;
    Ok(tokens.into_iter().map(|token| token.token).collect())
}

#[test]
fn test_inverted_span_is_rejected() {
    let registry = TokenizerRegistry::new();
    registry.register("bad", fixed(vec![json!([3, 1, "abc"])]));

    let result = document(&registry, "bad", "abcdef");
    assert!(matches!(result, Err(FtsError::InvalidSpan { start: 3, end: 1, len: 6 })));
}

#[test]
fn test_span_past_buffer_is_rejected() {
    let registry = TokenizerRegistry::new();
    registry.register("bad", fixed(vec![json!([0, 3, "abc"]), json!([4, 9, "def"])]));

    let result = document(&registry, "bad", "abc def");
    assert!(matches!(result, Err(FtsError::InvalidSpan { end: 9, len: 7, .. })));
}

#[test]
fn test_function_tokenizer_shapes() {
    let registry = TokenizerRegistry::new();
    registry.register(
        "fixed",
        fixed(vec![json!("solo"), json!([0, 3, "run", "ran", "running"]), json!(["alias", "other"])]),
    );

    let mut handle = registry.tokenizer("fixed", &[]).unwrap();
    let tokens = handle
        .tokenize(b"run fast", Reason::Query, TokenizeOptions::default())
        .unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].colocated.as_slice(), ["ran".to_string(), "running".to_string()]);

    let plain = handle
        .tokenize(
            b"run fast",
            Reason::Query,
            TokenizeOptions {
                include_offsets: false,
                include_colocated: false,
            },
        )
        .unwrap();
    assert!(plain.iter().all(|t| t.span.is_none() && t.colocated.is_empty()));
    assert_eq!(
        plain.iter().map(|t| t.token.as_str()).collect::<Vec<_>>(),
        vec!["solo", "run", "alias"]
    );
}

#[test]
fn test_function_sees_reason_and_args() {
    let registry = TokenizerRegistry::new();
    registry.register(
        "echo",
        FunctionTokenizerFactory::new(|_, args| {
            let prefix = args.join("+");
            Ok(Box::new(move |text: &str, reason: Reason| {
                Ok::<_, BoxError>(vec![json!(format!("{prefix}:{reason}:{text}"))])
            }) as TokenizeFn)
        }),
    );

    let mut handle = registry
        .tokenizer("echo", &["a".to_string(), "b".to_string()])
        .unwrap();
    assert_eq!(handle.args(), ["a".to_string(), "b".to_string()]);
    let tokens = handle
        .tokenize_flags(b"hi", 3, TokenizeOptions::default())
        .unwrap();
    assert_eq!(tokens[0].token, "a+b:query_prefix:hi");
}

#[test]
fn test_function_failure_is_distinct() {
    let registry = TokenizerRegistry::new();
    registry.register(
        "failing",
        FunctionTokenizerFactory::from_fn(|_, _| Err(BoxError::from("no dictionary loaded"))),
    );
    registry.register(
        "refusing",
        FunctionTokenizerFactory::new(|_, _| Err(BoxError::from("bad args"))),
    );

    let err = document(&registry, "failing", "x").unwrap_err();
    assert!(matches!(err, FtsError::TokenizerFailed(_)));
    assert!(err.to_string().contains("no dictionary loaded"));

    assert!(matches!(
        registry.tokenizer("refusing", &[]),
        Err(FtsError::TokenizerFailed(_))
    ));
}

#[test]
fn test_reregistering_invalidates_handles() {
    let registry = TokenizerRegistry::new();
    registry.register("words", fixed(vec![json!("old")]));
    let mut stale = registry.tokenizer("words", &[]).unwrap();
    assert!(stale.tokenize(b"x", Reason::Document, TokenizeOptions::default()).is_ok());

    registry.register("words", fixed(vec![json!("new")]));
    assert!(matches!(
        stale.tokenize(b"x", Reason::Document, TokenizeOptions::default()),
        Err(FtsError::TokenizerChanged(name)) if name == "words"
    ));
    assert_eq!(document(&registry, "words", "x").unwrap(), vec!["new"]);

    registry.unregister("words");
    assert!(matches!(
        stale.tokenize(b"x", Reason::Document, TokenizeOptions::default()),
        Err(FtsError::TokenizerRemoved(_))
    ));
    assert!(matches!(document(&registry, "words", "x"), Err(FtsError::TokenizerNotFound(_))));
}

#[test]
fn test_wrapped_tokenizer_changes_are_detected() {
    let registry = TokenizerRegistry::new();
    register_builtins(&registry);
    registry.register("inner", fixed(vec![json!("ABC")]));

    let mut folding = registry
        .tokenizer(CASEFOLD, &["inner".to_string()])
        .unwrap();
    let tokens = folding
        .tokenize(b"ABC", Reason::Document, TokenizeOptions::default())
        .unwrap();
    assert_eq!(tokens[0].token, "abc");

    registry.register("inner", fixed(vec![json!("XYZ")]));
    assert!(matches!(
        folding.tokenize(b"ABC", Reason::Document, TokenizeOptions::default()),
        Err(FtsError::TokenizerChanged(name)) if name == "inner"
    ));
}

#[test]
fn test_reentrant_registration_during_tokenize() {
    let registry = Rc::new(TokenizerRegistry::new());
    let calls = Rc::new(Cell::new(0));

    let weak = Rc::downgrade(&registry);
    let counter = Rc::clone(&calls);
    registry.register(
        "self_replacing",
        FunctionTokenizerFactory::from_fn(move |text, _| {
            counter.set(counter.get() + 1);
            if let Some(registry) = weak.upgrade() {
                registry.register("self_replacing", fixed(vec![json!("replacement")]));
            }
            Ok(vec![json!([0, text.len(), text])])
        }),
    );

    let mut handle = registry.tokenizer("self_replacing", &[]).unwrap();
    let first = handle
        .tokenize(b"abc", Reason::Document, TokenizeOptions::default())
        .unwrap();
    assert_eq!(first[0].token, "abc");

    assert!(matches!(
        handle.tokenize(b"abc", Reason::Document, TokenizeOptions::default()),
        Err(FtsError::TokenizerChanged(_))
    ));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_builtin_names() {
    let registry = TokenizerRegistry::new();
    register_builtins(&registry);
    assert_eq!(registry.names(), vec![CASEFOLD.to_string(), UNICODE_WORDS.to_string()]);
}

proptest! {
    #[test]
    fn words_are_ordered_slices_of_input(s in "\\PC{0,80}") {
        let registry = TokenizerRegistry::new();
        register_builtins(&registry);
        let mut handle = registry.tokenizer(UNICODE_WORDS, &[]).unwrap();
        let tokens = handle.tokenize(s.as_bytes(), Reason::Document, TokenizeOptions::default()).unwrap();

        let mut last_end = 0;
        for token in &tokens {
            let span = token.span.unwrap();
            prop_assert!(span.start >= last_end);
            prop_assert!(span.start < span.end);
            prop_assert_eq!(&s[span.start..span.end], token.token.as_str());
            last_end = span.end;
        }
    }

    #[test]
    fn casefolded_tokens_are_stable(s in "\\PC{0,80}") {
        let registry = TokenizerRegistry::new();
        register_builtins(&registry);
        let mut handle = registry.tokenizer(CASEFOLD, &[]).unwrap();
        let tokens = handle.tokenize(s.as_bytes(), Reason::Query, TokenizeOptions::default()).unwrap();
        for token in &tokens {
            prop_assert_eq!(unitext_core::casefold(&token.token), token.token.as_str());
        }
    }
}
