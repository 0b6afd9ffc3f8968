//! Tokenizers implemented by user supplied functions
//!
//! The function returns a list of JSON values, each one of:
//!
//! - a string: a token with span `(0, 0)`
//! - `[start, end, token, colocated...]`
//! - `[token, colocated...]`: a token with span `(0, 0)`
//!
//! Values are checked and passed to the sink one by one, stopping at the
//! first malformed value.

use std::rc::Rc;

use serde_json::Value;

use crate::error::{BoxError, FtsError, Result};
use crate::reason::Reason;
use crate::registry::TokenizerRegistry;
use crate::token::{TokenSink, MAX_LEN, TOKEN_COLOCATED};
use crate::tokenizer::{Tokenizer, TokenizerFactory};

/// Tokenize function produced by a [`FunctionTokenizerFactory`]
pub type TokenizeFn = Box<dyn FnMut(&str, Reason) -> std::result::Result<Vec<Value>, BoxError>>;

type CreateFn = dyn Fn(&TokenizerRegistry, &[String]) -> std::result::Result<TokenizeFn, BoxError>;

/// Factory wrapping a user function
pub struct FunctionTokenizerFactory {
    create: Box<CreateFn>,
}

impl FunctionTokenizerFactory {
    /// Factory calling `create` with the registry and arguments for each
    /// new instance
    pub fn new<F>(create: F) -> Self
    where
        F: Fn(&TokenizerRegistry, &[String]) -> std::result::Result<TokenizeFn, BoxError> + 'static,
    {
        Self {
            create: Box::new(create),
        }
    }

    /// Factory whose instances all run `tokenize` and ignore arguments
    pub fn from_fn<F>(tokenize: F) -> Self
    where
        F: Fn(&str, Reason) -> std::result::Result<Vec<Value>, BoxError> + 'static,
    {
        let tokenize = Rc::new(tokenize);
        Self::new(move |_, _| {
            let tokenize = Rc::clone(&tokenize);
            Ok(Box::new(move |text: &str, reason: Reason| tokenize(text, reason)) as TokenizeFn)
        })
    }
}

impl TokenizerFactory for FunctionTokenizerFactory {
    fn create<'r>(&self, registry: &'r TokenizerRegistry, args: &[String]) -> Result<Box<dyn Tokenizer + 'r>> {
        let tokenize = (self.create)(registry, args).map_err(FtsError::TokenizerFailed)?;
        Ok(Box::new(FunctionTokenizer { tokenize }))
    }
}

struct FunctionTokenizer {
    tokenize: TokenizeFn,
}

impl Tokenizer for FunctionTokenizer {
    fn tokenize(&mut self, reason: Reason, text: &str, sink: &mut dyn TokenSink) -> Result<()> {
        let values = (self.tokenize)(text, reason).map_err(FtsError::TokenizerFailed)?;
        for value in &values {
            report_value(value, text.len(), sink)?;
        }
        Ok(())
    }
}

fn token_str(value: &Value, index: usize) -> Result<&str> {
    let token = value.as_str().ok_or_else(|| {
        FtsError::InvalidReportedToken(format!("expected item {index} to be a string, not {}", kind(value)))
    })?;
    if token.len() > MAX_LEN {
        return Err(FtsError::TokenTooLong(token.len()));
    }
    Ok(token)
}

fn offset(value: &Value, which: &str) -> Result<usize> {
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| FtsError::InvalidReportedToken(format!("{which} should be a non-negative integer, not {value}")))
}

fn report_value(value: &Value, len: usize, sink: &mut dyn TokenSink) -> Result<()> {
    let items = match value {
        Value::String(_) => return sink.token(0, token_str(value, 0)?, 0, 0),
        Value::Array(items) => items,
        other => {
            return Err(FtsError::InvalidReportedToken(format!(
                "expected a string or an array, not {}",
                kind(other)
            )))
        }
    };

    let Some(first) = items.first() else {
        return Err(FtsError::InvalidReportedToken("array is empty".to_string()));
    };

    let (start, end, first_token) = if first.is_number() {
        if items.len() < 3 {
            return Err(FtsError::InvalidReportedToken(format!(
                "array isn't long enough ({}), should be at least two integers and a string",
                items.len()
            )));
        }
        let start = offset(&items[0], "start")?;
        let end = offset(&items[1], "end")?;
        if start > end || end > len {
            return Err(FtsError::InvalidSpan { start, end, len });
        }
        (start, end, 2)
    } else {
        (0, 0, 0)
    };

    for (index, item) in items.iter().enumerate().skip(first_token) {
        let flags = if index == first_token { 0 } else { TOKEN_COLOCATED };
        sink.token(flags, token_str(item, index)?, start, end)?;
    }
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenCollector, TokenizeOptions};
    use serde_json::json;

    fn report(values: Vec<Value>, len: usize) -> Result<Vec<Token>> {
        let mut sink = TokenCollector::new(len, TokenizeOptions::default());
        for value in &values {
            report_value(value, len, &mut sink)?;
        }
        Ok(sink.finish())
    }

    #[test]
    fn test_accepted_shapes() {
        let tokens = report(
            vec![json!("bare"), json!([0, 3, "abc", "ABC"]), json!(["x", "y", "z"])],
            5,
        )
        .unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].token, "bare");
        assert_eq!(tokens[0].span.map(|s| (s.start, s.end)), Some((0, 0)));
        assert_eq!(tokens[1].texts().collect::<Vec<_>>(), vec!["abc", "ABC"]);
        assert_eq!(tokens[1].span.map(|s| (s.start, s.end)), Some((0, 3)));
        assert_eq!(tokens[2].texts().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_rejected_shapes() {
        let cases = [
            json!([]),
            json!(42),
            json!(null),
            json!([0, "x"]),
            json!([0, "1", "x"]),
            json!([0, 1, 2]),
            json!([-1, 1, "x"]),
            json!([0.5, 1, "x"]),
            json!(["x", 1]),
        ];
        for value in cases {
            let result = report(vec![value.clone()], 5);
            assert!(
                matches!(result, Err(FtsError::InvalidReportedToken(_))),
                "{value} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_rejected_spans() {
        assert!(matches!(
            report(vec![json!([3, 1, "x"])], 5),
            Err(FtsError::InvalidSpan { start: 3, end: 1, len: 5 })
        ));
        assert!(matches!(
            report(vec![json!([0, 6, "x"])], 5),
            Err(FtsError::InvalidSpan { .. })
        ));
    }
}
