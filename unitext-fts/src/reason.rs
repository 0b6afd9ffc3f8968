//! Why a tokenizer is being invoked

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FtsError, Result};

/// Tokenizing a query
pub const TOKENIZE_QUERY: i32 = 0x0001;
/// Query term is a prefix search
pub const TOKENIZE_PREFIX: i32 = 0x0002;
/// Tokenizing a document for indexing
pub const TOKENIZE_DOCUMENT: i32 = 0x0004;
/// Tokenizing for an auxiliary function
pub const TOKENIZE_AUX: i32 = 0x0008;

/// Reason flags accepted by [`crate::Tokenizer::tokenize`]
///
/// Only four combinations of the raw flags are meaningful; anything else is
/// rejected by `TryFrom<i32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// Document being indexed
    Document,
    /// Query string
    Query,
    /// Query string that will be used for a prefix search
    QueryPrefix,
    /// Auxiliary function such as highlighting
    Aux,
}

impl Reason {
    /// Raw flag value
    pub fn flags(self) -> i32 {
        match self {
            Reason::Document => TOKENIZE_DOCUMENT,
            Reason::Query => TOKENIZE_QUERY,
            Reason::QueryPrefix => TOKENIZE_QUERY | TOKENIZE_PREFIX,
            Reason::Aux => TOKENIZE_AUX,
        }
    }

    /// Whether tokens are for a query rather than stored content
    pub fn is_query(self) -> bool {
        matches!(self, Reason::Query | Reason::QueryPrefix)
    }

    /// Lowercase name as accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::Document => "document",
            Reason::Query => "query",
            Reason::QueryPrefix => "query_prefix",
            Reason::Aux => "aux",
        }
    }
}

impl TryFrom<i32> for Reason {
    type Error = FtsError;

    fn try_from(flags: i32) -> Result<Self> {
        match flags {
            TOKENIZE_DOCUMENT => Ok(Reason::Document),
            TOKENIZE_QUERY => Ok(Reason::Query),
            f if f == TOKENIZE_QUERY | TOKENIZE_PREFIX => Ok(Reason::QueryPrefix),
            TOKENIZE_AUX => Ok(Reason::Aux),
            other => Err(FtsError::InvalidReason(other)),
        }
    }
}

impl From<Reason> for i32 {
    fn from(reason: Reason) -> i32 {
        reason.flags()
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reason {
    type Err = FtsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "document" => Ok(Reason::Document),
            "query" => Ok(Reason::Query),
            "query_prefix" | "prefix" => Ok(Reason::QueryPrefix),
            "aux" => Ok(Reason::Aux),
            _ => s
                .parse::<i32>()
                .map_err(|_| FtsError::invalid_argument("reason", format!("unknown reason '{s}'")))
                .and_then(Reason::try_from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_flag_values() {
        assert_eq!(Reason::try_from(4).unwrap(), Reason::Document);
        assert_eq!(Reason::try_from(1).unwrap(), Reason::Query);
        assert_eq!(Reason::try_from(3).unwrap(), Reason::QueryPrefix);
        assert_eq!(Reason::try_from(8).unwrap(), Reason::Aux);
    }

    #[test]
    fn test_rejected_flag_values() {
        for flags in [0, 2, 5, 6, 12, 16, -1] {
            assert!(
                matches!(Reason::try_from(flags), Err(FtsError::InvalidReason(f)) if f == flags),
                "{flags} should be rejected"
            );
        }
    }

    #[test]
    fn test_flags_round_trip() {
        for reason in [Reason::Document, Reason::Query, Reason::QueryPrefix, Reason::Aux] {
            assert_eq!(Reason::try_from(i32::from(reason)).unwrap(), reason);
            assert_eq!(reason.as_str().parse::<Reason>().unwrap(), reason);
        }
    }

    #[test]
    fn test_parse_names_and_numbers() {
        assert_eq!("Query-Prefix".parse::<Reason>().unwrap(), Reason::QueryPrefix);
        assert_eq!("prefix".parse::<Reason>().unwrap(), Reason::QueryPrefix);
        assert_eq!("8".parse::<Reason>().unwrap(), Reason::Aux);
        assert!(matches!("7".parse::<Reason>(), Err(FtsError::InvalidReason(7))));
        assert!(matches!("index".parse::<Reason>(), Err(FtsError::InvalidArgument { .. })));
    }

    #[test]
    fn test_is_query() {
        assert!(Reason::QueryPrefix.is_query());
        assert!(!Reason::Document.is_query());
    }
}
