//! Boundary validation of raw symptom codes.
//!
//! Bad tokens never abort a query: they are collected as warnings and the
//! remaining valid primes carry on to matching.

use crate::{CheckerError, Encoding, Prime};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryWarning {
    NotAnInteger(String),
    /// Canonical decimal text, so integers of any size are kept.
    UnknownPrime(String),
}

impl QueryWarning {
    /// The error this warning stands for, if it had been raised.
    pub fn as_error(&self) -> CheckerError {
        match self {
            Self::NotAnInteger(token) => CheckerError::InvalidArgument(format!("{token:?} is not an integer")),
            Self::UnknownPrime(n) => CheckerError::UnknownPrime(n.clone()),
        }
    }
}

impl fmt::Display for QueryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger(token) => write!(f, "'{token}' (Not an integer)"),
            Self::UnknownPrime(n) => write!(f, "{n} (Not a valid symptom prime)"),
        }
    }
}

impl Serialize for QueryWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// Valid primes, deduplicated and ascending.
    pub primes: BTreeSet<Prime>,
    pub warnings: Vec<QueryWarning>,
    /// Number of non-empty tokens seen.
    pub tokens: usize,
}

impl ParsedQuery {
    /// Parse comma-separated text such as `"2, 5, 11"`.
    pub fn parse(raw: &str, encoding: &Encoding) -> Self {
        Self::from_tokens(raw.split(','), encoding)
    }

    /// Validate already-split tokens, e.g. repeated form fields.
    pub fn from_tokens<I, T>(tokens: I, encoding: &Encoding) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut query = Self::default();
        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            query.tokens += 1;
            let Some(integer) = canonical_integer(token) else {
                query.warnings.push(QueryWarning::NotAnInteger(token.to_string()));
                continue;
            };
            match integer.parse::<Prime>().ok().filter(|p| encoding.symptom_of(*p).is_some()) {
                Some(p) => {
                    query.primes.insert(p);
                }
                None => query.warnings.push(QueryWarning::UnknownPrime(integer)),
            }
        }
        if !query.warnings.is_empty() {
            tracing::debug!(warnings = query.warnings.len(), valid = query.primes.len(), "query had invalid tokens");
        }
        query
    }

    pub fn from_primes<I: IntoIterator<Item = Prime>>(primes: I, encoding: &Encoding) -> Self {
        Self::from_tokens(primes.into_iter().map(|p| p.to_string()), encoding)
    }

    /// True when no token was given at all.
    pub fn is_blank(&self) -> bool {
        self.tokens == 0
    }

    /// True when nothing valid is left to match.
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Symptom names for the valid primes, sorted by name.
    pub fn symptom_names<'e>(&self, encoding: &'e Encoding) -> Vec<&'e str> {
        let mut names: Vec<&str> = self.primes.iter().filter_map(|p| encoding.symptom_of(*p)).collect();
        names.sort_unstable();
        names
    }
}

/// Decimal integer text without a `+` sign or leading zeros, or `None` if
/// `token` is not an integer. Any magnitude is accepted.
fn canonical_integer(token: &str) -> Option<String> {
    let (negative, digits) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = digits.trim_start_matches('0');
    Some(match (negative, digits) {
        (_, "") => "0".to_string(),
        (true, d) => format!("-{d}"),
        (false, d) => d.to_string(),
    })
}
