//! Version string tokenization
//!
//! A raw version is split at `.`, `-` and `_` and at every transition
//! between a digit run and a non-digit run. Digit runs become
//! [`Token::Numeric`] (arbitrary precision, so long build numbers never
//! overflow), everything else becomes [`Token::Alphanumeric`].
//!
//! Parsing never fails: `"1.0-SNAPSHOT"`, `"v2"`, `"2023.07.01+build.9"` and
//! even `""` all produce a [`Version`].

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::comparator;

/// Suffix marking an in-development build
const SNAPSHOT: &str = "SNAPSHOT";

/// A single version component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A run of ASCII digits
    Numeric(BigUint),
    /// A run of anything else, case preserved
    Alphanumeric(String),
}

impl Token {
    /// Returns true for numeric tokens
    pub fn is_numeric(&self) -> bool {
        matches!(self, Token::Numeric(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Numeric(n) => write!(f, "{}", n),
            Token::Alphanumeric(s) => f.write_str(s),
        }
    }
}

/// An immutable, comparable version built from a raw string
///
/// Equality and ordering are structural (see [`comparator`]); the raw string
/// is kept only for display and round-tripping, so `"1.0"` equals `"1"`.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    tokens: Vec<Token>,
    /// Tokens that take part in ordering (zero/release runs that cannot
    /// influence the result are dropped)
    significant: Vec<Token>,
    snapshot: bool,
}

impl Version {
    /// Parse a raw version string
    pub fn parse(raw: &str) -> Self {
        let mut tokens = tokenize(raw.trim());
        let snapshot = strip_snapshot(raw.trim(), &mut tokens);
        let significant = comparator::significant_tokens(&tokens);

        Self {
            raw: raw.to_string(),
            tokens,
            significant,
            snapshot,
        }
    }

    /// The original string this version was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// All tokens in order, without the snapshot marker
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens used for ordering
    pub(crate) fn significant(&self) -> &[Token] {
        &self.significant
    }

    /// Returns true if this version carries a `-SNAPSHOT` suffix
    pub fn is_snapshot(&self) -> bool {
        self.snapshot
    }

    /// The leading run of numeric tokens (`[1, 2, 3]` for `"1.2.3-rc1"`)
    pub fn numeric_prefix(&self) -> impl Iterator<Item = &BigUint> {
        self.tokens.iter().map_while(|token| match token {
            Token::Numeric(n) => Some(n),
            Token::Alphanumeric(_) => None,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version::parse(s))
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Version::parse(&raw))
    }
}

/// Split a version string into tokens
fn tokenize(raw: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_is_digit = false;

    for ch in raw.chars() {
        if matches!(ch, '.' | '-' | '_') {
            flush(&mut current, current_is_digit, &mut tokens);
            continue;
        }

        let is_digit = ch.is_ascii_digit();
        if !current.is_empty() && is_digit != current_is_digit {
            flush(&mut current, current_is_digit, &mut tokens);
        }
        current_is_digit = is_digit;
        current.push(ch);
    }
    flush(&mut current, current_is_digit, &mut tokens);

    tokens
}

fn flush(current: &mut String, is_digit: bool, tokens: &mut Vec<Token>) {
    if current.is_empty() {
        return;
    }

    let token = if is_digit {
        match BigUint::parse_bytes(current.as_bytes(), 10) {
            Some(n) => Token::Numeric(n),
            None => Token::Alphanumeric(current.clone()),
        }
    } else {
        Token::Alphanumeric(current.clone())
    };
    tokens.push(token);
    current.clear();
}

/// Remove a trailing snapshot marker, returning whether one was present
fn strip_snapshot(raw: &str, tokens: &mut Vec<Token>) -> bool {
    let has_suffix = raw.eq_ignore_ascii_case(SNAPSHOT)
        || raw
            .len()
            .checked_sub(SNAPSHOT.len() + 1)
            .and_then(|start| raw.get(start..))
            .is_some_and(|tail| tail.eq_ignore_ascii_case("-SNAPSHOT"));

    if !has_suffix {
        return false;
    }

    match tokens.last() {
        Some(Token::Alphanumeric(s)) if s.eq_ignore_ascii_case(SNAPSHOT) => {
            tokens.pop();
            true
        }
        _ => false,
    }
}
