//! Total ordering over parsed versions
//!
//! Token sequences are compared position by position:
//! - numeric vs numeric compares as integers
//! - numeric is always greater than a qualifier at the same position
//! - qualifiers compare by [`QualifierRank`], unknown qualifiers lexically
//!   among themselves (case-insensitive first, case-sensitive tiebreak)
//! - a missing token counts as `0` against a number and as the release
//!   baseline against a qualifier
//!
//! Runs of "null" tokens (`0`, `ga`, `final`, `release`) that are not
//! followed by a significant number are dropped before comparing, so
//! `1.0-rc` == `1-rc` and `1.0.0` == `1`. Without this, a missing token
//! would be equal to both `0` and `ga` while those two differ, and the
//! order would stop being transitive.
//!
//! When the token sequences are equal a release sorts above its snapshot.

use num_traits::Zero;
use std::cmp::Ordering;

use super::parser::{Token, Version};

/// Rank of a qualifier, lowest first
///
/// | rank             | aliases (case-insensitive)   |
/// |------------------|------------------------------|
/// | Unknown          | anything not listed below    |
/// | Alpha            | `alpha`                      |
/// | Beta             | `beta`                       |
/// | Milestone        | `milestone`, `m`             |
/// | ReleaseCandidate | `rc`, `cr`                   |
/// | Release          | `""`, `ga`, `final`, `release` |
/// | ServicePack      | `sp`                         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QualifierRank {
    Unknown,
    Alpha,
    Beta,
    Milestone,
    ReleaseCandidate,
    Release,
    ServicePack,
}

impl QualifierRank {
    /// Look up the rank of a qualifier string
    pub fn of(qualifier: &str) -> Self {
        match qualifier.to_ascii_lowercase().as_str() {
            "alpha" => QualifierRank::Alpha,
            "beta" => QualifierRank::Beta,
            "milestone" | "m" => QualifierRank::Milestone,
            "rc" | "cr" => QualifierRank::ReleaseCandidate,
            "" | "ga" | "final" | "release" => QualifierRank::Release,
            "sp" => QualifierRank::ServicePack,
            _ => QualifierRank::Unknown,
        }
    }
}

/// Compare two versions
pub fn compare(a: &Version, b: &Version) -> Ordering {
    compare_sequences(a.significant(), b.significant()).then_with(|| {
        match (a.is_snapshot(), b.is_snapshot()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            _ => Ordering::Equal,
        }
    })
}

/// Keep only tokens that can influence ordering
///
/// A null token survives only when the nearest non-null token after it is
/// numeric.
pub(crate) fn significant_tokens(tokens: &[Token]) -> Vec<Token> {
    let mut kept = Vec::with_capacity(tokens.len());
    let mut followed_by_numeric = false;

    for token in tokens.iter().rev() {
        if is_null(token) {
            if followed_by_numeric {
                kept.push(token.clone());
            }
        } else {
            followed_by_numeric = token.is_numeric();
            kept.push(token.clone());
        }
    }

    kept.reverse();
    kept
}

fn is_null(token: &Token) -> bool {
    match token {
        Token::Numeric(n) => n.is_zero(),
        Token::Alphanumeric(q) => QualifierRank::of(q) == QualifierRank::Release,
    }
}

fn compare_sequences(a: &[Token], b: &[Token]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let ord = match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => compare_tokens(x, y),
            (Some(x), None) => compare_to_missing(x),
            (None, Some(y)) => compare_to_missing(y).reverse(),
            (None, None) => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn compare_tokens(a: &Token, b: &Token) -> Ordering {
    match (a, b) {
        (Token::Numeric(x), Token::Numeric(y)) => x.cmp(y),
        (Token::Numeric(_), Token::Alphanumeric(_)) => Ordering::Greater,
        (Token::Alphanumeric(_), Token::Numeric(_)) => Ordering::Less,
        (Token::Alphanumeric(x), Token::Alphanumeric(y)) => compare_qualifiers(x, y),
    }
}

fn compare_qualifiers(a: &str, b: &str) -> Ordering {
    let (rank_a, rank_b) = (QualifierRank::of(a), QualifierRank::of(b));
    rank_a.cmp(&rank_b).then_with(|| {
        if rank_a == QualifierRank::Unknown {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        } else {
            Ordering::Equal
        }
    })
}

fn compare_to_missing(token: &Token) -> Ordering {
    match token {
        Token::Numeric(n) if n.is_zero() => Ordering::Equal,
        Token::Numeric(_) => Ordering::Greater,
        Token::Alphanumeric(q) => QualifierRank::of(q).cmp(&QualifierRank::Release),
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cmp(a: &str, b: &str) -> Ordering {
        compare(&Version::parse(a), &Version::parse(b))
    }

    #[rstest]
    #[case("1.0", "1")]
    #[case("1.0.0", "1")]
    #[case("1.0-rc", "1-rc")]
    #[case("1.0.0-alpha", "1-alpha")]
    #[case("1-ga", "1")]
    #[case("1.0-final", "1.0.0")]
    #[case("1.0-RC", "1.0-cr")]
    #[case("2.0-M1", "2.0-milestone-1")]
    #[case("1.0.0.0.0", "1")]
    fn test_equal_versions(#[case] a: &str, #[case] b: &str) {
        assert_eq!(cmp(a, b), Ordering::Equal, "{} == {}", a, b);
        assert_eq!(cmp(b, a), Ordering::Equal, "{} == {}", b, a);
    }

    #[rstest]
    #[case("1.0-alpha", "1.0-beta")]
    #[case("1.0-beta", "1.0-milestone")]
    #[case("1.0-m2", "1.0-rc")]
    #[case("1.0-rc", "1.0")]
    #[case("1.0", "1.0-sp")]
    #[case("1.0-sp", "1.0.1")]
    #[case("1.0-alpha-1", "1.0-alpha-2")]
    #[case("1.0-rc1", "1.0-rc2")]
    #[case("1.9", "1.10")]
    #[case("1.0-SNAPSHOT", "1.0")]
    #[case("0.9", "1.0-SNAPSHOT")]
    #[case("1.0-jre", "1.0")]
    #[case("1.0-android", "1.0-jre")]
    #[case("1.0-dev", "1.0-alpha")]
    #[case("1.0.0-jre", "1.0.1")]
    #[case("1-ga-1", "1.0.1")]
    #[case("1.0.alpha", "1")]
    #[case("1", "1-ga-1")]
    fn test_strictly_less(#[case] a: &str, #[case] b: &str) {
        assert_eq!(cmp(a, b), Ordering::Less, "{} < {}", a, b);
        assert_eq!(cmp(b, a), Ordering::Greater, "{} > {}", b, a);
    }

    #[test]
    fn test_numeric_beats_qualifier_at_same_position() {
        assert_eq!(cmp("1.0.1", "1.0.sp"), Ordering::Greater);
        assert_eq!(cmp("1.final", "1.0.1"), Ordering::Less);
    }

    #[test]
    fn test_unknown_qualifier_case_tiebreak() {
        assert_eq!(cmp("1.0-Foo", "1.0-foo"), Ordering::Less);
        assert_eq!(cmp("1.0-foo", "1.0-foo"), Ordering::Equal);
        assert_eq!(cmp("1.0-Bar", "1.0-foo"), Ordering::Less);
    }

    #[test]
    fn test_snapshot_sits_directly_below_release() {
        assert_eq!(cmp("1.0-SNAPSHOT", "1.0"), Ordering::Less);
        assert_eq!(cmp("1.0-SNAPSHOT", "1.0-rc"), Ordering::Greater);
        assert_eq!(cmp("1.0-SNAPSHOT", "1-SNAPSHOT"), Ordering::Equal);
        assert_eq!(cmp("1.1-SNAPSHOT", "1.0"), Ordering::Greater);
    }

    #[test]
    fn test_qualifier_rank_table() {
        assert_eq!(QualifierRank::of("ALPHA"), QualifierRank::Alpha);
        assert_eq!(QualifierRank::of("m"), QualifierRank::Milestone);
        assert_eq!(QualifierRank::of("CR"), QualifierRank::ReleaseCandidate);
        assert_eq!(QualifierRank::of("Final"), QualifierRank::Release);
        assert_eq!(QualifierRank::of("sp"), QualifierRank::ServicePack);
        assert_eq!(QualifierRank::of("a"), QualifierRank::Unknown);
        assert!(QualifierRank::ReleaseCandidate < QualifierRank::Release);
        assert!(QualifierRank::Unknown < QualifierRank::Alpha);
    }

    #[test]
    fn test_significant_tokens_drop_null_runs() {
        let v = Version::parse("1.0.0-ga");
        assert_eq!(v.significant().len(), 1);

        let v = Version::parse("1.0.1");
        assert_eq!(v.significant().len(), 3);

        let v = Version::parse("1.0-rc");
        assert_eq!(v.significant().len(), 2);
    }

    #[test]
    fn test_total_order_properties() {
        let raws = [
            "1", "1.0", "1.0.0", "1-alpha", "1.0-beta", "1.0-m1", "1.0-rc", "1.0-SNAPSHOT",
            "1.0-sp", "1.0.1", "1-ga-1", "1.0.alpha", "1.0-jre", "1.0-Jre", "1.1", "1.10",
            "2.0.0-rc1", "2", "0.9", "0.0.1", "1.0.0.1", "1-final", "alpha", "", "v1",
        ];
        let versions: Vec<Version> = raws.iter().map(|r| Version::parse(r)).collect();

        for a in &versions {
            assert_eq!(compare(a, a), Ordering::Equal, "reflexive: {}", a);
            for b in &versions {
                assert_eq!(
                    compare(a, b),
                    compare(b, a).reverse(),
                    "antisymmetric: {} vs {}",
                    a,
                    b
                );
                for c in &versions {
                    if compare(a, b) != Ordering::Greater && compare(b, c) != Ordering::Greater {
                        assert_ne!(
                            compare(a, c),
                            Ordering::Greater,
                            "transitive: {} <= {} <= {}",
                            a,
                            b,
                            c
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_sorting_is_stable_and_deterministic() {
        let mut versions: Vec<Version> = ["1.10", "1.0-rc", "1.0", "1.0-SNAPSHOT", "1.2", "1.0-alpha"]
            .iter()
            .map(|r| Version::parse(r))
            .collect();
        versions.sort();
        let sorted: Vec<&str> = versions.iter().map(|v| v.raw()).collect();
        assert_eq!(
            sorted,
            vec!["1.0-alpha", "1.0-rc", "1.0-SNAPSHOT", "1.0", "1.2", "1.10"]
        );
    }
}
