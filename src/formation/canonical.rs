//! Canonicalization of formation labels against the known set

use super::lexer::{tokenize, Token};

/// Formation used whenever a label is unknown or malformed
pub const DEFAULT_FORMATION: &str = "4-3-3";

/// Formations accepted by the normalizer, in canonical ASCII form
pub const KNOWN_FORMATIONS: &[&str] = &[
    "4-4-2",
    "4-3-3",
    "4-5-1",
    "4-2-3-1",
    "4-1-4-1",
    "4-4-1-1",
    "4-3-1-2",
    "4-2-2-2",
    "4-3-2-1",
    "3-5-2",
    "3-4-3",
    "3-4-2-1",
    "5-3-2",
    "5-4-1",
    "4-1-2-1-2",
];

/// Normalize a formation label, falling back to [`DEFAULT_FORMATION`].
///
/// Whitespace is dropped and dash variants (en-dash, em-dash, minus sign,
/// fullwidth hyphen...) are unified to `-` before the lookup. The result is
/// always a member of [`KNOWN_FORMATIONS`], so normalizing twice is a no-op.
///
/// # Example
///
/// ```rust
/// use lineup_layout::formation::normalize;
///
/// assert_eq!(normalize(" 4 \u{2013} 2 \u{2013} 3 \u{2013} 1 "), "4-2-3-1");
/// assert_eq!(normalize("9-9-9"), "4-3-3");
/// ```
pub fn normalize(formation: &str) -> String {
    normalize_or(formation, DEFAULT_FORMATION)
}

/// Normalize a formation label, falling back to `default` when unknown.
///
/// `default` is returned as given; callers are expected to pass a known
/// formation (see [`is_known`]).
pub fn normalize_or(formation: &str, default: &str) -> String {
    recognize(formation).unwrap_or_else(|| default.to_string())
}

/// Canonical form of a label if it names a known formation
pub fn recognize(formation: &str) -> Option<String> {
    canonicalize(formation).filter(|canonical| is_known(canonical))
}

/// Whether a label is one of the known canonical formations
pub fn is_known(formation: &str) -> bool {
    KNOWN_FORMATIONS.contains(&formation)
}

/// Rebuild a label as `N-N-...-N`, or `None` if it does not have that shape.
fn canonicalize(formation: &str) -> Option<String> {
    let tokens = tokenize(formation)?;
    let mut lines = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut expect_number = true;

    for token in tokens {
        match (token, expect_number) {
            (Token::Number(n), true) => lines.push(n.to_string()),
            (Token::Dash, false) => {}
            _ => return None,
        }
        expect_number = !expect_number;
    }

    // Trailing dash or empty input
    if expect_number {
        return None;
    }

    Some(lines.join("-"))
}
