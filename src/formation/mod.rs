//! Formation labels: parsing into line sizes and normalization
//!
//! A formation label such as `"4-3-3"` lists the outfield lines from the
//! back line forward, goalkeeper excluded.

pub mod lexer;
mod canonical;

pub use canonical::{
    is_known, normalize, normalize_or, recognize, DEFAULT_FORMATION, KNOWN_FORMATIONS,
};

/// Outfield line sizes parsed from a formation label
///
/// A line whose token did not parse as an integer is `None`; mappers treat
/// it as "no match" and fall back to their default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formation {
    lines: Vec<Option<u32>>,
}

impl Formation {
    /// All parsed lines, back to front
    pub fn lines(&self) -> &[Option<u32>] {
        &self.lines
    }

    /// Size of line `index`; lines past the end read as `Some(0)`
    pub fn line(&self, index: usize) -> Option<u32> {
        self.lines.get(index).copied().unwrap_or(Some(0))
    }
}

/// Parse a formation label into line sizes.
///
/// Splits on `-` and parses each token; no count or range validation is done
/// here, see [`normalize`] for that.
///
/// # Example
///
/// ```rust
/// use lineup_layout::formation::parse;
///
/// let formation = parse("4-x-3");
/// assert_eq!(formation.lines(), &[Some(4), None, Some(3)]);
/// assert_eq!(formation.line(5), Some(0));
/// ```
pub fn parse(formation: &str) -> Formation {
    Formation {
        lines: formation
            .split('-')
            .map(|token| token.trim().parse::<u32>().ok())
            .collect(),
    }
}
