//! Ranked result sets for linenav
//!
//! A `ResultSet` is the ordered collection of line matches for one search:
//! derived fresh on every buffer or query change, sorted by descending
//! score, and never mutated in place. An empty set is a valid value of its
//! own, distinct from "no search ran" (that distinction lives in the search
//! status, not here).

use log::debug;

use crate::host::{Line, LineRange};
use crate::matcher::{LineMatch, LineMatcher};

// ─────────────────────────────────────────────────────────────────────────────
// Result Set
// ─────────────────────────────────────────────────────────────────────────────

/// The ranked matches for one search, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    matches: Vec<LineMatch>,
}

impl ResultSet {
    /// An empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a set from already-ranked matches.
    ///
    /// Callers are responsible for the ordering; `build` is the only
    /// entry point that ranks.
    #[cfg(test)]
    pub(crate) fn from_matches(matches: Vec<LineMatch>) -> Self {
        Self { matches }
    }

    /// Run `pattern` against every line and rank the survivors.
    ///
    /// Patterns shorter than the matcher's minimum length return an empty
    /// set without invoking the matcher at all. Survivors are sorted by
    /// descending score with an explicit two-operand comparator; the sort is
    /// stable, so equal scores keep their buffer order.
    pub fn build(matcher: &LineMatcher, pattern: &str, lines: &[Line]) -> Self {
        if pattern.chars().count() < matcher.min_pattern_length() {
            return Self::new();
        }

        let mut matches: Vec<LineMatch> = lines
            .iter()
            .filter_map(|line| matcher.match_line(pattern, line))
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            "search for '{}' matched {} of {} lines",
            pattern,
            matches.len(),
            lines.len()
        );

        Self { matches }
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the set holds no matches.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The ranked matches, best first.
    pub fn matches(&self) -> &[LineMatch] {
        &self.matches
    }

    /// Match at a rank position, if in bounds.
    pub fn get(&self, index: usize) -> Option<&LineMatch> {
        self.matches.get(index)
    }

    /// Buffer ranges of all matches, in rank order.
    ///
    /// Used for the batched select-all command.
    pub fn ranges(&self) -> Vec<LineRange> {
        self.matches.iter().map(|m| m.range).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
