//! Fuzzy line matching for linenav
//!
//! This module scores a user-typed pattern against single buffer lines and,
//! for lines that match, produces highlight spans for the panel to render.
//! A line matches when every pattern character occurs in it, in order, though
//! not necessarily contiguously. Scoring is delegated to the skim algorithm
//! from the `fuzzy-matcher` crate, which rewards tight packing, matches near
//! the start of the line, and contiguous runs of matched characters.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::config::SearchOptions;
use crate::host::{Line, LineRange};

// ─────────────────────────────────────────────────────────────────────────────
// Match Types
// ─────────────────────────────────────────────────────────────────────────────

/// A run of characters from a matched line.
///
/// Non-highlighted runs carry as many consecutive characters as possible;
/// highlighted spans always carry exactly one character, so the panel can
/// emphasize each matched character individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// The characters in this run
    pub text: String,
    /// Whether this run is a matched pattern character
    pub highlighted: bool,
}

impl HighlightSpan {
    fn context(text: String) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    fn matched(ch: char) -> Self {
        Self {
            text: ch.to_string(),
            highlighted: true,
        }
    }
}

/// A single matched line, scored and annotated for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Zero-based buffer row of the matched line
    pub line_index: usize,
    /// Ranking score; higher is better
    pub score: i64,
    /// The line's text split into highlighted/context runs
    pub spans: Vec<HighlightSpan>,
    /// Buffer region the match covers (the whole line)
    pub range: LineRange,
}

// ─────────────────────────────────────────────────────────────────────────────
// Line Matcher
// ─────────────────────────────────────────────────────────────────────────────

/// Scores patterns against lines using the skim fuzzy-matching algorithm.
///
/// Matching is a pure function of `(pattern, line)`; the matcher holds no
/// per-search state and may be reused across searches.
pub struct LineMatcher {
    matcher: SkimMatcherV2,
    case_sensitive: bool,
    min_pattern_length: usize,
}

impl Default for LineMatcher {
    fn default() -> Self {
        Self::new(&SearchOptions::default())
    }
}

impl LineMatcher {
    /// Create a matcher configured by the given options.
    pub fn new(options: &SearchOptions) -> Self {
        let matcher = if options.case_sensitive {
            SkimMatcherV2::default().respect_case()
        } else {
            SkimMatcherV2::default().ignore_case()
        };
        Self {
            matcher,
            case_sensitive: options.case_sensitive,
            min_pattern_length: options.min_pattern_length,
        }
    }

    /// Minimum pattern length before searches run.
    pub fn min_pattern_length(&self) -> usize {
        self.min_pattern_length
    }

    /// Match `pattern` against one line.
    ///
    /// Returns `None` unless every pattern character occurs in the line, in
    /// order. On a match, the score comes from the skim algorithm and the
    /// highlight spans from the greedy leftmost assignment of pattern
    /// characters to line characters, so the same `(pattern, line)` pair
    /// always produces the same spans.
    pub fn match_line(&self, pattern: &str, line: &Line) -> Option<LineMatch> {
        let score = self.matcher.fuzzy_match(&line.text, pattern)?;
        let indices = greedy_match_indices(pattern, &line.text, self.case_sensitive)?;
        let spans = build_spans(&line.text, &indices);
        let len = line.text.chars().count();

        Some(LineMatch {
            line_index: line.index,
            score,
            spans,
            range: LineRange::whole_line(line.index, len),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Greedy Highlight Assignment
// ─────────────────────────────────────────────────────────────────────────────

/// Assign each pattern character to the leftmost compatible line character.
///
/// Walks the line once, binding pattern characters in order. Returns the
/// character indices that were bound, or `None` if the pattern is not a
/// subsequence of the line.
fn greedy_match_indices(pattern: &str, text: &str, case_sensitive: bool) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    let mut pattern_chars = pattern.chars();
    let mut needle = pattern_chars.next();

    for (i, ch) in text.chars().enumerate() {
        let Some(want) = needle else {
            break;
        };
        if chars_match(ch, want, case_sensitive) {
            indices.push(i);
            needle = pattern_chars.next();
        }
    }

    // Leftover pattern characters mean the line doesn't contain the pattern
    if needle.is_none() {
        Some(indices)
    } else {
        None
    }
}

fn chars_match(a: char, b: char, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a == b || a.to_lowercase().eq(b.to_lowercase())
    }
}

/// Split `text` into spans around the highlighted character indices.
///
/// `indices` must be ascending character positions in `text`. Context runs
/// between highlights merge into single spans; each highlighted character
/// becomes its own span. Concatenating all span texts reproduces `text`
/// exactly.
fn build_spans(text: &str, indices: &[usize]) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();
    let mut context = String::new();
    let mut next_hit = 0;

    for (i, ch) in text.chars().enumerate() {
        if next_hit < indices.len() && indices[next_hit] == i {
            if !context.is_empty() {
                spans.push(HighlightSpan::context(std::mem::take(&mut context)));
            }
            spans.push(HighlightSpan::matched(ch));
            next_hit += 1;
        } else {
            context.push(ch);
        }
    }

    if !context.is_empty() {
        spans.push(HighlightSpan::context(context));
    }

    spans
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> LineMatcher {
        LineMatcher::default()
    }

    fn concat_spans(m: &LineMatch) -> String {
        m.spans.iter().map(|s| s.text.as_str()).collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Matching tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_match_in_order_subsequence() {
        let line = Line::new(0, "foobar");
        assert!(matcher().match_line("fbr", &line).is_some());
    }

    #[test]
    fn test_no_match_out_of_order() {
        let line = Line::new(0, "foobar");
        assert!(matcher().match_line("rf", &line).is_none());
    }

    #[test]
    fn test_no_match_missing_character() {
        let line = Line::new(0, "bar");
        assert!(matcher().match_line("fo", &line).is_none());
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let line = Line::new(0, "FooBar");
        assert!(matcher().match_line("foo", &line).is_none());
        assert!(matcher().match_line("FB", &line).is_some());
    }

    #[test]
    fn test_case_insensitive_option() {
        let options = SearchOptions {
            case_sensitive: false,
            ..SearchOptions::default()
        };
        let m = LineMatcher::new(&options);
        let line = Line::new(0, "FooBar");
        assert!(m.match_line("foo", &line).is_some());
    }

    #[test]
    fn test_empty_line_does_not_match() {
        let line = Line::new(0, "");
        assert!(matcher().match_line("a", &line).is_none());
    }

    #[test]
    fn test_range_covers_whole_line() {
        let line = Line::new(5, "hello world");
        let m = matcher().match_line("hw", &line).unwrap();
        assert_eq!(m.range, LineRange::whole_line(5, 11));
        assert_eq!(m.line_index, 5);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scoring tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_contiguous_prefix_outscores_dispersed() {
        let prefix = matcher()
            .match_line("abc", &Line::new(0, "abcdefgh"))
            .unwrap();
        let dispersed = matcher()
            .match_line("abc", &Line::new(1, "axxbxxcx"))
            .unwrap();
        assert!(prefix.score > dispersed.score);
    }

    #[test]
    fn test_tighter_packing_scores_higher() {
        let tight = matcher()
            .match_line("foo", &Line::new(0, "xfoox"))
            .unwrap();
        let loose = matcher()
            .match_line("foo", &Line::new(1, "xfxoxox"))
            .unwrap();
        assert!(tight.score > loose.score);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Highlight span tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_spans_reconstruct_line() {
        let line = Line::new(0, "the quick brown fox");
        let m = matcher().match_line("qbf", &line).unwrap();
        assert_eq!(concat_spans(&m), "the quick brown fox");
    }

    #[test]
    fn test_each_highlighted_character_is_own_span() {
        let line = Line::new(0, "foo");
        let m = matcher().match_line("foo", &line).unwrap();
        // Adjacent matched characters stay separate
        assert_eq!(m.spans.len(), 3);
        assert!(m.spans.iter().all(|s| s.highlighted));
        assert_eq!(concat_spans(&m), "foo");
    }

    #[test]
    fn test_context_runs_merge() {
        let line = Line::new(0, "xxfxxoxx");
        let m = matcher().match_line("fo", &line).unwrap();
        let expected = vec![
            HighlightSpan::context("xx".to_string()),
            HighlightSpan::matched('f'),
            HighlightSpan::context("xx".to_string()),
            HighlightSpan::matched('o'),
            HighlightSpan::context("xx".to_string()),
        ];
        assert_eq!(m.spans, expected);
    }

    #[test]
    fn test_greedy_assignment_binds_leftmost() {
        // Both 'a's could bind; the greedy walk must pick the first
        let indices = greedy_match_indices("ab", "axab", true).unwrap();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn test_greedy_assignment_is_deterministic() {
        let first = greedy_match_indices("abc", "aabbcc", true).unwrap();
        let second = greedy_match_indices("abc", "aabbcc", true).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 2, 4]);
    }

    #[test]
    fn test_greedy_assignment_rejects_non_subsequence() {
        assert!(greedy_match_indices("abc", "acb", true).is_none());
        assert!(greedy_match_indices("abc", "", true).is_none());
    }

    #[test]
    fn test_unicode_spans_reconstruct() {
        let line = Line::new(0, "héllo wörld");
        let m = matcher().match_line("hw", &line).unwrap();
        assert_eq!(concat_spans(&m), "héllo wörld");
        assert_eq!(m.range.end_col, 11);
    }
}
