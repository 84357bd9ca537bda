//! Search state management for linenav
//!
//! This module defines the central `SearchState` struct and the
//! reducer-style transitions over it. Every event maps to exactly one new
//! state; observers (selection sync, the panel) react to state changes but
//! never mutate fields themselves. The state is an explicitly constructed
//! container owned by the feature's session, not a process-wide singleton.

use log::debug;

use crate::config::SearchOptions;
use crate::matcher::LineMatch;
use crate::results::ResultSet;

// ─────────────────────────────────────────────────────────────────────────────
// Search Status
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome classification of the current search.
///
/// Derived from `(pattern, results)` on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search is running (pattern shorter than the minimum length)
    NoSearch,
    /// The pattern matched at least one line
    Success,
    /// The pattern matched nothing
    Failed,
}

// ─────────────────────────────────────────────────────────────────────────────
// Search Events
// ─────────────────────────────────────────────────────────────────────────────

/// The transitions the state machine accepts.
///
/// `E` is the host's opaque editor handle type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent<E> {
    /// Open the search over the given editor
    Show { editor: E },
    /// Close the search; state is retained but inert
    Hide,
    /// The user switched buffers while the search is open
    SetEditor { editor: E },
    /// Replace pattern and results atomically
    SetResults { pattern: String, results: ResultSet },
    /// Advance to the next result, wrapping past the end
    Next,
    /// Retreat to the previous result, wrapping past the start
    Previous,
    /// Move focus back to the search input over the given editor
    Focus { editor: E },
}

// ─────────────────────────────────────────────────────────────────────────────
// Search State
// ─────────────────────────────────────────────────────────────────────────────

/// Complete control state of the search feature.
///
/// `current_index` is only meaningful while `status()` is
/// [`SearchStatus::Success`]; the transitions keep it inside
/// `0..results.len()` by construction (replacing results resets it to 0,
/// navigation is modular).
#[derive(Debug, Clone)]
pub struct SearchState<E> {
    visible: bool,
    pattern: String,
    results: ResultSet,
    current_index: usize,
    focused: bool,
    editor: Option<E>,
    min_pattern_length: usize,
}

impl<E> Default for SearchState<E> {
    fn default() -> Self {
        Self::new(&SearchOptions::default())
    }
}

impl<E> SearchState<E> {
    /// Create a cleared state configured by the given options.
    pub fn new(options: &SearchOptions) -> Self {
        Self {
            visible: false,
            pattern: String::new(),
            results: ResultSet::new(),
            current_index: 0,
            focused: false,
            editor: None,
            min_pattern_length: options.min_pattern_length,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the search panel is open.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The user-typed query string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The ranked matches for the current pattern.
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Rank position of the current result.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether the search input holds UI focus.
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Handle of the editor the search targets, if any.
    pub fn editor(&self) -> Option<&E> {
        self.editor.as_ref()
    }

    /// Derive the search status from the pattern and results.
    pub fn status(&self) -> SearchStatus {
        if self.pattern.chars().count() < self.min_pattern_length {
            SearchStatus::NoSearch
        } else if self.results.is_empty() {
            SearchStatus::Failed
        } else {
            SearchStatus::Success
        }
    }

    /// The currently selected match, if the search succeeded.
    pub fn current_match(&self) -> Option<&LineMatch> {
        match self.status() {
            SearchStatus::Success => self.results.get(self.current_index),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply one event to the state.
    ///
    /// Events whose preconditions don't hold (navigating without a
    /// successful search, retargeting a hidden panel) are defined no-ops,
    /// not errors.
    pub fn apply(&mut self, event: SearchEvent<E>) {
        match event {
            SearchEvent::Show { editor } => {
                debug!("search shown");
                self.visible = true;
                self.editor = Some(editor);
                self.pattern.clear();
                self.results = ResultSet::new();
                self.current_index = 0;
                self.focused = true;
            }
            SearchEvent::Hide => {
                debug!("search hidden");
                self.visible = false;
                self.focused = false;
            }
            SearchEvent::SetEditor { editor } => {
                if self.visible {
                    self.editor = Some(editor);
                }
            }
            SearchEvent::SetResults { pattern, results } => {
                self.pattern = pattern;
                self.results = results;
                self.current_index = 0;
            }
            SearchEvent::Next => {
                if self.status() == SearchStatus::Success {
                    self.current_index = (self.current_index + 1) % self.results.len();
                }
            }
            SearchEvent::Previous => {
                if self.status() == SearchStatus::Success {
                    let len = self.results.len();
                    self.current_index = (self.current_index + len - 1) % len;
                }
            }
            SearchEvent::Focus { editor } => {
                if self.visible {
                    self.editor = Some(editor);
                    self.focused = true;
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
