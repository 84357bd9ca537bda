//! Selection and label projections for linenav
//!
//! Pure functions from search state to "what the host should show": the
//! selection the editor buffer should carry, and the header/counter strings
//! the panel renders. Keeping these out of the transition logic keeps the
//! state machine host-independent; the session invokes them after every
//! state change.

use crate::host::LineRange;
use crate::state::{SearchState, SearchStatus};

// ─────────────────────────────────────────────────────────────────────────────
// Selection Projections
// ─────────────────────────────────────────────────────────────────────────────

/// The range the editor's selection should cover, if any.
///
/// Only a successful search selects anything; otherwise the host's
/// selection is left alone.
pub fn current_selection<E>(state: &SearchState<E>) -> Option<LineRange> {
    state.current_match().map(|m| m.range)
}

/// Every match range, for the batched select-all command.
///
/// Returns `None` when there is nothing to select, so callers issue either
/// one command covering all ranges or none at all.
pub fn select_all_ranges<E>(state: &SearchState<E>) -> Option<Vec<LineRange>> {
    if state.results().is_empty() {
        None
    } else {
        Some(state.results().ranges())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Panel Label Projections
// ─────────────────────────────────────────────────────────────────────────────

/// Idle panel title shown before a search runs.
const IDLE_HEADER: &str = "Fuzzy line search";

/// Header line for the panel.
pub fn header<E>(state: &SearchState<E>) -> String {
    match state.status() {
        SearchStatus::NoSearch => IDLE_HEADER.to_string(),
        _ => format!(
            "{} results for '{}'",
            state.results().len(),
            state.pattern()
        ),
    }
}

/// Position counter shown next to the search input.
pub fn position_label<E>(state: &SearchState<E>) -> String {
    match state.status() {
        SearchStatus::NoSearch => String::new(),
        SearchStatus::Success => {
            format!("{} of {}", state.current_index() + 1, state.results().len())
        }
        SearchStatus::Failed => "No results".to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
