//! Search session lifecycle for linenav
//!
//! This module wires the pieces together: one `SearchSession` per feature
//! instance owns the search state, the matcher, and the host handle, and is
//! the only place transitions are applied. After every transition the
//! session projects the new state onto the host's selection and notifies
//! subscribers (the rendering layer), so side effects never live inside the
//! transition logic itself.
//!
//! Events are processed one at a time in the order they arrive; a search
//! result is applied as one atomic replacement, and a result computed for a
//! query that is no longer current is discarded.

use log::{debug, info, warn};

use crate::config::SearchOptions;
use crate::host::EditorHost;
use crate::matcher::LineMatcher;
use crate::results::ResultSet;
use crate::selection;
use crate::state::{SearchEvent, SearchState, SearchStatus};

type Subscriber<E> = Box<dyn FnMut(&SearchState<E>)>;

// ─────────────────────────────────────────────────────────────────────────────
// Search Session
// ─────────────────────────────────────────────────────────────────────────────

/// One search feature instance bound to a host editor.
///
/// Created once when the feature first shows and reused for its whole
/// lifetime; hiding clears nothing destructively, so re-showing is cheap.
pub struct SearchSession<H: EditorHost> {
    host: H,
    state: SearchState<H::EditorId>,
    matcher: LineMatcher,
    /// The query most recently requested; results computed for an older
    /// query are stale and never applied
    pending_query: String,
    subscribers: Vec<Subscriber<H::EditorId>>,
}

impl<H: EditorHost> SearchSession<H> {
    /// Create a session with default options.
    pub fn new(host: H) -> Self {
        Self::with_options(host, SearchOptions::default())
    }

    /// Create a session with the given options.
    pub fn with_options(host: H, options: SearchOptions) -> Self {
        info!(
            "search session initialized (min pattern length {})",
            options.min_pattern_length
        );
        Self {
            host,
            state: SearchState::new(&options),
            matcher: LineMatcher::new(&options),
            pending_query: String::new(),
            subscribers: Vec::new(),
        }
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &SearchState<H::EditorId> {
        &self.state
    }

    /// The host collaborator.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Register a callback invoked with the new state after every
    /// transition.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&SearchState<H::EditorId>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply one event, then sync the host selection and notify
    /// subscribers.
    ///
    /// This is the sole mutation entry point; the convenience methods below
    /// all funnel through it.
    pub fn dispatch(&mut self, event: SearchEvent<H::EditorId>) {
        self.state.apply(event);
        self.sync_selection();
        self.notify();
    }

    /// Project the current match onto the host's selection.
    fn sync_selection(&mut self) {
        let Some(range) = selection::current_selection(&self.state) else {
            return;
        };
        let Some(editor) = self.state.editor().cloned() else {
            return;
        };
        if let Err(e) = self.host.set_selection(&editor, std::slice::from_ref(&range)) {
            warn!("failed to sync selection to host: {}", e);
        }
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Show / Hide / Focus
    // ─────────────────────────────────────────────────────────────────────────

    /// Open the search over the host's active editor.
    ///
    /// Without an active editor there is nothing to search, so the session
    /// stays (or becomes) hidden.
    pub fn show(&mut self) {
        match self.host.active_editor() {
            Some(editor) => {
                info!("opening fuzzy line search");
                self.pending_query.clear();
                self.dispatch(SearchEvent::Show { editor });
                self.host.focus_search_input();
            }
            None => {
                warn!("no active editor to search, staying hidden");
                self.hide();
            }
        }
    }

    /// Close the search and hand focus back to the editor.
    pub fn hide(&mut self) {
        let editor = self.state.editor().cloned();
        self.dispatch(SearchEvent::Hide);
        if let Some(editor) = editor {
            self.host.focus_editor(&editor);
        }
    }

    /// Re-focus the search input over the host's active editor and rerun
    /// the search against it.
    pub fn focus(&mut self) {
        if !self.state.visible() {
            return;
        }
        match self.host.active_editor() {
            Some(editor) => {
                self.dispatch(SearchEvent::Focus { editor });
                self.host.focus_search_input();
                self.buffer_changed();
            }
            None => {
                warn!("active editor disappeared, hiding search");
                self.hide();
            }
        }
    }

    /// Cycle the feature the way the user-facing command does: hidden →
    /// show, focused → hide, visible but blurred → focus.
    pub fn toggle(&mut self) {
        if !self.state.visible() {
            self.show();
        } else if self.state.focused() {
            self.hide();
        } else {
            self.focus();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Searching
    // ─────────────────────────────────────────────────────────────────────────

    /// Run a search for `pattern` against the target editor's buffer.
    ///
    /// Short patterns produce an empty result set without touching the
    /// buffer. A missing editor or a failed buffer read degrades to hide
    /// semantics rather than raising.
    pub fn set_query(&mut self, pattern: &str) {
        self.pending_query = pattern.to_string();

        if pattern.chars().count() < self.matcher.min_pattern_length() {
            self.apply_results(pattern.to_string(), ResultSet::new());
            return;
        }

        let Some(editor) = self.state.editor().cloned() else {
            warn!("search requested without a target editor, hiding");
            self.hide();
            return;
        };

        match self.host.lines(&editor) {
            Ok(lines) => {
                let results = ResultSet::build(&self.matcher, pattern, &lines);
                self.apply_results(pattern.to_string(), results);
            }
            Err(e) => {
                warn!("failed to read buffer, hiding search: {}", e);
                self.hide();
            }
        }
    }

    /// Apply a computed result set, unless the query has moved on.
    fn apply_results(&mut self, pattern: String, results: ResultSet) {
        if pattern != self.pending_query {
            debug!("discarding stale results for '{}'", pattern);
            return;
        }
        self.dispatch(SearchEvent::SetResults { pattern, results });
    }

    /// The target buffer's content changed; rerun the current query.
    pub fn buffer_changed(&mut self) {
        let pattern = self.pending_query.clone();
        self.set_query(&pattern);
    }

    /// The user switched to a different buffer while the search is open.
    ///
    /// Retargets the search at the host's new active editor, or hides when
    /// the new pane isn't a text editor.
    pub fn active_editor_changed(&mut self) {
        if !self.state.visible() {
            return;
        }
        match self.host.active_editor() {
            Some(editor) => {
                debug!("retargeting search to new active editor");
                self.dispatch(SearchEvent::SetEditor { editor });
                self.buffer_changed();
            }
            None => {
                warn!("new active pane is not a text editor, hiding search");
                self.hide();
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation & Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Advance to the next result, wrapping past the end.
    pub fn next(&mut self) {
        if self.state.status() != SearchStatus::Success {
            return;
        }
        self.dispatch(SearchEvent::Next);
        self.host.focus_search_input();
    }

    /// Retreat to the previous result, wrapping past the start.
    pub fn previous(&mut self) {
        if self.state.status() != SearchStatus::Success {
            return;
        }
        self.dispatch(SearchEvent::Previous);
        self.host.focus_search_input();
    }

    /// Select every matched line at once and hand focus to the editor.
    ///
    /// The host receives a single selection command carrying all ranges;
    /// with no results this is a no-op.
    pub fn select_all(&mut self) {
        let Some(ranges) = selection::select_all_ranges(&self.state) else {
            return;
        };
        let Some(editor) = self.state.editor().cloned() else {
            return;
        };
        info!("selecting all {} matched lines", ranges.len());
        if let Err(e) = self.host.set_selection(&editor, &ranges) {
            warn!("failed to select all matches: {}", e);
            return;
        }
        self.host.focus_editor(&editor);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
