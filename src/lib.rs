//! linenav - Fuzzy line search and navigation core
//!
//! A host-independent implementation of the fuzzy line search feature a
//! text editor embeds: type a short query, jump between the buffer lines
//! that fuzzily match it, cycle through ranked matches, and optionally
//! select all of them at once.
//!
//! The crate owns the pattern matching and ranking, the highlight-span
//! extraction, and the navigation/selection state machine. Everything
//! visual or editor-specific (panel rendering, key bindings, the buffer and
//! its selection) stays on the host side of the [`host::EditorHost`] trait.
//!
//! Control flow: a buffer or query change produces a fresh
//! [`results::ResultSet`], the [`state::SearchState`] machine updates
//! status and current index, and the [`selection`] projections tell the
//! host what its selection should now be.
//!
//! # Example
//!
//! ```ignore
//! let mut session = SearchSession::new(my_editor_host);
//! session.show();
//! session.set_query("foo");
//! session.next();       // cycle to the second-ranked match
//! session.select_all(); // select every matched line at once
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod matcher;
pub mod results;
pub mod selection;
pub mod session;
pub mod state;

pub use config::{load_options, save_options, save_options_silent, SearchOptions};
pub use error::{Error, Result, ResultExt};
pub use host::{EditorHost, Line, LineRange};
pub use matcher::{HighlightSpan, LineMatch, LineMatcher};
pub use results::ResultSet;
pub use session::SearchSession;
pub use state::{SearchEvent, SearchState, SearchStatus};
