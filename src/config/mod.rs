//! Configuration module for linenav
//!
//! This module handles the search core's tunable options, including
//! serialization/deserialization to/from JSON and persistent storage
//! to platform-specific directories.

mod options;
mod persistence;

pub use options::*;
pub use persistence::*;
