//! Session state for the annotation core.
//!
//! This module contains all state-related types including:
//! - Dataset items and their metadata passthrough
//! - Session phase and navigation direction
//! - Progress snapshots
//! - Dataset loading and working-copy construction

mod dataset;
mod types;

pub use dataset::*;
pub use types::*;
