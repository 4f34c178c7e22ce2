//! Document snapshots and text utilities.
//!
//! This module provides:
//! - `LineIndex` and `Position` for byte offset <-> line/column conversion
//! - `DocumentSnapshot` for one immutable text + its coordinate space

mod state;
mod text;

pub use state::DocumentSnapshot;
pub use text::{LineIndex, Position};
