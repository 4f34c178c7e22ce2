//! Environment tag scanning, pairing, and cursor-relative selection.
//!
//! Data flows one way: raw text -> [`scan_tags`] -> ordered tag records ->
//! [`match_tag`] / [`find_next`] / [`find_previous`] -> a [`Navigation`]
//! whose spans the host applies as selection regions.

mod matcher;
mod navigator;
mod scanner;

pub use matcher::match_tag;
pub use navigator::{find_next, find_previous, navigate, Direction, InputRangeError, Navigation};
pub use scanner::{scan_tags, TagKind, TagRecord};
