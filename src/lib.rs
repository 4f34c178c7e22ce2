//! Environment tag navigation core for LaTeX-style documents.
//!
//! texnav locates `\begin{name}` / `\end{name}` tags in a text snapshot,
//! pairs them under nesting (including repeated same-named environments),
//! and selects the nearest tag in a direction relative to a cursor offset.
//! The host editor owns selections, key capture, and text edits: it calls
//! in with a self-consistent text + cursor pair and applies the returned
//! spans as selection regions.

mod document;
mod session;
mod settings;
mod tags;

pub use document::{DocumentSnapshot, LineIndex, Position};
pub use session::{NavigationSession, SessionStatus};
pub use settings::{discover_settings, load_settings, NavigationSettings, Settings};
pub use tags::{
    find_next, find_previous, match_tag, navigate, scan_tags, Direction, InputRangeError,
    Navigation, TagKind, TagRecord,
};
