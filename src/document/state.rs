//! Immutable document snapshots.

use crate::tags::{navigate, scan_tags, Direction, InputRangeError, Navigation, TagRecord};

use super::text::{LineIndex, Position};

/// One self-consistent text snapshot with its line index.
///
/// Tag records are never cached on the snapshot: every navigation re-scans
/// the text, so the result always reflects exactly this snapshot. A host
/// replaces the whole snapshot after an edit; any result computed from an
/// older snapshot is simply discarded.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    line_index: LineIndex,
    version: i32,
}

impl DocumentSnapshot {
    /// Create a snapshot of the given source text.
    pub fn new(source: String, version: i32) -> Self {
        Self {
            line_index: LineIndex::new(source),
            version,
        }
    }

    /// The snapshot's source text.
    pub fn source(&self) -> &str {
        self.line_index.source()
    }

    /// Host-supplied version of this snapshot.
    pub fn version(&self) -> i32 {
        self.version
    }

    /// The snapshot's line index, for host-side coordinate translation.
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Extract the snapshot's tag sequence. Runs a fresh scan on every call.
    pub fn scan(&self) -> Vec<TagRecord> {
        scan_tags(self.source())
    }

    /// Navigate from a byte offset.
    pub fn navigate(
        &self,
        direction: Direction,
        cursor_offset: usize,
    ) -> Result<Option<Navigation>, InputRangeError> {
        navigate(direction, cursor_offset, self.source())
    }

    /// Navigate from a line/column cursor position.
    pub fn navigate_at(
        &self,
        direction: Direction,
        position: Position,
    ) -> Result<Option<Navigation>, InputRangeError> {
        let offset = self.line_index.position_to_offset(position).ok_or(
            InputRangeError::LineOutOfBounds {
                line: position.line,
                line_count: self.line_index.line_count(),
            },
        )?;
        self.navigate(direction, offset)
    }
}
