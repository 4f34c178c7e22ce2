//! Cursor-relative tag selection.
//!
//! Given a cursor offset and a direction, pick the nearest tag outside the
//! one the cursor currently resides in, then resolve its partner through
//! the matcher. The host applies the resulting spans as simultaneous
//! selection regions.

use std::ops::Range;

use thiserror::Error;
use tracing::debug;

use super::matcher::match_tag;
use super::scanner::{scan_tags, TagRecord};

/// Direction of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The supplied cursor coordinates lie outside the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRangeError {
    #[error("cursor offset {offset} is out of bounds for a document of {len} bytes")]
    OffsetOutOfBounds { offset: usize, len: usize },
    #[error("line {line} is out of bounds for a document of {line_count} lines")]
    LineOutOfBounds { line: u32, line_count: usize },
}

/// Result of one navigation: the tag the cursor should land on, plus its
/// partner when the surrounding document is balanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// The tag selected in the requested direction.
    pub target: TagRecord,
    /// The target's nesting-correct partner, absent for an unbalanced
    /// environment.
    pub partner: Option<TagRecord>,
}

impl Navigation {
    /// Content region of the target tag, applied as the primary selection.
    pub fn primary_span(&self) -> Range<usize> {
        self.target.content_span()
    }

    /// Content region of the partner tag, applied as a second simultaneous
    /// selection when present.
    pub fn secondary_span(&self) -> Option<Range<usize>> {
        self.partner.as_ref().map(TagRecord::content_span)
    }
}

/// The leftmost tag strictly after the cursor that the cursor is not
/// inside. `None` means the cursor is at or past the last tag.
pub fn find_next(cursor_offset: usize, tags: &[TagRecord]) -> Option<&TagRecord> {
    tags.iter()
        .find(|tag| !tag.contains(cursor_offset) && tag.brace_start > cursor_offset)
}

/// The rightmost tag strictly before the cursor that the cursor is not
/// inside. `None` means the cursor is at or before the first tag.
pub fn find_previous(cursor_offset: usize, tags: &[TagRecord]) -> Option<&TagRecord> {
    tags.iter()
        .rev()
        .find(|tag| !tag.contains(cursor_offset) && tag.brace_start < cursor_offset)
}

/// Re-scan `text` and select the nearest eligible tag in `direction`,
/// paired with its partner.
///
/// `Ok(None)` means no tag lies in the requested direction; the caller
/// performs no selection change. A target inside an unbalanced environment
/// still navigates, with `partner` absent. The text is scanned fresh on
/// every call, so the result always reflects the snapshot passed in.
pub fn navigate(
    direction: Direction,
    cursor_offset: usize,
    text: &str,
) -> Result<Option<Navigation>, InputRangeError> {
    if cursor_offset > text.len() {
        return Err(InputRangeError::OffsetOutOfBounds {
            offset: cursor_offset,
            len: text.len(),
        });
    }

    let tags = scan_tags(text);
    let target = match direction {
        Direction::Forward => find_next(cursor_offset, &tags),
        Direction::Backward => find_previous(cursor_offset, &tags),
    };

    let Some(target) = target else {
        debug!(?direction, cursor_offset, "no eligible tag in direction");
        return Ok(None);
    };
    debug!(
        ?direction,
        cursor_offset,
        target = target.brace_start,
        name = %target.name,
        "target tag selected"
    );

    let partner = match_tag(target, &tags).cloned();
    Ok(Some(Navigation {
        target: target.clone(),
        partner,
    }))
}
