//! Tag extraction from raw document text.
//!
//! This module provides regex-based extraction of `\begin{name}` and
//! `\end{name}` environment tags into an ordered sequence of records.
//! The sequence order is load-bearing: matching and navigation both work
//! on sequence position, not just byte offsets.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Whether a tag opens or closes an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Begin,
    End,
}

/// One `\begin{name}` or `\end{name}` occurrence in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// Byte offset of the tag's opening brace. This is the tag's canonical
    /// position; scanning yields records in ascending `brace_start` order.
    pub brace_start: usize,

    /// Whether this tag opens or closes its environment.
    pub kind: TagKind,

    /// The environment name between the braces. Compared by exact string
    /// equality, never normalized (case- and whitespace-sensitive).
    pub name: String,

    /// Byte offset of the tag's closing brace.
    pub brace_end: usize,
}

impl TagRecord {
    /// The content region between the braces, braces excluded.
    pub fn content_span(&self) -> Range<usize> {
        self.brace_start + 1..self.brace_end
    }

    /// Whether the cursor sits inside this tag's braces.
    ///
    /// The opening brace itself counts as outside (`offset == brace_start`
    /// is not inside); the closing brace counts as inside.
    pub fn contains(&self, offset: usize) -> bool {
        self.brace_start < offset && offset <= self.brace_end
    }
}

/// Pattern for environment tags. The name capture stops at the first `}`,
/// so names containing a literal brace are not supported; a tag with no
/// closing brace before end of text never matches and produces no record.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(begin|end)\{([^}]*)\}").unwrap());

/// Extract every environment tag from `source`, in document order.
///
/// Scanning is pure and side-effect-free: identical input yields a
/// structurally identical sequence, and nothing is cached between calls.
pub fn scan_tags(source: &str) -> Vec<TagRecord> {
    TAG_PATTERN
        .captures_iter(source)
        .filter_map(|caps| {
            let keyword = caps.get(1)?;
            let name = caps.get(2)?;
            Some(TagRecord {
                brace_start: name.start() - 1,
                kind: if keyword.as_str() == "begin" {
                    TagKind::Begin
                } else {
                    TagKind::End
                },
                name: name.as_str().to_string(),
                brace_end: name.end(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_begin_and_end_in_document_order() {
        let tags = scan_tags(r"\begin{itemize}\item x\end{itemize}");
        assert_eq!(tags.len(), 2);

        assert_eq!(tags[0].kind, TagKind::Begin);
        assert_eq!(tags[0].name, "itemize");
        assert_eq!(tags[0].brace_start, 6);
        assert_eq!(tags[0].brace_end, 14);

        assert_eq!(tags[1].kind, TagKind::End);
        assert_eq!(tags[1].name, "itemize");
        assert_eq!(tags[1].brace_start, 26);
        assert_eq!(tags[1].brace_end, 34);
    }

    #[test]
    fn record_offsets_round_trip_to_braced_name() {
        let source = r"text \begin{a}\begin{long name}\end{a} more \end{long name}";
        for tag in scan_tags(source) {
            let slice = &source[tag.brace_start..=tag.brace_end];
            assert_eq!(slice, format!("{{{}}}", tag.name));
            assert!(tag.brace_start < tag.brace_end);
        }
    }

    #[test]
    fn content_span_excludes_braces() {
        let source = r"\begin{proof}";
        let tags = scan_tags(source);
        assert_eq!(tags[0].content_span(), 7..12);
        assert_eq!(&source[tags[0].content_span()], "proof");
    }

    #[test]
    fn malformed_tag_without_closing_brace_is_dropped() {
        let tags = scan_tags(r"\begin{ok}\begin{broken");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "ok");
    }

    #[test]
    fn names_are_never_normalized() {
        let tags = scan_tags(r"\begin{Figure}\end{figure}\end{ figure }");
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Figure", "figure", " figure "]);
    }

    #[test]
    fn empty_name_is_a_valid_record() {
        let tags = scan_tags(r"\begin{}");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "");
        assert_eq!(tags[0].content_span(), 7..7);
    }

    #[test]
    fn scanning_is_idempotent() {
        let source = r"\begin{a}\end{b}\begin{c";
        assert_eq!(scan_tags(source), scan_tags(source));
    }

    #[test]
    fn contains_is_open_at_start_closed_at_end() {
        let tags = scan_tags(r"\begin{a}");
        let tag = &tags[0];
        assert!(!tag.contains(tag.brace_start));
        assert!(tag.contains(tag.brace_start + 1));
        assert!(tag.contains(tag.brace_end));
        assert!(!tag.contains(tag.brace_end + 1));
    }
}
