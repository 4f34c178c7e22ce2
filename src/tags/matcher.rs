//! Nesting-aware pairing of begin and end tags.

use tracing::debug;

use super::scanner::{TagKind, TagRecord};

/// Find the nesting-correct partner of `target` within `tags`.
///
/// From a `Begin` the search runs strictly forward through the sequence;
/// from an `End` strictly backward. A nest counter, scoped to tags sharing
/// the target's name, skips one level for every unmatched same-kind tag
/// encountered on the way; tags with a different name are ignored entirely
/// and never touch the counter.
///
/// `None` means the sequence was exhausted without a partner, i.e. the
/// environment is unterminated or unbalanced. That is a normal outcome,
/// not an error.
pub fn match_tag<'a>(target: &TagRecord, tags: &'a [TagRecord]) -> Option<&'a TagRecord> {
    let position = tags
        .iter()
        .position(|tag| tag.brace_start == target.brace_start)?;

    let partner = match target.kind {
        TagKind::Begin => scan_for_partner(&target.name, TagKind::End, tags[position + 1..].iter()),
        TagKind::End => {
            scan_for_partner(&target.name, TagKind::Begin, tags[..position].iter().rev())
        }
    };

    match partner {
        Some(tag) => debug!(name = %target.name, partner = tag.brace_start, "partner tag found"),
        None => debug!(name = %target.name, "no partner tag; environment is unbalanced"),
    }
    partner
}

/// Walk `candidates` (already oriented away from the target) counting
/// nesting among same-named tags until a partner at level zero appears.
fn scan_for_partner<'a>(
    name: &str,
    partner_kind: TagKind,
    candidates: impl Iterator<Item = &'a TagRecord>,
) -> Option<&'a TagRecord> {
    let mut nest_level = 0usize;

    for tag in candidates {
        if tag.name != name {
            continue;
        }
        if tag.kind == partner_kind {
            if nest_level == 0 {
                return Some(tag);
            }
            nest_level -= 1;
        } else {
            nest_level += 1;
        }
    }

    None
}
