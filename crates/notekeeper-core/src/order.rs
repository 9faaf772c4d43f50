//! Ordering for note listings: pinned notes first, then by creation time.

use std::cmp::Ordering;

use crate::types::Note;

/// Comparator used by every listing.
fn listing_order(a: &Note, b: &Note) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then_with(|| a.created_on.cmp(&b.created_on))
}

/// Sort notes pinned-first, oldest-first within each group.
pub fn sort_pinned_first(notes: &mut [Note]) {
    notes.sort_by(listing_order);
}

/// Whether no unpinned note precedes a pinned one.
pub fn is_pinned_first(notes: &[Note]) -> bool {
    notes
        .iter()
        .skip_while(|n| n.is_pinned)
        .all(|n| !n.is_pinned)
}
