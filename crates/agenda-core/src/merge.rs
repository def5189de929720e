//! Merge day headers and events into one chronological timeline, then cut it
//! down to the line budget.
//!
//! Placeholders are inserted before events and the sort is stable, so a day
//! header always precedes an event that begins at the same instant, and events
//! sharing a begin time keep the order the calendar source supplied.

use crate::timeline::{DatePlaceholder, EventEntry, LineCandidate};

/// Combine placeholders and events into a list sorted ascending by `begin`.
pub fn merge_timeline(
    placeholders: Vec<DatePlaceholder>,
    events: Vec<EventEntry>,
) -> Vec<LineCandidate> {
    let mut merged: Vec<LineCandidate> = Vec::with_capacity(placeholders.len() + events.len());
    merged.extend(placeholders.into_iter().map(LineCandidate::Date));
    merged.extend(events.into_iter().map(LineCandidate::Event));

    // `sort_by_key` is stable; the insertion order above is the tie-break.
    merged.sort_by_key(LineCandidate::begin);
    merged
}

/// The first `capacity` candidates of a merged timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub lines: Vec<LineCandidate>,
    /// Candidates that lost the competition for a row.
    pub dropped: usize,
}

/// Keep the earliest `capacity` candidates and discard the rest.
///
/// Earlier entries always win: a busy day pushes later events and later day
/// headers off the end of the agenda.
pub fn paginate(mut merged: Vec<LineCandidate>, capacity: usize) -> Page {
    let dropped = merged.len().saturating_sub(capacity);
    merged.truncate(capacity);
    Page {
        lines: merged,
        dropped,
    }
}
