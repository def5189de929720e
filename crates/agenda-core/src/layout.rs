//! The agenda pipeline: placeholders and events in, render lines out.
//!
//! ```text
//! generate_placeholders ─┐
//!                        ├─> merge_timeline -> paginate -> compute_column_widths -> emit_lines
//! normalize_events ──────┘
//! ```

use serde::Serialize;

use crate::columns::{compute_column_widths, ColumnWidths, LabelStyle};
use crate::emit::{emit_lines, RenderLine};
use crate::event::{normalize_events, CalendarEvent};
use crate::format::Formatter;
use crate::measure::TextMeasurer;
use crate::merge::{merge_timeline, paginate};
use crate::placeholder::generate_placeholders;
use crate::timeline::TimelineWindow;

/// Everything `layout` needs besides the window, the events, and the collaborators.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams<'a> {
    pub style: LabelStyle<'a>,
    /// Drawable width in pixels.
    pub total_width: u32,
    pub row_height: u32,
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaLayout {
    /// Exactly `window.capacity()` rows, in display order.
    pub lines: Vec<RenderLine>,
    pub columns: ColumnWidths,
    /// Candidates that did not fit in the window's capacity.
    pub dropped: usize,
}

/// Lay out an agenda of `window.capacity()` rows.
///
/// `events` must already be limited to the window; they are not re-filtered.
/// Rows are ordered by begin time, with a day header ahead of any event that
/// begins at the same instant and equal-time events kept in input order.
pub fn layout<F, M>(
    window: &TimelineWindow,
    events: Vec<CalendarEvent>,
    params: &LayoutParams<'_>,
    formatter: &F,
    measurer: &M,
) -> AgendaLayout
where
    F: Formatter + ?Sized,
    M: TextMeasurer + ?Sized,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "agenda_layout",
        start = %window.start(),
        capacity = window.capacity(),
        events = events.len(),
        width = params.total_width,
        row_height = params.row_height
    )
    .entered();

    #[cfg(feature = "tracing")]
    if events.is_empty() {
        tracing::info!("no events found");
    }

    let placeholders = generate_placeholders(
        window.start(),
        window.capacity(),
        params.style.date_format,
        params.style.locale,
        formatter,
    );
    let merged = merge_timeline(placeholders, normalize_events(events));
    let page = paginate(merged, window.capacity());

    let columns = compute_column_widths(
        &page.lines,
        params.style,
        params.total_width,
        formatter,
        measurer,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        date_width = columns.date,
        time_width = columns.time,
        event_width = ?columns.event,
        dropped = page.dropped,
        "columns sized"
    );

    let lines = emit_lines(&page.lines, params.style, params.row_height, formatter);

    #[cfg(feature = "tracing")]
    for line in &lines {
        tracing::trace!(row = line.row, y = line.y, kind = ?line.kind, "line emitted");
    }

    AgendaLayout {
        lines,
        columns,
        dropped: page.dropped,
    }
}
