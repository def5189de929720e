//! Final per-row render instructions.

use serde::Serialize;

use crate::columns::LabelStyle;
use crate::format::Formatter;
use crate::timeline::{LineCandidate, TimePoint};

/// Prefix drawn in front of every event title.
pub const TITLE_BULLET: &str = "• ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Date,
    Event,
}

/// One agenda row, ready for the renderer.
///
/// The renderer draws `date_label` at x = 0, `time_label` at
/// [`ColumnWidths::time_x`](crate::columns::ColumnWidths::time_x) and
/// `title_label` at [`ColumnWidths::event_x`](crate::columns::ColumnWidths::event_x),
/// clipping each to its column width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderLine {
    pub row: usize,
    /// Top edge of the row in pixels.
    pub y: u32,
    pub kind: LineKind,
    /// Sort key the row was ordered by.
    pub begin: TimePoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_label: Option<String>,
    /// Draw a full-width rule along the top of this row.
    pub separator: bool,
}

/// Map each paginated candidate to its render line; row index is list position.
pub fn emit_lines<F>(
    lines: &[LineCandidate],
    style: LabelStyle<'_>,
    row_height: u32,
    formatter: &F,
) -> Vec<RenderLine>
where
    F: Formatter + ?Sized,
{
    lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            let y = u32::try_from(row)
                .unwrap_or(u32::MAX)
                .saturating_mul(row_height);
            match line {
                LineCandidate::Date(placeholder) => RenderLine {
                    row,
                    y,
                    kind: LineKind::Date,
                    begin: placeholder.begin,
                    date_label: Some(placeholder.label.clone()),
                    time_label: None,
                    title_label: None,
                    separator: true,
                },
                LineCandidate::Event(event) => RenderLine {
                    row,
                    y,
                    kind: LineKind::Event,
                    begin: event.begin,
                    date_label: None,
                    time_label: (!event.all_day)
                        .then(|| formatter.format(&event.begin, style.time_format, style.locale)),
                    title_label: Some(format!("{}{}", TITLE_BULLET, event.title)),
                    separator: false,
                },
            }
        })
        .collect()
}
