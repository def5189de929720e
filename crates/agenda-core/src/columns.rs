//! Column width allocation for the date, time, and title columns.
//!
//! Widths are sized from the widest label actually shown, widened by 20% so
//! glyph overhang and kerning never clip a label.

use serde::Serialize;

use crate::format::Formatter;
use crate::measure::TextMeasurer;
use crate::timeline::LineCandidate;

/// Safety margin applied to the widest measured label, in percent.
pub const WIDENING_PERCENT: u32 = 120;

/// Horizontal pixel allocation for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ColumnWidths {
    pub date: u32,
    /// Zero when no event is visible; the time column is then omitted.
    pub time: u32,
    /// Space left for event titles. `None` when no event is visible.
    pub event: Option<u32>,
}

impl ColumnWidths {
    /// Left edge of the time column.
    pub fn time_x(&self) -> u32 {
        self.date
    }

    /// Left edge of the title column.
    pub fn event_x(&self) -> u32 {
        self.date.saturating_add(self.time)
    }

    pub fn has_events(&self) -> bool {
        self.event.is_some()
    }
}

/// Label formats and locale shared by width calculation and line emission.
#[derive(Debug, Clone, Copy)]
pub struct LabelStyle<'a> {
    pub date_format: &'a str,
    pub time_format: &'a str,
    pub locale: &'a str,
}

/// `floor(max × 1.2)` in integer arithmetic.
pub fn widen(max: u32) -> u32 {
    let widened = u64::from(max) * u64::from(WIDENING_PERCENT) / 100;
    u32::try_from(widened).unwrap_or(u32::MAX)
}

/// Derive column widths from the lines that survived pagination.
///
/// - date: widest placeholder label (0 if there are no placeholders);
/// - time: widest formatted event begin time, 0 if there are no events;
/// - event: whatever `total_width` leaves, only when events are present.
pub fn compute_column_widths<F, M>(
    lines: &[LineCandidate],
    style: LabelStyle<'_>,
    total_width: u32,
    formatter: &F,
    measurer: &M,
) -> ColumnWidths
where
    F: Formatter + ?Sized,
    M: TextMeasurer + ?Sized,
{
    let mut widest_date: Option<u32> = None;
    let mut widest_time: Option<u32> = None;

    for line in lines {
        match line {
            LineCandidate::Date(placeholder) => {
                let width = measurer.measure(&placeholder.label);
                widest_date = Some(widest_date.map_or(width, |w| w.max(width)));
            }
            LineCandidate::Event(event) => {
                let time = formatter.format(&event.begin, style.time_format, style.locale);
                let width = measurer.measure(&time);
                widest_time = Some(widest_time.map_or(width, |w| w.max(width)));
            }
        }
    }

    let date = widest_date.map(widen).unwrap_or(0);
    match widest_time {
        Some(widest) => {
            let time = widen(widest);
            ColumnWidths {
                date,
                time,
                event: Some(total_width.saturating_sub(date).saturating_sub(time)),
            }
        }
        None => ColumnWidths {
            date,
            time: 0,
            event: None,
        },
    }
}
