//! Timeline vocabulary: time points, the display window, and line candidates.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{AgendaError, Result};

/// Wall-clock instant in the display timezone.
///
/// Calendar sources resolve every event into the caller's timezone before the
/// core runs, so the core sorts and floors naive local time only.
pub type TimePoint = NaiveDateTime;

/// Floor a time point to the start of its calendar day.
pub fn day_start(instant: TimePoint) -> TimePoint {
    instant.date().and_time(NaiveTime::MIN)
}

/// Whether `[begin, end)` intersects `[range_start, range_end)`.
///
/// Adjacent intervals do not intersect. A zero-length interval intersects when
/// its instant lies inside the range.
pub fn overlaps(
    begin: TimePoint,
    end: TimePoint,
    range_start: TimePoint,
    range_end: TimePoint,
) -> bool {
    if begin == end {
        return range_start <= begin && begin < range_end;
    }
    begin < range_end && end > range_start
}

/// The forward span of `capacity` consecutive days the agenda must fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineWindow {
    start: TimePoint,
    capacity: usize,
}

impl TimelineWindow {
    /// Build a window starting at the day containing `start`.
    ///
    /// # Errors
    /// Returns `AgendaError::InvalidCapacity` when `capacity` is zero, and
    /// `AgendaError::WindowOutOfRange` when the window's last day cannot be
    /// represented as a date.
    pub fn new(start: TimePoint, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(AgendaError::InvalidCapacity(capacity));
        }
        let start = day_start(start);
        let last_day = u64::try_from(capacity - 1)
            .ok()
            .and_then(|days| start.checked_add_days(Days::new(days)));
        if last_day.is_none() {
            return Err(AgendaError::WindowOutOfRange { start, capacity });
        }
        Ok(Self { start, capacity })
    }

    /// Build a window starting at midnight of `date`.
    pub fn starting_on(date: NaiveDate, capacity: usize) -> Result<Self> {
        Self::new(date.and_time(NaiveTime::MIN), capacity)
    }

    pub fn start(&self) -> TimePoint {
        self.start
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Exclusive end of the window: `start + capacity` days.
    ///
    /// A window whose last day is the last representable date ends at the
    /// latest representable time point instead.
    pub fn end(&self) -> TimePoint {
        u64::try_from(self.capacity)
            .ok()
            .and_then(|days| self.start.checked_add_days(Days::new(days)))
            .unwrap_or(NaiveDateTime::MAX)
    }

    /// Whether the interval `[begin, end)` intersects the window.
    pub fn intersects(&self, begin: TimePoint, end: TimePoint) -> bool {
        overlaps(begin, end, self.start, self.end())
    }
}

/// A generated day header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePlaceholder {
    /// Midnight of the day this header stands for.
    pub begin: TimePoint,
    pub label: String,
}

/// One concrete calendar event occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventEntry {
    pub begin: TimePoint,
    pub end: TimePoint,
    pub title: String,
    pub all_day: bool,
}

/// A row competing for a slot in the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineCandidate {
    Date(DatePlaceholder),
    Event(EventEntry),
}

impl LineCandidate {
    /// The sort key shared by both variants.
    pub fn begin(&self) -> TimePoint {
        match self {
            LineCandidate::Date(placeholder) => placeholder.begin,
            LineCandidate::Event(event) => event.begin,
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, LineCandidate::Date(_))
    }

    pub fn as_event(&self) -> Option<&EventEntry> {
        match self {
            LineCandidate::Event(event) => Some(event),
            LineCandidate::Date(_) => None,
        }
    }
}
