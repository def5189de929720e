//! Calendar events as supplied by calendar sources, and their normalization
//! into line candidates.

use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};
use crate::timeline::{overlaps, EventEntry, TimePoint, TimelineWindow};

/// One event occurrence, already resolved to concrete local begin/end times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub begin: TimePoint,
    pub end: TimePoint,
    #[serde(default)]
    pub all_day: bool,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, begin: TimePoint, end: TimePoint) -> Self {
        Self {
            title: title.into(),
            begin,
            end,
            all_day: false,
        }
    }

    /// An event covering whole days starting at midnight of `begin`.
    pub fn all_day(title: impl Into<String>, begin: TimePoint, end: TimePoint) -> Self {
        Self {
            all_day: true,
            ..Self::new(title, begin, end)
        }
    }

    /// # Errors
    /// Returns `AgendaError::InvalidEvent` when the event ends before it begins.
    pub fn validate(&self) -> Result<()> {
        if self.end < self.begin {
            return Err(AgendaError::InvalidEvent(format!(
                "'{}' ends ({}) before it begins ({})",
                self.title, self.end, self.begin
            )));
        }
        Ok(())
    }
}

impl From<CalendarEvent> for EventEntry {
    fn from(event: CalendarEvent) -> Self {
        EventEntry {
            begin: event.begin,
            end: event.end,
            title: event.title,
            all_day: event.all_day,
        }
    }
}

/// Reshape events into line candidates, keeping their order and data.
pub fn normalize_events<I>(events: I) -> Vec<EventEntry>
where
    I: IntoIterator<Item = CalendarEvent>,
{
    events.into_iter().map(EventEntry::from).collect()
}

/// Supplies the events that intersect a time range.
///
/// Implementations own fetching, parsing, recurrence expansion, and timezone
/// resolution. Instants they return are wall-clock times in `timezone`.
pub trait CalendarSource {
    /// Events whose `[begin, end)` interval intersects `[start, end)`.
    ///
    /// # Errors
    /// Returns `AgendaError::Source` when the underlying calendar cannot be read.
    fn fetch_events(
        &self,
        start: TimePoint,
        end: TimePoint,
        timezone: &str,
    ) -> Result<Vec<CalendarEvent>>;

    /// Convenience wrapper fetching exactly the span of `window`.
    fn fetch_window(&self, window: &TimelineWindow, timezone: &str) -> Result<Vec<CalendarEvent>> {
        self.fetch_events(window.start(), window.end(), timezone)
    }
}

/// An in-memory source over events that are already resolved.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    events: Vec<CalendarEvent>,
}

impl StaticSource {
    /// # Errors
    /// Returns `AgendaError::InvalidEvent` for the first event that ends before it begins.
    pub fn new(events: Vec<CalendarEvent>) -> Result<Self> {
        for event in &events {
            event.validate()?;
        }
        Ok(Self { events })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl CalendarSource for StaticSource {
    fn fetch_events(
        &self,
        start: TimePoint,
        end: TimePoint,
        _timezone: &str,
    ) -> Result<Vec<CalendarEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| overlaps(e.begin, e.end, start, end))
            .cloned()
            .collect())
    }
}
