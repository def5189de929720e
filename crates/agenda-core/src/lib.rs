//! # agenda-core
//!
//! Fixed-capacity agenda layout for small e-paper panels.
//!
//! Given a window of N rows starting at a day, the core generates one header
//! per day, merges in already-resolved calendar events, keeps the earliest N
//! candidates, sizes the date/time/title columns from measured label widths,
//! and emits one render instruction per row. Fetching calendars, measuring
//! glyphs, and drawing pixels are left to collaborators behind the
//! [`CalendarSource`], [`TextMeasurer`], and [`Formatter`] traits.
//!
//! ## Quick start
//!
//! ```rust
//! use agenda_core::{layout, AgendaConfig, ArrowFormatter, CalendarEvent, MonospaceMeasurer, TimelineWindow};
//! use chrono::NaiveDate;
//!
//! let day = |d: u32, h: u32| NaiveDate::from_ymd_opt(2026, 3, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
//!
//! let config = AgendaConfig::default();
//! let window = TimelineWindow::new(day(16, 0), 3).unwrap();
//! let events = vec![CalendarEvent::new("Standup", day(17, 9), day(17, 10))];
//!
//! let agenda = layout(&window, events, &config.layout_params(), &ArrowFormatter, &MonospaceMeasurer::new(6));
//! let labels: Vec<_> = agenda
//!     .lines
//!     .iter()
//!     .map(|l| l.title_label.clone().or(l.date_label.clone()).unwrap())
//!     .collect();
//! assert_eq!(labels, ["Mon 16 Mar", "Tue 17 Mar", "• Standup"]);
//! ```
//!
//! ## Modules
//!
//! - [`timeline`] — time points, the display window, line candidates
//! - [`placeholder`] — one day header per day in the window
//! - [`event`] — calendar events, normalization, the calendar source seam
//! - [`merge`] — stable chronological merge and pagination
//! - [`columns`] — column width allocation
//! - [`emit`] — per-row render instructions
//! - [`layout`] — the whole pipeline
//! - [`format`] — arrow-style date/time formatting
//! - [`measure`] — text measurement seam
//! - [`config`] — module configuration
//! - [`error`] — Error types

pub mod columns;
pub mod config;
pub mod emit;
pub mod error;
pub mod event;
pub mod format;
pub mod layout;
pub mod measure;
pub mod merge;
pub mod placeholder;
pub mod timeline;

pub use columns::{compute_column_widths, ColumnWidths, LabelStyle};
pub use config::AgendaConfig;
pub use emit::{emit_lines, LineKind, RenderLine};
pub use error::AgendaError;
pub use event::{normalize_events, CalendarEvent, CalendarSource, StaticSource};
pub use format::{ArrowFormatter, Formatter};
pub use layout::{layout, AgendaLayout, LayoutParams};
pub use measure::{MonospaceMeasurer, TextMeasurer};
pub use merge::{merge_timeline, paginate};
pub use placeholder::generate_placeholders;
pub use timeline::{LineCandidate, TimePoint, TimelineWindow};
