//! End-to-end tests for the agenda layout pipeline.

use agenda_core::{
    layout, AgendaConfig, AgendaLayout, ArrowFormatter, CalendarEvent, CalendarSource, LineKind,
    MonospaceMeasurer, StaticSource, TimePoint, TimelineWindow,
};
use chrono::NaiveDate;

// ── Helpers ─────────────────────────────────────────────────────────────────

/// 2026-03-16 is a Monday.
fn at(day: u32, hour: u32, minute: u32) -> TimePoint {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn run(capacity: usize, events: Vec<CalendarEvent>) -> AgendaLayout {
    let config = AgendaConfig::default();
    let window = TimelineWindow::new(at(16, 0, 0), capacity).unwrap();
    layout(
        &window,
        events,
        &config.layout_params(),
        &ArrowFormatter,
        &MonospaceMeasurer::new(6),
    )
}

fn label(line: &agenda_core::RenderLine) -> String {
    match line.kind {
        LineKind::Date => line.date_label.clone().unwrap(),
        LineKind::Event => format!(
            "{} {}",
            line.time_label.clone().unwrap_or_else(|| "--:--".to_string()),
            line.title_label.clone().unwrap()
        ),
    }
}

// ── Capacity competition ────────────────────────────────────────────────────

#[test]
fn event_pushes_last_day_header_off_the_agenda() {
    let agenda = run(3, vec![CalendarEvent::new("Standup", at(17, 9, 0), at(17, 9, 15))]);

    let labels: Vec<String> = agenda.lines.iter().map(label).collect();
    assert_eq!(labels, ["Mon 16 Mar", "Tue 17 Mar", "09:00 • Standup"]);
    assert_eq!(agenda.dropped, 1);
}

#[test]
fn busy_first_day_consumes_whole_budget() {
    let events = (0..5)
        .map(|i| CalendarEvent::new(format!("Meeting {}", i), at(16, 9 + i, 0), at(16, 10 + i, 0)))
        .collect();
    let agenda = run(4, events);

    assert_eq!(agenda.lines.len(), 4);
    assert_eq!(agenda.lines[0].kind, LineKind::Date);
    assert!(agenda.lines[1..].iter().all(|l| l.kind == LineKind::Event));
    assert_eq!(agenda.lines[3].title_label.as_deref(), Some("• Meeting 2"));
    // Two surplus meetings plus three later day headers.
    assert_eq!(agenda.dropped, 5);
}

// ── Placeholder-only agendas ────────────────────────────────────────────────

#[test]
fn no_events_yields_only_day_headers() {
    let agenda = run(5, vec![]);

    let labels: Vec<String> = agenda.lines.iter().map(label).collect();
    assert_eq!(
        labels,
        ["Mon 16 Mar", "Tue 17 Mar", "Wed 18 Mar", "Thu 19 Mar", "Fri 20 Mar"]
    );
    for line in &agenda.lines {
        assert_eq!(line.kind, LineKind::Date);
        assert!(line.separator);
        assert_eq!(line.time_label, None);
        assert_eq!(line.title_label, None);
    }
    assert_eq!(agenda.dropped, 0);
}

#[test]
fn no_events_omits_time_and_event_columns() {
    let agenda = run(3, vec![]);
    // "Mon 16 Mar" is 10 glyphs of 6px: floor(60 * 1.2) = 72.
    assert_eq!(agenda.columns.date, 72);
    assert_eq!(agenda.columns.time, 0);
    assert_eq!(agenda.columns.event, None);
}

#[test]
fn large_capacity_still_fills_every_row() {
    let agenda = run(400, vec![]);
    assert_eq!(agenda.lines.len(), 400);
    assert_eq!(agenda.lines[399].y, 399 * 13);
}

// ── Ordering and tie-breaks ─────────────────────────────────────────────────

#[test]
fn event_at_midnight_sorts_after_its_day_header() {
    let agenda = run(3, vec![CalendarEvent::new("Deploy", at(17, 0, 0), at(17, 1, 0))]);

    assert_eq!(agenda.lines[1].kind, LineKind::Date);
    assert_eq!(agenda.lines[1].begin, at(17, 0, 0));
    assert_eq!(agenda.lines[2].kind, LineKind::Event);
    assert_eq!(agenda.lines[2].begin, at(17, 0, 0));
}

#[test]
fn equal_begin_events_keep_input_order() {
    let events = vec![
        CalendarEvent::new("Zulu", at(16, 10, 0), at(16, 11, 0)),
        CalendarEvent::new("Alpha", at(16, 10, 0), at(16, 10, 30)),
        CalendarEvent::new("Mike", at(16, 10, 0), at(16, 12, 0)),
    ];
    let agenda = run(4, events);

    let titles: Vec<&str> = agenda.lines[1..]
        .iter()
        .map(|l| l.title_label.as_deref().unwrap())
        .collect();
    assert_eq!(titles, ["• Zulu", "• Alpha", "• Mike"]);
}

#[test]
fn unsorted_events_are_interleaved_chronologically() {
    let events = vec![
        CalendarEvent::new("Dentist", at(17, 15, 30), at(17, 16, 0)),
        CalendarEvent::new("Breakfast", at(16, 8, 0), at(16, 9, 0)),
        CalendarEvent::new("Gym", at(17, 7, 0), at(17, 8, 0)),
    ];
    let agenda = run(6, events);

    let labels: Vec<String> = agenda.lines.iter().map(label).collect();
    assert_eq!(
        labels,
        [
            "Mon 16 Mar",
            "08:00 • Breakfast",
            "Tue 17 Mar",
            "07:00 • Gym",
            "15:30 • Dentist",
            "Wed 18 Mar",
        ]
    );
    for pair in agenda.lines.windows(2) {
        assert!(pair[0].begin <= pair[1].begin);
    }
}

#[test]
fn event_started_before_window_leads_the_agenda() {
    // Overnight event from the previous evening still intersects the window.
    let agenda = run(2, vec![CalendarEvent::new("Night shift", at(15, 22, 0), at(16, 6, 0))]);

    assert_eq!(agenda.lines[0].kind, LineKind::Event);
    assert_eq!(agenda.lines[0].time_label.as_deref(), Some("22:00"));
    assert_eq!(agenda.lines[1].date_label.as_deref(), Some("Mon 16 Mar"));
}

// ── All-day events ──────────────────────────────────────────────────────────

#[test]
fn all_day_event_has_no_time_label() {
    let agenda = run(
        3,
        vec![CalendarEvent::all_day("Holiday", at(17, 0, 0), at(18, 0, 0))],
    );

    let holiday = &agenda.lines[2];
    assert_eq!(holiday.kind, LineKind::Event);
    assert_eq!(holiday.time_label, None);
    assert_eq!(holiday.title_label.as_deref(), Some("• Holiday"));
    assert!(!holiday.separator);
}

// ── Column widths ───────────────────────────────────────────────────────────

#[test]
fn columns_are_sized_from_visible_labels() {
    let agenda = run(3, vec![CalendarEvent::new("Standup", at(17, 9, 0), at(17, 9, 15))]);

    // Date labels are 10 glyphs, "09:00" is 5 glyphs, 6px each, widened by 20%.
    assert_eq!(agenda.columns.date, 72);
    assert_eq!(agenda.columns.time, 36);
    assert_eq!(agenda.columns.event, Some(400 - 72 - 36));
    assert_eq!(agenda.columns.time_x(), 72);
    assert_eq!(agenda.columns.event_x(), 108);
}

#[test]
fn dropped_events_do_not_widen_the_time_column() {
    let events = vec![
        CalendarEvent::new("Visible", at(16, 9, 0), at(16, 10, 0)),
        CalendarEvent::new("Dropped", at(17, 14, 0), at(17, 15, 0)),
    ];
    let config = AgendaConfig {
        time_format: "h:mm A".to_string(),
        ..AgendaConfig::default()
    };
    let window = TimelineWindow::new(at(16, 0, 0), 2).unwrap();
    // "9:00 AM" is narrow; "2:00 PM" would widen the column if it were measured.
    let measurer = |text: &str| if text.contains('9') { 10u32 } else { 1000 };
    let agenda = layout(&window, events, &config.layout_params(), &ArrowFormatter, &measurer);

    assert_eq!(agenda.lines.len(), 2);
    assert_eq!(agenda.columns.time, 12);
}

#[test]
fn narrow_panel_saturates_event_width() {
    let config = AgendaConfig {
        width: 50,
        ..AgendaConfig::default()
    };
    let window = TimelineWindow::new(at(16, 0, 0), 2).unwrap();
    let agenda = layout(
        &window,
        vec![CalendarEvent::new("Standup", at(16, 9, 0), at(16, 10, 0))],
        &config.layout_params(),
        &ArrowFormatter,
        &MonospaceMeasurer::new(6),
    );
    assert_eq!(agenda.columns.event, Some(0));
}

// ── Locale and formats ──────────────────────────────────────────────────────

#[test]
fn labels_follow_configured_language_and_tokens() {
    let config = AgendaConfig {
        date_format: "dddd, D. MMMM".to_string(),
        time_format: "H:mm".to_string(),
        language: "de".to_string(),
        ..AgendaConfig::default()
    };
    let window = TimelineWindow::new(at(16, 0, 0), 2).unwrap();
    let agenda = layout(
        &window,
        vec![CalendarEvent::new("Frühstück", at(16, 8, 5), at(16, 9, 0))],
        &config.layout_params(),
        &ArrowFormatter,
        &MonospaceMeasurer::new(1),
    );

    assert_eq!(agenda.lines[0].date_label.as_deref(), Some("Montag, 16. März"));
    assert_eq!(agenda.lines[1].time_label.as_deref(), Some("8:05"));
}

// ── Calendar source integration ─────────────────────────────────────────────

#[test]
fn source_filtered_events_feed_the_layout() {
    let source = StaticSource::new(vec![
        CalendarEvent::new("Last week", at(9, 9, 0), at(9, 10, 0)),
        CalendarEvent::new("Standup", at(17, 9, 0), at(17, 9, 15)),
        CalendarEvent::new("Next month", at(30, 9, 0), at(30, 10, 0)),
    ])
    .unwrap();
    let window = TimelineWindow::new(at(16, 0, 0), 3).unwrap();
    let events = source.fetch_window(&window, "UTC").unwrap();
    assert_eq!(events.len(), 1);

    let config = AgendaConfig::default();
    let agenda = layout(
        &window,
        events,
        &config.layout_params(),
        &ArrowFormatter,
        &MonospaceMeasurer::new(6),
    );
    assert_eq!(agenda.lines[2].title_label.as_deref(), Some("• Standup"));
}
