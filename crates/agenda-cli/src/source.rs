//! Event file parsing and timezone resolution for the JSON calendar source.
//!
//! Event files are JSON arrays of `{title, begin, end?, all_day?}` objects.
//! Instants may be RFC 3339 (converted into the display timezone), naive local
//! time (taken as already local), or a bare date (an all-day event).

use agenda_core::{AgendaError, CalendarEvent, TimePoint};
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EventInput {
    title: String,
    begin: String,
    #[serde(default)]
    end: Option<String>,
    #[serde(default)]
    all_day: bool,
}

/// Resolve an IANA timezone name, defaulting to UTC.
pub fn resolve_timezone(name: Option<&str>) -> Result<Tz> {
    match name {
        None => Ok(Tz::UTC),
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| AgendaError::InvalidTimezone(name.to_string()).into()),
    }
}

/// Parse an instant into wall-clock time in `tz`.
///
/// Returns `true` alongside the time point when the input was a bare date.
fn parse_instant(s: &str, tz: Tz) -> Result<(TimePoint, bool)> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok((dt.with_timezone(&tz).naive_local(), false));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
            return Ok((naive, false));
        }
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid datetime '{}'", s))?;
    Ok((date.and_time(NaiveTime::MIN), true))
}

/// Parse a JSON event document. Blank input means no events.
pub fn parse_events(json: &str, tz: Tz) -> Result<Vec<CalendarEvent>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let inputs: Vec<EventInput> =
        serde_json::from_str(json).context("Invalid events JSON")?;

    inputs
        .into_iter()
        .map(|input| -> Result<CalendarEvent> {
            let (begin, date_only) = parse_instant(&input.begin, tz)
                .with_context(|| format!("Invalid begin of '{}'", input.title))?;
            let all_day = input.all_day || date_only;
            let end = match input.end.as_deref() {
                Some(end) => {
                    parse_instant(end, tz)
                        .with_context(|| format!("Invalid end of '{}'", input.title))?
                        .0
                }
                None if all_day => begin + Duration::days(1),
                None => begin,
            };
            let event = CalendarEvent {
                title: input.title,
                begin,
                end,
                all_day,
            };
            event.validate()?;
            Ok(event)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(d: u32, h: u32) -> TimePoint {
        NaiveDate::from_ymd_opt(2026, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn rfc3339_is_converted_into_display_timezone() {
        let tz = resolve_timezone(Some("Europe/Berlin")).unwrap();
        let events = parse_events(
            r#"[{"title":"Call","begin":"2026-03-17T08:00:00Z","end":"2026-03-17T09:00:00Z"}]"#,
            tz,
        )
        .unwrap();
        // CET is UTC+1 in March before the DST switch.
        assert_eq!(events[0].begin, at(17, 9));
        assert_eq!(events[0].end, at(17, 10));
    }

    #[test]
    fn naive_times_are_taken_as_local() {
        let events = parse_events(
            r#"[{"title":"Standup","begin":"2026-03-17T09:00:00"}]"#,
            Tz::UTC,
        )
        .unwrap();
        assert_eq!(events[0].begin, at(17, 9));
        assert_eq!(events[0].end, at(17, 9));
        assert!(!events[0].all_day);
    }

    #[test]
    fn bare_date_is_all_day() {
        let events =
            parse_events(r#"[{"title":"Holiday","begin":"2026-03-17"}]"#, Tz::UTC).unwrap();
        assert!(events[0].all_day);
        assert_eq!(events[0].begin, at(17, 0));
        assert_eq!(events[0].end, at(18, 0));
    }

    #[test]
    fn blank_input_is_no_events() {
        assert!(parse_events("  \n", Tz::UTC).unwrap().is_empty());
        assert!(parse_events("[]", Tz::UTC).unwrap().is_empty());
    }

    #[test]
    fn inverted_event_is_rejected() {
        let err = parse_events(
            r#"[{"title":"Broken","begin":"2026-03-17T10:00:00","end":"2026-03-17T09:00:00"}]"#,
            Tz::UTC,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        assert!(resolve_timezone(Some("Mars/Olympus")).is_err());
        assert_eq!(resolve_timezone(None).unwrap(), Tz::UTC);
    }
}
