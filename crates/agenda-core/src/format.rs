//! Date/time label formatting.
//!
//! The core forwards format tokens verbatim to a [`Formatter`]; it never
//! interprets them. [`ArrowFormatter`] is the stock implementation and accepts
//! arrow-style tokens such as `"ddd D MMM"` or `"HH:mm"`.
//!
//! # Token syntax
//!
//! | token  | output                | token | output              |
//! |--------|-----------------------|-------|---------------------|
//! | `YYYY` | 2026                  | `HH`  | 09 (24h, padded)    |
//! | `YY`   | 26                    | `H`   | 9                   |
//! | `MMMM` | March                 | `hh`  | 09 (12h, padded)    |
//! | `MMM`  | Mar                   | `h`   | 9                   |
//! | `MM`   | 03                    | `mm`  | 05                  |
//! | `M`    | 3                     | `m`   | 5                   |
//! | `DDDD` | 075 (day of year)     | `ss`  | 07                  |
//! | `DDD`  | 75                    | `s`   | 7                   |
//! | `Do`   | 16th                  | `A`   | PM                  |
//! | `DD`   | 06                    | `a`   | pm                  |
//! | `D`    | 6                     |       |                     |
//! | `dddd` | Monday                |       |                     |
//! | `ddd`  | Mon                   |       |                     |
//! | `d`    | 1 (ISO weekday)       |       |                     |
//!
//! Text inside `[...]` is copied literally; any other character is literal too.

use std::fmt::Write;

use chrono::{Datelike, Locale, TimeZone, Utc};

use crate::timeline::TimePoint;

/// Renders an instant as a label using an opaque token and a locale name.
pub trait Formatter {
    fn format(&self, instant: &TimePoint, token: &str, locale: &str) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&TimePoint, &str, &str) -> String,
{
    fn format(&self, instant: &TimePoint, token: &str, locale: &str) -> String {
        self(instant, token, locale)
    }
}

/// Arrow-compatible formatter backed by chrono's localized strftime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowFormatter;

impl Formatter for ArrowFormatter {
    fn format(&self, instant: &TimePoint, token: &str, locale: &str) -> String {
        let strftime = to_strftime(token, instant);
        // The wall time is already local; attaching UTC only satisfies the
        // localized formatting API and is never printed.
        let zoned = Utc.from_utc_datetime(instant);
        let mut out = String::new();
        match write!(
            out,
            "{}",
            zoned.format_localized(&strftime, resolve_locale(locale))
        ) {
            Ok(()) => out,
            Err(_) => token.to_string(),
        }
    }
}

/// Tokens ordered longest first so greedy matching picks `MMMM` before `MMM`.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DDDD", "%j"),
    ("DDD", "%-j"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("d", "%u"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("m", "%-M"),
    ("ss", "%S"),
    ("s", "%-S"),
    ("A", "%p"),
    ("a", "%P"),
];

/// Translate an arrow token string into a chrono strftime string.
///
/// `Do` depends on the day itself, so it is resolved here rather than by chrono.
fn to_strftime(token: &str, instant: &TimePoint) -> String {
    let mut out = String::with_capacity(token.len() * 2);
    let mut rest = token;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(close) = rest.find(']') {
                push_literal(&mut out, &rest[1..close]);
                rest = &rest[close + 1..];
                continue;
            }
        }

        if rest.starts_with("Do") {
            let day = instant.day();
            out.push_str(&day.to_string());
            out.push_str(ordinal_suffix(day));
            rest = &rest[2..];
            continue;
        }

        if let Some((arrow, strftime)) = TOKENS.iter().find(|(arrow, _)| rest.starts_with(arrow)) {
            out.push_str(strftime);
            rest = &rest[arrow.len()..];
            continue;
        }

        let mut buf = [0u8; 4];
        push_literal(&mut out, c.encode_utf8(&mut buf));
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn push_literal(out: &mut String, literal: &str) {
    for c in literal.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Resolve a language name (`"de"`, `"en_GB"`, `"pt-BR"`) into a chrono locale.
///
/// Bare languages map to their primary region; unknown names fall back to POSIX.
pub fn resolve_locale(language: &str) -> Locale {
    let normalized = language.trim().replace('-', "_");
    if normalized.is_empty() {
        return Locale::POSIX;
    }
    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return locale;
    }

    let lang = normalized.split('_').next().unwrap_or_default().to_lowercase();
    let region = match lang.as_str() {
        "en" => "US",
        "zh" => "CN",
        "ja" => "JP",
        "ko" => "KR",
        "da" => "DK",
        "sv" => "SE",
        "nb" | "no" => "NO",
        "cs" => "CZ",
        "el" => "GR",
        "uk" => "UA",
        "et" => "EE",
        "he" => "IL",
        "hi" => "IN",
        _ => "",
    };
    let candidate = if region.is_empty() {
        format!("{}_{}", lang, lang.to_uppercase())
    } else {
        format!("{}_{}", lang, region)
    };

    Locale::try_from(candidate.as_str()).unwrap_or(Locale::POSIX)
}
