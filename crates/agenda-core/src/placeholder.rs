//! Day placeholder generation.

use chrono::Days;

use crate::format::Formatter;
use crate::timeline::{day_start, DatePlaceholder, TimePoint};

/// Generate one day header per consecutive day starting at `start`.
///
/// `start` is floored to midnight. Each header is labelled by formatting its
/// day with `date_format` and `locale`. A `capacity` of zero yields nothing.
pub fn generate_placeholders<F: Formatter + ?Sized>(
    start: TimePoint,
    capacity: usize,
    date_format: &str,
    locale: &str,
    formatter: &F,
) -> Vec<DatePlaceholder> {
    let first = day_start(start);

    (0..capacity)
        .map_while(|offset| {
            let days = u64::try_from(offset).ok()?;
            first.checked_add_days(Days::new(days))
        })
        .map(|begin| DatePlaceholder {
            label: formatter.format(&begin, date_format, locale),
            begin,
        })
        .collect()
}
