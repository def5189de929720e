//! Plain-text preview of an agenda layout.
//!
//! Meant for layouts computed with a one-pixel-per-character measurer: every
//! pixel offset and width is read as a character column.

use agenda_core::{AgendaLayout, LineKind};

/// Render the layout as text, one output line per row plus a `-` rule above
/// every day header.
pub fn render_text(agenda: &AgendaLayout, total_width: u32) -> String {
    let columns = &agenda.columns;
    let total = total_width as usize;
    let mut out = String::new();

    for line in &agenda.lines {
        if line.separator {
            out.push_str(&"-".repeat(total));
            out.push('\n');
        }

        let mut row = String::new();
        match line.kind {
            LineKind::Date => {
                let label = line.date_label.as_deref().unwrap_or_default();
                row.push_str(&clip(label, columns.date as usize));
            }
            LineKind::Event => {
                pad_to(&mut row, columns.time_x() as usize);
                if let Some(time) = line.time_label.as_deref() {
                    row.push_str(&clip(time, columns.time as usize));
                }
                pad_to(&mut row, columns.event_x() as usize);
                let title = line.title_label.as_deref().unwrap_or_default();
                row.push_str(&clip(title, columns.event.unwrap_or(0) as usize));
            }
        }

        out.push_str(clip(&row, total).trim_end());
        out.push('\n');
    }

    out
}

fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn pad_to(row: &mut String, column: usize) {
    let len = row.chars().count();
    if len < column {
        row.push_str(&" ".repeat(column - len));
    }
}
