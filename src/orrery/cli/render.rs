use colored::Colorize;
use orrery::api::{CmdMessage, MessageLevel};
use orrery::index::DisplayBody;
use orrery::model::{Direction, Field};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "   ";
const ASC_MARKER: &str = "▲";
const DESC_MARKER: &str = "▼";

pub(super) fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info if verbose => println!("{}", message.content.dimmed()),
            MessageLevel::Info => {}
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_bodies(
    bodies: &[DisplayBody],
    precision: usize,
    sorted: Option<(Field, Direction)>,
) {
    print!("{}", render_bodies(bodies, precision, sorted));
}

/// Formats a number with at most `precision` decimals, trimming trailing zeros.
pub(super) fn format_number(value: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, value);
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn header(field: Field, sorted: Option<(Field, Direction)>) -> String {
    match sorted {
        Some((f, Direction::Ascending)) if f == field => format!("{} {}", field.label(), ASC_MARKER),
        Some((f, Direction::Descending)) if f == field => {
            format!("{} {}", field.label(), DESC_MARKER)
        }
        _ => field.label().to_string(),
    }
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

/// Renders the catalog as an aligned table. The sorted column header carries
/// an arrow for the direction just applied.
pub(super) fn render_bodies(
    bodies: &[DisplayBody],
    precision: usize,
    sorted: Option<(Field, Direction)>,
) -> String {
    if bodies.is_empty() {
        return "No bodies found.\n".to_string();
    }

    let indexes: Vec<String> = bodies.iter().map(|db| format!("{}.", db.index)).collect();
    let rows: Vec<[String; 4]> = bodies
        .iter()
        .map(|db| {
            [
                db.body.name.clone(),
                format_number(db.body.distance, precision),
                format_number(db.body.mass, precision),
                format_number(db.body.orbital_period, precision),
            ]
        })
        .collect();
    let headers: Vec<String> = Field::ALL.iter().map(|&f| header(f, sorted)).collect();

    let index_width = indexes.iter().map(|s| s.width()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..4)
        .map(|col| {
            rows.iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(headers[col].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header_line: Vec<String> = Field::ALL
        .iter()
        .enumerate()
        .map(|(col, field)| {
            if field.is_numeric() {
                pad_left(&headers[col], widths[col])
            } else {
                pad_right(&headers[col], widths[col])
            }
        })
        .collect();
    out.push_str(&format!(
        "{} {}\n",
        " ".repeat(index_width),
        header_line.join(COLUMN_GAP).bold()
    ));

    for (idx, row) in indexes.iter().zip(rows.iter()) {
        let cells: Vec<String> = Field::ALL
            .iter()
            .enumerate()
            .map(|(col, field)| {
                if field.is_numeric() {
                    pad_left(&row[col], widths[col])
                } else {
                    pad_right(&row[col], widths[col])
                }
            })
            .collect();
        out.push_str(&format!(
            "{} {}\n",
            pad_left(idx, index_width).yellow(),
            cells.join(COLUMN_GAP).trim_end()
        ));
    }
    out
}
