//! Plain text table rendition
use cell_survey::prelude::{Record, COLUMN_HEADERS};
use itertools::Itertools;
use std::io::Write;

/// Column separator
const SEPARATOR: &str = "  ";

/// Writes header + rows, each column padded to its widest value
pub fn render<W: Write>(writer: &mut W, rows: &[&Record]) -> std::io::Result<()> {
    let mut widths = COLUMN_HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, value) in widths.iter_mut().zip(row.fields()) {
            *width = (*width).max(value.chars().count());
        }
    }

    writeln!(writer, "{}", format_line(&COLUMN_HEADERS, &widths))?;
    for row in rows {
        writeln!(writer, "{}", format_line(&row.fields(), &widths))?;
    }
    Ok(())
}

fn format_line(values: &[&str; 13], widths: &[usize; 13]) -> String {
    values
        .iter()
        .zip(widths.iter())
        .map(|(value, width)| format!("{:<width$}", value, width = width))
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}
