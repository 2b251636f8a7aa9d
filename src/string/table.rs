//! Box-drawing table renderer
//!
//! Renders ordered key/value rows as a `console.table`-style box. Cells may
//! carry ANSI CLI coloring; widths are computed on the color-stripped text so
//! colored and plain cells align.

use crate::string::{normalize, validate, NormalizeOptions};

/// One table row: an ordered sequence of (column, value) pairs.
///
/// The first row defines the column set; every following row must carry the
/// same columns with non-empty values.
pub type Row = Vec<(String, String)>;

fn visible_len(value: &str) -> usize {
    normalize(
        value,
        &NormalizeOptions {
            strip_cli_colors: true,
            ..Default::default()
        },
    )
    .chars()
    .count()
}

/// Pads the trimmed value to the column width, compensating for invisible
/// escape characters so colored cells line up with plain ones.
fn format_cell(value: &str, width: usize) -> String {
    let trimmed = value.trim();
    let diff = trimmed.chars().count().saturating_sub(visible_len(value));
    let target = width + diff;
    let mut cell = trimmed.to_string();
    let mut len = trimmed.chars().count();
    while len < target {
        cell.push(' ');
        len += 1;
    }
    cell
}

fn separator(widths: &[usize], left: char, middle: char, right: char) -> String {
    let bars: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", bars.join(&middle.to_string()))
}

fn framed(cells: &[String]) -> String {
    format!("│ {} │", cells.join(" │ "))
}

/// Formats ordered key/value rows as a box-drawing table string.
///
/// Column widths are the maximum of the header length and the longest
/// color-stripped cell plus one. An empty input yields
/// `"No data to display."`; a row whose columns or values do not line up
/// with the header row yields a textual error description rather than an
/// `Err` (the table is a display helper, so the failure is itself display
/// text).
///
/// # Example
///
/// ```rust
/// use zaka_utils::string::table;
///
/// let rows = vec![
///     vec![("Name".to_string(), "Zaka".to_string()), ("Age".to_string(), "50".to_string())],
///     vec![("Name".to_string(), "Someone".to_string()), ("Age".to_string(), "25".to_string())],
/// ];
/// let rendered = table(&rows);
/// assert!(rendered.starts_with("┌"));
/// assert!(rendered.contains("│ Zaka     │ 50  │"));
/// ```
pub fn table(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "No data to display.".to_string();
    }

    let headers: Vec<&str> = rows[0].iter().map(|(key, _)| key.as_str()).collect();

    let cell_for = |row: &Row, header: &str| -> Option<String> {
        row.iter()
            .find(|(key, _)| key == header)
            .map(|(_, value)| value.clone())
    };

    let widths: Vec<usize> = headers
        .iter()
        .map(|header| {
            let longest_cell = rows
                .iter()
                .map(|row| visible_len(&cell_for(row, header).unwrap_or_default()) + 1)
                .max()
                .unwrap_or(0);
            header.chars().count().max(longest_cell)
        })
        .collect();

    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format_cell(header, *width))
        .collect();

    let mut data_rows: Vec<String> = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells: Vec<String> = Vec::with_capacity(headers.len());
        for (header, width) in headers.iter().zip(&widths) {
            match cell_for(row, header) {
                Some(value) if validate(&value) => cells.push(format_cell(&value, *width)),
                _ => {
                    let entries: Vec<&str> = row
                        .iter()
                        .flat_map(|(key, value)| [key.as_str(), value.as_str()])
                        .collect();
                    return format!(
                        "Error: Unable to represent data. Row {} is not consistent with the rest of the table.",
                        entries.join(",")
                    );
                }
            }
        }
        data_rows.push(framed(&cells));
    }

    let mut lines = vec![
        separator(&widths, '┌', '┬', '┐'),
        framed(&header_cells),
        separator(&widths, '├', '┼', '┤'),
    ];
    lines.extend(data_rows);
    lines.push(separator(&widths, '└', '┴', '┘'));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_table_layout() {
        let rows = vec![
            row(&[("Name", "Zaka"), ("Age", "50"), ("Country", "Spain")]),
            row(&[("Name", "Someone"), ("Age", "25"), ("Country", "Poland")]),
        ];
        let expected = "\
┌──────────┬─────┬─────────┐
│ Name     │ Age │ Country │
├──────────┼─────┼─────────┤
│ Zaka     │ 50  │ Spain   │
│ Someone  │ 25  │ Poland  │
└──────────┴─────┴─────────┘";
        assert_eq!(table(&rows), expected);
    }

    #[test]
    fn test_table_inconsistent_row() {
        let rows = vec![
            row(&[("Key", "Value"), ("Key2", "Value 2")]),
            row(&[("Key", "Value3"), ("Key2", "Value4")]),
            row(&[("Key", "Value5"), ("Key3", "Value6")]),
        ];
        assert_eq!(
            table(&rows),
            "Error: Unable to represent data. Row Key,Value5,Key3,Value6 is not consistent with the rest of the table."
        );
    }

    #[test]
    fn test_table_empty() {
        assert_eq!(table(&[]), "No data to display.");
    }

    #[test]
    fn test_table_colored_cells_align_with_plain() {
        use crate::string::strip_cli_colors;
        use colored::Colorize;

        colored::control::set_override(true);
        let plain = vec![
            row(&[("Name", "Zaka"), ("Age", "50")]),
            row(&[("Name", "Someone"), ("Age", "25")]),
        ];
        let colored_rows = vec![
            row(&[("Name", &format!("{}", "Zaka".green())), ("Age", "50")]),
            row(&[("Name", "Someone"), ("Age", "25")]),
        ];
        assert_eq!(strip_cli_colors(&table(&colored_rows)), table(&plain));
    }
}
