//! Plain-text rendering of a table for console output

use std::borrow::Cow;

use listmaker_core::Table;

/// Gap between columns
const COLUMN_GAP: &str = "  ";

/// Render `table` as aligned plain text
///
/// The first line holds the column labels, each following line a row label
/// and that row's cells. Columns are left-aligned and padded to their widest
/// entry. Line breaks inside values are shown as `\n` so the grid stays aligned.
///
/// ```rust
/// use listmaker::{dump, Table};
///
/// let table = Table::from_rows(
///     vec!["item".into(), "qty".into()],
///     vec![vec!["pears".into(), "3".into()]],
/// );
/// assert_eq!(dump::render(&table), "   item   qty\n0  pears  3");
/// ```
pub fn render(table: &Table) -> String {
    if table.is_empty() {
        return format!(
            "Empty table\nColumns: [{}]\nRows: [{}]",
            table.column_labels().join(", "),
            table.row_labels().join(", ")
        );
    }

    let header: Vec<Cow<'_, str>> = std::iter::once(Cow::Borrowed(""))
        .chain(table.column_labels().iter().map(|l| escape(l)))
        .collect();
    let body: Vec<Vec<Cow<'_, str>>> = table
        .row_labels()
        .iter()
        .zip(table.rows())
        .map(|(label, row)| {
            std::iter::once(escape(label))
                .chain(row.iter().map(|value| escape(value.display_str())))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|s| s.chars().count()).collect();
    for line in &body {
        for (width, text) in widths.iter_mut().zip(line) {
            *width = (*width).max(text.chars().count());
        }
    }

    std::iter::once(&header)
        .chain(body.iter())
        .map(|line| render_line(line, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(fields: &[Cow<'_, str>], widths: &[usize]) -> String {
    let padded: Vec<String> = fields
        .iter()
        .zip(widths)
        .map(|(text, width)| format!("{:<width$}", text, width = *width))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

fn escape(text: &str) -> Cow<'_, str> {
    if text.contains(['\n', '\r']) {
        Cow::Owned(text.replace('\r', "\\r").replace('\n', "\\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listmaker_core::CellValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_aligned() {
        let mut table = Table::from_rows(
            vec!["name".into(), "n".into()],
            vec![
                vec!["ab".into(), "1".into()],
                vec![CellValue::Empty, "12345".into()],
            ],
        );
        table.rename_row_label(1, "last").unwrap();

        assert_eq!(
            render(&table),
            "      name  n\n0     ab    1\nlast        12345"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&Table::new()), "Empty table\nColumns: []\nRows: []");
        assert_eq!(
            render(&Table::with_columns(["A", "B"])),
            "Empty table\nColumns: [A, B]\nRows: []"
        );
    }

    #[test]
    fn test_render_escapes_newlines() {
        let table = Table::from_rows(vec!["note".into()], vec![vec!["a\nb".into()]]);
        assert_eq!(render(&table), "   note\n0  a\\nb");
    }
}
