//! Console presentation of result tables.
//!
//! The search flows never touch the terminal directly; they hand a title
//! and a [`RowSet`] to a [`Present`] implementation and get back either a
//! selected row or nothing (cancelled). [`ConsolePresenter`] renders
//! numbered aligned tables and reads selections from stdin; tests script
//! their own implementation.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::db::{RowSet, SelectedRow};

/// Presentation boundary between the search flows and the terminal.
pub trait Present {
    /// Show `table` and let the user pick one row.
    ///
    /// Returns `None` when the user cancels (empty line or end of input)
    /// or when the table has no rows.
    fn pick_row(&mut self, title: &str, table: &RowSet) -> io::Result<Option<SelectedRow>>;

    /// Show `table` read-only, no selection.
    fn show_table(&mut self, title: &str, table: &RowSet) -> io::Result<()>;

    /// Show one record's fields, label per line.
    fn show_detail(&mut self, title: &str, row: &SelectedRow) -> io::Result<()>;

    /// Show a one-line message ("not found", logging notices).
    fn notify(&mut self, message: &str) -> io::Result<()>;
}

/// Render `table` as an aligned text table, optionally with a selection
/// number in front of each row.
pub fn render_table(table: &RowSet, numbered: bool) -> String {
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = table.headers.iter().map(String::len).collect();
    for row in &cells {
        for (idx, cell) in row.iter().enumerate() {
            if cell.len() > widths[idx] {
                widths[idx] = cell.len();
            }
        }
    }

    let index_width = table.len().to_string().len();
    let margin = if numbered {
        " ".repeat(index_width + 2)
    } else {
        String::new()
    };

    let mut lines = Vec::new();

    let header = table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, h)| format!("{:<1$}", h, widths[idx]))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!("{}{}", margin, header.trim_end()));

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!("{}{}", margin, rule));

    for (row_idx, row) in cells.iter().enumerate() {
        let body = row
            .iter()
            .enumerate()
            .map(|(idx, cell)| format!("{:<1$}", cell, widths[idx]))
            .collect::<Vec<_>>()
            .join("  ");
        let line = if numbered {
            format!("{:>1$}  {2}", row_idx + 1, index_width, body)
        } else {
            body
        };
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Interactive presenter over a reader/writer pair.
///
/// Generic so tests can drive it with an in-memory cursor and capture the
/// written output.
pub struct ConsolePresenter<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl ConsolePresenter<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Next input line, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Present for ConsolePresenter<R, W> {
    fn pick_row(&mut self, title: &str, table: &RowSet) -> io::Result<Option<SelectedRow>> {
        if table.is_empty() {
            return Ok(None);
        }

        writeln!(self.out, "\n{}", title)?;
        writeln!(self.out, "{}", render_table(table, true))?;

        loop {
            write!(
                self.out,
                "Select a row number (press Enter to cancel): "
            )?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=table.len()).contains(&n) => {
                    return Ok(table.select(n - 1));
                }
                _ => {
                    writeln!(
                        self.out,
                        "Please enter a number between 1 and {}, or press Enter to cancel.",
                        table.len()
                    )?;
                }
            }
        }
    }

    fn show_table(&mut self, title: &str, table: &RowSet) -> io::Result<()> {
        writeln!(self.out, "\n{}", title)?;
        writeln!(self.out, "{}", render_table(table, false))?;
        Ok(())
    }

    fn show_detail(&mut self, title: &str, row: &SelectedRow) -> io::Result<()> {
        writeln!(self.out, "\n{}", title)?;
        let label_width = row.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, value) in row.iter() {
            writeln!(self.out, "  {:<1$}  {2}", label, label_width, value)?;
        }
        Ok(())
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Value;
    use std::io::Cursor;

    fn categories() -> RowSet {
        RowSet::new(
            vec!["Nr".to_string(), "category".to_string()],
            vec![
                vec![Value::Int(1), Value::Text("Action".to_string())],
                vec![Value::Int(2), Value::Text("Animation".to_string())],
            ],
        )
    }

    fn presenter(input: &str) -> ConsolePresenter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePresenter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let rendered = render_table(&categories(), false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Nr  category");
        assert_eq!(lines[1], "--  ---------");
        assert_eq!(lines[2], "1   Action");
        assert_eq!(lines[3], "2   Animation");
    }

    #[test]
    fn test_render_table_numbered_rows() {
        let rendered = render_table(&categories(), true);
        assert!(rendered.contains("1  1   Action"));
        assert!(rendered.contains("2  2   Animation"));
    }

    #[test]
    fn test_pick_row_valid_selection() {
        let mut ui = presenter("2\n");
        let picked = ui.pick_row("Choose a category", &categories()).unwrap();
        assert_eq!(picked.unwrap().get_str("category"), Some("Animation"));
    }

    #[test]
    fn test_pick_row_empty_line_cancels() {
        let mut ui = presenter("\n");
        assert!(ui.pick_row("Choose", &categories()).unwrap().is_none());
    }

    #[test]
    fn test_pick_row_eof_cancels() {
        let mut ui = presenter("");
        assert!(ui.pick_row("Choose", &categories()).unwrap().is_none());
    }

    #[test]
    fn test_pick_row_reprompts_on_invalid_input() {
        let mut ui = presenter("zero\n9\n1\n");
        let picked = ui.pick_row("Choose", &categories()).unwrap().unwrap();
        assert_eq!(picked.get_i64("Nr"), Some(1));
        let written = String::from_utf8(ui.out).unwrap();
        assert_eq!(written.matches("between 1 and 2").count(), 2);
    }

    #[test]
    fn test_pick_row_empty_table_is_no_selection() {
        let mut ui = presenter("1\n");
        let empty = RowSet::default();
        assert!(ui.pick_row("Choose", &empty).unwrap().is_none());
    }

    #[test]
    fn test_show_detail_lists_fields_in_order() {
        let row = categories().select(0).unwrap();
        let mut ui = presenter("");
        ui.show_detail("Film details", &row).unwrap();
        let written = String::from_utf8(ui.out).unwrap();
        let nr_at = written.find("Nr").unwrap();
        let cat_at = written.find("category").unwrap();
        assert!(nr_at < cat_at);
        assert!(written.contains("Action"));
    }
}
