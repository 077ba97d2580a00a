//! Plain-text grid tables.
//!
//! Renders bordered tables with a `=` rule under the header and a `-` rule
//! between every row:
//!
//! ```text
//! +---------+--------+
//! | Country | Code   |
//! +=========+========+
//! | ZA      | AIR001 |
//! +---------+--------+
//! ```

/// Column alignment. Numbers are right-aligned, text left-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A grid table built up row by row.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from `(header, alignment)` pairs.
    pub fn new(columns: &[(&str, Align)]) -> Self {
        Self {
            headers: columns.iter().map(|(h, _)| h.to_string()).collect(),
            aligns: columns.iter().map(|(_, a)| *a).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render blank; extra cells are dropped.
    pub fn add_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn rule(widths: &[usize], fill: char) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.extend(std::iter::repeat_n(fill, width + 2));
            line.push('+');
        }
        line
    }

    fn line(&self, cells: &[String], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for ((cell, width), align) in cells.iter().zip(widths).zip(&self.aligns) {
            let padded = match align {
                Align::Left => format!(" {:<width$} ", cell, width = *width),
                Align::Right => format!(" {:>width$} ", cell, width = *width),
            };
            line.push_str(&padded);
            line.push('|');
        }
        line
    }

    /// Render the table, one line per `\n`, without a trailing newline.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut lines = vec![
            Self::rule(&widths, '-'),
            self.line(&self.headers, &widths),
            Self::rule(&widths, '='),
        ];
        for row in &self.rows {
            lines.push(self.line(row, &widths));
            lines.push(Self::rule(&widths, '-'));
        }
        lines.join("\n")
    }
}
