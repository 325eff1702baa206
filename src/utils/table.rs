//! Plain-text table rendering for the `show` command.

use crate::utils::formatting::{pad_left, pad_right};

#[derive(Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Width of every column: the longest of header and cells.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(col.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render_line(&self, cells: &[String], widths: &[usize], out: &mut String) {
        let line: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (col, &w))| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                match col.align {
                    Align::Left => pad_right(cell, w),
                    Align::Right => pad_left(cell, w),
                }
            })
            .collect();

        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.render_line(&headers, &widths, &mut out);

        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &self.rows {
            self.render_line(row, &widths, &mut out);
        }

        out
    }
}
