//! Table rendering for CLI outputs.
//! Column widths are measured in terminal columns, not bytes.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub max_width: Option<usize>,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: None,
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
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

    fn cell(&self, col: usize, value: &str) -> String {
        match self.columns[col].max_width {
            Some(max) => super::formatting::truncate(value, max),
            None => value.to_string(),
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|v| self.cell(i, v).width())
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let pad = |out: &mut String, s: &str, w: usize| {
            out.push_str(s);
            out.push_str(&" ".repeat(w.saturating_sub(s.width()) + 1));
        };

        for (i, col) in self.columns.iter().enumerate() {
            pad(&mut out, &col.header, widths[i]);
        }
        out.push('\n');

        for (i, w) in widths.iter().enumerate() {
            let sep = if i + 1 == widths.len() { "" } else { " " };
            out.push_str(&"-".repeat(*w));
            out.push_str(sep);
        }
        out.push('\n');

        for row in &self.rows {
            for i in 0..self.columns.len() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                pad(&mut out, &self.cell(i, value), widths[i]);
            }
            out.push('\n');
        }

        out
    }
}
