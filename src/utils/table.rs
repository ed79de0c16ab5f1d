//! Table rendering utilities for CLI outputs.
//! Column widths follow the widest cell; ANSI color codes are not counted.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Optional color prefix per row.
    pub row_colors: Vec<Option<&'static str>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            row_colors: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>, color: Option<&'static str>) {
        self.rows.push(row);
        self.row_colors.push(color);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, v) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(v.width());
                }
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&pad(h, *w));
            out.push(' ');
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for (row, color) in self.rows.iter().zip(&self.row_colors) {
            if let Some(c) = color {
                out.push_str(c);
            }
            for (i, w) in widths.iter().enumerate() {
                let v = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(v, *w));
                out.push(' ');
            }
            if color.is_some() {
                out.push_str(super::colors::RESET);
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}
