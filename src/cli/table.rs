/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            alignment,
        }
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count().max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                width
            })
            .collect()
    }

    fn render_cells(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                match column.alignment {
                    Alignment::Left => format!("{text:<width$}", width = widths[idx]),
                    Alignment::Right => format!("{text:>width$}", width = widths[idx]),
                }
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    }

    /// Renders the full table with a header row and separator rule.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut out = String::new();
        out.push_str(&self.render_cells(&header, &widths));
        out.push('\n');
        out.push_str(&"-".repeat(rule_len));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_cells(row, &widths));
        }
        out
    }
}
