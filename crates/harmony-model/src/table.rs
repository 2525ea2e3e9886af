/// An in-memory tabular dataset: one header row plus string cells.
///
/// Every pipeline stage consumes tables immutably and produces new ones.
/// Rows are padded to the header width on insert so positional access never
/// reads past the end of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of `name` in the header row, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell value at (`row`, `column`), if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index).map(String::as_str)
    }

    /// Appends a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }
}

/// Builds one output row against a fixed column list, addressed by name.
///
/// Columns never set stay empty, which serializes as an empty field: the
/// accepted representation of NULL for nullable output columns.
#[derive(Debug)]
pub struct RowBuilder<'a> {
    columns: &'a [&'a str],
    values: Vec<String>,
}

impl<'a> RowBuilder<'a> {
    pub fn new(columns: &'a [&'a str]) -> Self {
        Self {
            columns,
            values: vec![String::new(); columns.len()],
        }
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        match self.columns.iter().position(|name| *name == column) {
            Some(index) => self.values[index] = value.into(),
            None => debug_assert!(false, "unknown output column {column:?}"),
        }
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}
