use thiserror::Error;

/// Failed to lay out a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table's spans or row lengths do not fit its column grid.
    #[error("malformed table at row {row}: {violation}")]
    Structural { row: usize, violation: Violation },
    /// Tables nested inside cells went deeper than allowed.
    #[error("nested table depth {depth} exceeds the limit of {limit}")]
    RecursionLimit { depth: usize, limit: usize },
}

/// What exactly is wrong with a malformed table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("table has no columns")]
    NoColumns,
    #[error("header rows must come before body rows")]
    HeadAfterBody,
    #[error("cells span {spanned} columns but the table has {columns}")]
    RowOverflow { spanned: usize, columns: usize },
    #[error("only {filled} of {columns} columns are filled")]
    RowUnderfilled { filled: usize, columns: usize },
    #[error("cell at column {column} overlaps a cell spanning down from above")]
    Overlap { column: usize },
    #[error("cell at column {column} spans {rows} rows but only {available} remain")]
    RowSpanPastEnd {
        column: usize,
        rows: usize,
        available: usize,
    },
}
