use crate::{
    error::{TableError, Violation},
    tree::{GroupKind, Table},
};

/// Check that a table's cells tile its grid exactly.
///
/// Layout itself never checks this: a table that fails here still renders, but its borders
/// may come out wrong.
///
/// # Errors
///
/// [`TableError::Structural`] naming the first offending row.
pub fn validate(table: &Table) -> Result<(), TableError> {
    let columns = table.columns.len();
    let total_rows = table.row_count();
    let structural = |row, violation| TableError::Structural { row, violation };
    if columns == 0 {
        return Err(structural(0, Violation::NoColumns));
    }

    // Per column, the first row not covered by a cell spanning down from above.
    let mut covered = vec![0usize; columns];
    let mut seen_body = false;
    let mut row = 0;
    for group in &table.groups {
        match group.kind {
            GroupKind::Head if seen_body => {
                return Err(structural(row, Violation::HeadAfterBody));
            }
            GroupKind::Head => {}
            GroupKind::Body => seen_body = true,
        }
        for cells in group.rows.iter().map(|r| &r.cells) {
            let mut col = 0;
            let mut filled = 0;
            skip_covered(&covered, row, &mut col, &mut filled);
            for cell in cells {
                let (cols, rows) = (cell.cols(), cell.rows());
                if col + cols > columns {
                    return Err(structural(
                        row,
                        Violation::RowOverflow {
                            spanned: filled + cols,
                            columns,
                        },
                    ));
                }
                if let Some(column) = (col..col + cols).find(|&c| covered[c] > row) {
                    return Err(structural(row, Violation::Overlap { column }));
                }
                if row + rows > total_rows {
                    return Err(structural(
                        row,
                        Violation::RowSpanPastEnd {
                            column: col,
                            rows,
                            available: total_rows - row,
                        },
                    ));
                }
                for until in &mut covered[col..col + cols] {
                    *until = row + rows;
                }
                col += cols;
                filled += cols;
                skip_covered(&covered, row, &mut col, &mut filled);
            }
            if filled < columns {
                return Err(structural(row, Violation::RowUnderfilled { filled, columns }));
            }
            row += 1;
        }
    }
    Ok(())
}

fn skip_covered(covered: &[usize], row: usize, col: &mut usize, filled: &mut usize) {
    while covered.get(*col).is_some_and(|&until| until > row) {
        *col += 1;
        *filled += 1;
    }
}
