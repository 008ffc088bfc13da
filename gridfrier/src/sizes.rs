//! Column widths and row heights of a table.

use crate::{
    tree::{Cell, Column, GroupKind, Row, RowGroup, Table},
    visit::{Visitor, Walk, walk_table},
};

/// The layout of one table, computed once and read by the drawing passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sizes {
    /// Column widths including one padding space on each side.
    pub widths: Vec<usize>,
    /// Row heights in content lines.
    pub heights: Vec<usize>,
    /// Total width in characters, borders included.
    pub width: usize,
    /// Total height in lines, rules included.
    pub height: usize,
    /// Rows `0..head_rows` belong to the header.
    pub head_rows: usize,
}

impl Sizes {
    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    pub fn rows(&self) -> usize {
        self.heights.len()
    }
}

/// A row-spanning cell's demand, settled once every row height is known.
#[derive(Debug)]
struct Spanning {
    row: usize,
    rows: usize,
    lines: usize,
}

#[derive(Debug, Default)]
pub struct SizeCalculator {
    widths: Vec<usize>,
    heights: Vec<usize>,
    head_rows: usize,
    kind: GroupKind,
    spanning: Vec<Spanning>,
}

impl SizeCalculator {
    pub fn compute(table: &Table) -> Sizes {
        let mut calculator = Self::default();
        let _walked = walk_table(table, &mut calculator);
        calculator.grow_spanned_rows();
        calculator.finish()
    }

    /// A cell spanning several rows that needs more lines than its rows give it grows the
    /// last row it covers.
    fn grow_spanned_rows(&mut self) {
        for span in &self.spanning {
            let end = (span.row + span.rows).min(self.heights.len());
            let Some(last) = end.checked_sub(1) else {
                continue;
            };
            let covered =
                self.heights[span.row..=last].iter().sum::<usize>() + (last - span.row);
            if span.lines > covered {
                self.heights[last] += span.lines - covered;
            }
        }
    }

    fn finish(self) -> Sizes {
        let width = self.widths.iter().sum::<usize>() + self.widths.len() + 1;
        let height = self.heights.iter().sum::<usize>() + self.heights.len() + 1;
        Sizes {
            widths: self.widths,
            heights: self.heights,
            width,
            height,
            head_rows: self.head_rows,
        }
    }
}

impl Visitor for SizeCalculator {
    fn visit_column(&mut self, _index: usize, column: &Column) -> Walk {
        self.widths.push(column.width + 2);
        Walk::Continue
    }

    fn visit_group(&mut self, group: &RowGroup) -> Walk {
        self.kind = group.kind;
        Walk::Continue
    }

    fn visit_row(&mut self, _row: &Row) -> Walk {
        self.heights.push(1);
        if self.kind == GroupKind::Head {
            self.head_rows = self.heights.len();
        }
        Walk::Continue
    }

    fn visit_cell(&mut self, cell: &Cell) -> Walk {
        let lines = cell.content.line_count();
        if cell.rows() > 1 {
            self.spanning.push(Spanning {
                row: self.heights.len().saturating_sub(1),
                rows: cell.rows(),
                lines,
            });
        } else if let Some(height) = self.heights.last_mut() {
            *height = (*height).max(lines);
        }
        // Nested tables are measured by their own pass.
        Walk::SkipChildren
    }
}
