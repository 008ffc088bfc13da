//! Cell placement shared by the drawing and composing passes.
//!
//! Both passes walk the same table with their own [`Cursor`], so every cell lands on the
//! same rectangle in both.

use crate::{sizes::Sizes, tree::Cell};

pub(crate) const RULE: char = '-';
pub(crate) const HEAD_RULE: char = '=';

/// Where a cell sits on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    /// Canvas column of the cell's left border.
    pub x: usize,
    /// Canvas line of the cell's top border.
    pub top: usize,
    /// Columns between the left and right borders.
    pub width: usize,
    /// Lines between the top and bottom borders.
    pub height: usize,
    /// Character of the bottom rule.
    pub rule: char,
}

impl Placement {
    pub fn right(&self) -> usize {
        self.x + self.width + 1
    }

    pub fn bottom(&self) -> usize {
        self.top + self.height + 1
    }
}

#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    sizes: &'a Sizes,
    row: usize,
    top: usize,
    col: usize,
    x: usize,
    /// Per column, the first row no longer covered by a cell spanning down into it.
    covered: Vec<usize>,
}

impl<'a> Cursor<'a> {
    pub fn new(sizes: &'a Sizes) -> Self {
        Self {
            sizes,
            row: 0,
            top: 0,
            col: 0,
            x: 0,
            covered: vec![0; sizes.columns()],
        }
    }

    pub fn start_row(&mut self) {
        self.col = 0;
        self.x = 0;
        self.skip_covered();
    }

    pub fn end_row(&mut self) {
        self.top += self.sizes.heights.get(self.row).copied().unwrap_or_default() + 1;
        self.row += 1;
    }

    /// Place the next cell of the current row and move past it.
    pub fn place(&mut self, cell: &Cell) -> Placement {
        let cols = cell.cols();
        let rows = cell.rows();
        let width = span_extent(&self.sizes.widths, self.col, cols);
        let height = span_extent(&self.sizes.heights, self.row, rows);
        let head_rows = self.sizes.head_rows;
        let rule = if self.row < head_rows && self.row + rows >= head_rows {
            HEAD_RULE
        } else {
            RULE
        };
        let placement = Placement {
            x: self.x,
            top: self.top,
            width,
            height,
            rule,
        };

        if rows > 1 {
            let until = self.row + rows;
            for covered in self.covered.iter_mut().skip(self.col).take(cols) {
                *covered = until;
            }
        }
        self.col += cols;
        self.x += width + 1;
        self.skip_covered();
        placement
    }

    fn skip_covered(&mut self) {
        while let Some(&until) = self.covered.get(self.col) {
            if until <= self.row {
                break;
            }
            self.x += self.sizes.widths[self.col] + 1;
            self.col += 1;
        }
    }
}

/// Extent of `span` consecutive sizes from `start`, absorbing the rules between them.
fn span_extent(sizes: &[usize], start: usize, span: usize) -> usize {
    let taken = sizes.iter().skip(start).take(span);
    let count = taken.len();
    taken.sum::<usize>() + count.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        sizes::SizeCalculator,
        tree::{Row, Table},
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn spans_absorb_inner_rules() {
        assert_eq!(span_extent(&[5, 7], 0, 2), 13);
        assert_eq!(span_extent(&[5, 7], 1, 1), 7);
        // A span running past the last column only counts what exists.
        assert_eq!(span_extent(&[5, 7], 1, 3), 7);
        assert_eq!(span_extent(&[5, 7], 2, 1), 0);
    }

    #[test]
    fn rows_below_a_row_span_skip_its_columns() {
        let table = Table::new([1, 1, 1]).with_body(vec![
            Row::new(vec![
                Cell::text("a"),
                Cell::text("b").span(1, 2),
                Cell::text("c"),
            ]),
            Row::new(vec![Cell::text("d"), Cell::text("e")]),
        ]);
        let sizes = SizeCalculator::compute(&table);
        let mut cursor = Cursor::new(&sizes);
        let mut placed = Vec::new();
        for row in table.rows() {
            cursor.start_row();
            for cell in &row.cells {
                let placement = cursor.place(cell);
                placed.push((placement.x, placement.top, placement.height));
            }
            cursor.end_row();
        }
        assert_eq!(
            placed,
            [(0, 0, 1), (4, 0, 3), (8, 0, 1), (0, 2, 1), (8, 2, 1)]
        );
    }

    #[test]
    fn head_rule_closes_the_header() {
        let table = Table::new([1, 1])
            .with_head(vec![
                Row::new(vec![Cell::text("a").span(1, 2), Cell::text("b")]),
                Row::new(vec![Cell::text("c")]),
            ])
            .with_body(vec![Row::new(vec![Cell::text("d"), Cell::text("e")])]);
        let sizes = SizeCalculator::compute(&table);
        let mut cursor = Cursor::new(&sizes);
        let mut rules = Vec::new();
        for row in table.rows() {
            cursor.start_row();
            for cell in &row.cells {
                rules.push(cursor.place(cell).rule);
            }
            cursor.end_row();
        }
        assert_eq!(rules, [HEAD_RULE, RULE, HEAD_RULE, RULE, RULE]);
    }
}
