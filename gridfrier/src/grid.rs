//! Border skeleton of a table.

use crate::{
    canvas::Canvas,
    layout::{Cursor, RULE},
    sizes::Sizes,
    tree::{Cell, Row, Table},
    visit::{Visitor, Walk, walk_table},
};

pub(crate) const JUNCTION: char = '+';
pub(crate) const VERTICAL: char = '|';

/// Draws rules and junctions, never content.
///
/// Each cell draws its own bottom rule, its right rule, and the junction above its right
/// edge. Walking cells left to right and top to bottom, every junction is last written by
/// the cell below or right of it, so merged cells keep their interior clear.
#[derive(Debug)]
pub struct GridDrawer<'a> {
    cursor: Cursor<'a>,
    canvas: Canvas,
}

impl<'a> GridDrawer<'a> {
    pub fn draw(sizes: &'a Sizes, table: &Table) -> Canvas {
        let mut drawer = Self {
            cursor: Cursor::new(sizes),
            canvas: frame(sizes),
        };
        let _walked = walk_table(table, &mut drawer);
        drawer.canvas
    }
}

/// Top rule, then side borders on every other line.
fn frame(sizes: &Sizes) -> Canvas {
    let mut canvas = Canvas::new(sizes.width, sizes.height);
    canvas.put(0, 0, JUNCTION);
    canvas.fill(0, 1, sizes.width, RULE);
    for line in 1..sizes.height {
        canvas.put(line, 0, VERTICAL);
        canvas.put(line, sizes.width.saturating_sub(1), VERTICAL);
    }
    canvas
}

impl Visitor for GridDrawer<'_> {
    fn visit_row(&mut self, _row: &Row) -> Walk {
        self.cursor.start_row();
        Walk::Continue
    }

    fn depart_row(&mut self, _row: &Row) {
        self.cursor.end_row();
    }

    fn visit_cell(&mut self, cell: &Cell) -> Walk {
        let placement = self.cursor.place(cell);
        let bottom = placement.bottom();
        let right = placement.right();

        self.canvas.put(bottom, placement.x, JUNCTION);
        self.canvas.fill(bottom, placement.x + 1, right, placement.rule);
        self.canvas.put(bottom, right, JUNCTION);
        for line in placement.top + 1..bottom {
            self.canvas.put(line, right, VERTICAL);
        }
        self.canvas.put(placement.top, right, JUNCTION);
        Walk::SkipChildren
    }
}
