//! Filling a drawn grid with cell content.

use unicode_width::UnicodeWidthStr as _;

use crate::{
    canvas::Canvas,
    error::TableError,
    layout::Cursor,
    render::{CellRenderer, Nesting},
    sizes::Sizes,
    tree::{Cell, Row, Table},
    visit::{Visitor, Walk, walk_table},
};

/// Splices each cell's rendered lines inside the borders [`crate::GridDrawer`] drew.
///
/// Content starts one column in from the cell's left border, leaving a space of padding
/// on both sides. Lines the renderer returns past the cell's width or height are cut.
#[derive(Debug)]
pub struct ContentComposer<'a, R: ?Sized> {
    cursor: Cursor<'a>,
    canvas: Canvas,
    renderer: &'a R,
    nesting: Nesting,
    error: Option<TableError>,
}

impl<'a, R: CellRenderer + ?Sized> ContentComposer<'a, R> {
    pub fn compose(
        canvas: Canvas,
        sizes: &'a Sizes,
        table: &Table,
        renderer: &'a R,
        nesting: Nesting,
    ) -> Result<Canvas, TableError> {
        let mut composer = Self {
            cursor: Cursor::new(sizes),
            canvas,
            renderer,
            nesting,
            error: None,
        };
        let _walked = walk_table(table, &mut composer);
        match composer.error {
            Some(err) => Err(err),
            None => Ok(composer.canvas),
        }
    }
}

impl<R: CellRenderer + ?Sized> Visitor for ContentComposer<'_, R> {
    fn visit_row(&mut self, _row: &Row) -> Walk {
        self.cursor.start_row();
        Walk::Continue
    }

    fn depart_row(&mut self, _row: &Row) {
        self.cursor.end_row();
    }

    fn visit_cell(&mut self, cell: &Cell) -> Walk {
        let placement = self.cursor.place(cell);
        let width = placement.width.saturating_sub(2);
        let rendered = match self
            .renderer
            .render(&cell.content, width, placement.height, self.nesting)
        {
            Ok(lines) => lines,
            Err(err) => {
                self.error = Some(err);
                return Walk::Stop;
            }
        };
        // Line breaks inside a returned line start a new canvas line.
        let lines: Vec<&str> = rendered
            .iter()
            .flat_map(|line| line.split('\n'))
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        if lines.len() > placement.height {
            log::debug!(
                "cell at {}:{} dropped {} of {} lines",
                placement.top,
                placement.x,
                lines.len() - placement.height,
                lines.len()
            );
        }
        for (i, line) in lines.iter().take(placement.height).enumerate() {
            let written = self
                .canvas
                .write_str(placement.top + 1 + i, placement.x + 2, line, width);
            let line_width = line.width();
            if written < line_width {
                log::debug!("cut cell line {line:?} from {line_width} to {written} columns");
            }
        }
        log::trace!(
            "composed {}x{} cell at {}:{}",
            width,
            placement.height,
            placement.top,
            placement.x
        );
        Walk::SkipChildren
    }
}
