#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! gridfrier - Fry document tables into ASCII grids for
//! [gridfried](https://github.com/benjajaja/mdfried).
//!
//! A [`Table`] is laid out into a fixed-width block of lines with `+ - = |` borders. Cells can
//! span several columns and rows, and their content can be any [`Node`], including another
//! table. The process is:
//!
//! 1. [`SizeCalculator`] measures column widths and row heights
//! 2. [`GridDrawer`] draws the border skeleton into a [`Canvas`]
//! 3. [`ContentComposer`] renders every cell with a [`CellRenderer`] and splices the lines into
//!    the canvas
//!
//! Cell rendering is up to the caller. [`PlainRenderer`] wraps plain text with
//! [`textwrap`](https://docs.rs/textwrap) and renders nested tables by running the pipeline
//! again.
//!
//! # Examples
//!
//! ```
//! use gridfrier::{Cell, RenderOptions, Row, Table, TableRenderer};
//!
//! let table = Table::new([3, 5])
//!     .with_head(vec![Row::new(vec![Cell::text("A"), Cell::text("BB")])])
//!     .with_body(vec![Row::new(vec![Cell::text("C"), Cell::text("DD")])]);
//!
//! let lines = TableRenderer::new(RenderOptions::default()).render(&table).unwrap();
//! assert_eq!(
//!     lines,
//!     [
//!         "+-----+-------+",
//!         "| A   | BB    |",
//!         "+=====+=======+",
//!         "| C   | DD    |",
//!         "+-----+-------+",
//!     ]
//! );
//! ```
//!
//! A custom renderer only has to fill a `width` x `height` box:
//! ```
//! use gridfrier::{Cell, CellRenderer, Nesting, Node, RenderOptions, Row, Table, TableError,
//!     TableRenderer};
//!
//! struct Shouting;
//! impl CellRenderer for Shouting {
//!     fn render(&self, content: &Node, width: usize, _height: usize, _nesting: Nesting)
//!         -> Result<Vec<String>, TableError>
//!     {
//!         Ok(vec![content.plain_text().to_uppercase().chars().take(width).collect()])
//!     }
//! }
//!
//! let table = Table::new([4]).with_body(vec![Row::new(vec![Cell::text("yell")])]);
//! let lines = TableRenderer::with_renderer(Shouting, RenderOptions::default())
//!     .render(&table)
//!     .unwrap();
//! assert_eq!(lines[1], "| YELL |");
//! ```

mod canvas;
mod compose;
mod error;
mod grid;
mod layout;
mod render;
mod sizes;
mod tree;
mod validate;
pub mod visit;

pub use canvas::Canvas;
pub use compose::ContentComposer;
pub use error::{TableError, Violation};
pub use grid::GridDrawer;
pub use render::{CellRenderer, Nesting, PlainRenderer, RenderOptions};
pub use sizes::{SizeCalculator, Sizes};
pub use tree::{Cell, Column, GroupKind, Node, Row, RowGroup, Table};
pub use validate::validate;

/// Render a table at the given nesting. This is the whole pipeline, and what cell renderers
/// call for tables inside cells.
///
/// # Errors
///
/// [`TableError::RecursionLimit`] if a nested table is too deep, checked before anything
/// else. [`TableError::Structural`] if validation is enabled and fails.
pub fn render_table<R: CellRenderer + ?Sized>(
    table: &Table,
    renderer: &R,
    nesting: Nesting,
) -> Result<Vec<String>, TableError> {
    // Sizing reads the text of nested tables, so the depth is settled before it.
    nesting.check(table)?;
    if nesting.options.validate {
        validate(table)?;
    }
    let sizes = SizeCalculator::compute(table);
    log::debug!(
        "table {}x{} ({} columns, {} rows) at depth {}",
        sizes.width,
        sizes.height,
        sizes.columns(),
        sizes.rows(),
        nesting.depth
    );
    let canvas = GridDrawer::draw(&sizes, table);
    let canvas = ContentComposer::compose(canvas, &sizes, table, renderer, nesting)?;
    Ok(canvas.into_lines())
}

/// Renders top-level tables with a fixed renderer and options.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer<R = PlainRenderer> {
    renderer: R,
    options: RenderOptions,
}

impl TableRenderer<PlainRenderer> {
    pub fn new(options: RenderOptions) -> Self {
        Self::with_renderer(PlainRenderer, options)
    }
}

impl<R: CellRenderer> TableRenderer<R> {
    pub fn with_renderer(renderer: R, options: RenderOptions) -> Self {
        Self { renderer, options }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render a table into lines of equal display width.
    ///
    /// # Errors
    ///
    /// See [`render_table`].
    pub fn render(&self, table: &Table) -> Result<Vec<String>, TableError> {
        render_table(table, &self.renderer, Nesting::root(self.options))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use unicode_width::UnicodeWidthStr as _;

    fn render(table: &Table) -> Vec<String> {
        #[expect(clippy::let_underscore_untyped)]
        let _ = flexi_logger::Logger::try_with_env()
            .unwrap()
            .start()
            .inspect_err(|err| eprint!("test logger setup failed: {err}"));
        TableRenderer::new(RenderOptions::default()).render(table).unwrap()
    }

    fn cell_row(texts: &[&str]) -> Row {
        Row::new(texts.iter().map(|text| Cell::text(text)).collect())
    }

    /// Header over one merged cell, a row span down the side, and wrapped text.
    fn mixed() -> Table {
        Table::new([4, 6, 8])
            .with_head(vec![cell_row(&["Key", "Value", "Notes"])])
            .with_body(vec![
                Row::new(vec![
                    Cell::text("a"),
                    Cell::text("spans two columns").span(2, 1),
                ]),
                Row::new(vec![
                    Cell::text("b\nc").span(1, 2),
                    Cell::text("1"),
                    Cell::text("wrapped words here"),
                ]),
                cell_row(&["2", "x"]),
            ])
    }

    #[test]
    fn lines_are_rectangular() {
        let table = mixed();
        let sizes = SizeCalculator::compute(&table);
        let lines = render(&table);
        assert_eq!(lines.len(), sizes.height);
        for line in &lines {
            assert_eq!(line.width(), sizes.width, "{line:?}");
        }
    }

    #[test]
    fn mixed_spans_and_wrapping() {
        insta::assert_snapshot!(render(&mixed()).join("\n"), @r"
        +------+--------+----------+
        | Key  | Value  | Notes    |
        +======+========+==========+
        | a    | spans two columns |
        +------+--------+----------+
        | b    | 1      | wrapped  |
        | c    +--------+----------+
        |      | 2      | x        |
        +------+--------+----------+
        ");
    }

    #[test]
    fn header_rule_only_below_the_header() {
        let table = Table::new([1, 1])
            .with_head(vec![cell_row(&["a", "b"])])
            .with_body(vec![cell_row(&["c", "d"]), cell_row(&["e", "f"])]);
        assert_eq!(
            render(&table),
            [
                "+---+---+",
                "| a | b |",
                "+===+===+",
                "| c | d |",
                "+---+---+",
                "| e | f |",
                "+---+---+",
            ]
        );
    }

    #[test]
    fn merged_top_cell_over_two_columns() {
        let table = Table::new([3, 5]).with_body(vec![
            Row::new(vec![Cell::text("Title").span(2, 1)]),
            cell_row(&["C", "DD"]),
        ]);
        assert_eq!(
            render(&table),
            [
                "+-------------+",
                "| Title       |",
                "+-----+-------+",
                "| C   | DD    |",
                "+-----+-------+",
            ]
        );
    }

    #[test]
    fn nested_table_inside_a_cell() {
        let inner =
            Table::new([1, 1]).with_body(vec![cell_row(&["a", "b"]), cell_row(&["c", "d"])]);
        let table = Table::new([9]).with_body(vec![Row::new(vec![Cell::new(Node::Table(
            Box::new(inner),
        ))])]);
        insta::assert_snapshot!(render(&table).join("\n"), @r"
        +-----------+
        | +---+---+ |
        | | a | b | |
        | +---+---+ |
        | | c | d | |
        | +---+---+ |
        |           |
        |           |
        +-----------+
        ");
    }

    #[test]
    fn too_deep_nesting_fails_without_output() {
        let mut table = Table::new([1]).with_body(vec![cell_row(&["x"])]);
        for _ in 0..3 {
            table = Table::new([20]).with_body(vec![Row::new(vec![Cell::new(Node::Table(
                Box::new(table),
            ))])]);
        }
        let options = RenderOptions {
            max_depth: 2,
            ..Default::default()
        };
        assert_eq!(
            TableRenderer::new(options).render(&table),
            Err(TableError::RecursionLimit { depth: 3, limit: 2 })
        );
        let options = RenderOptions {
            max_depth: 3,
            ..Default::default()
        };
        assert!(TableRenderer::new(options).render(&table).is_ok());
    }

    #[test]
    fn far_too_deep_nesting_fails_without_exhausting_the_stack() {
        let rendered = std::thread::Builder::new()
            .stack_size(8 << 20)
            .spawn(|| {
                let mut table = Table::new([1]).with_body(vec![cell_row(&["x"])]);
                for _ in 0..20_000 {
                    table = Table::new([20]).with_body(vec![Row::new(vec![Cell::new(
                        Node::Table(Box::new(table)),
                    )])]);
                }
                TableRenderer::new(RenderOptions::default()).render(&table)
            })
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(
            rendered,
            Err(TableError::RecursionLimit { depth: 9, limit: 8 })
        );
    }

    #[test]
    fn validation_can_be_skipped() {
        let table = Table::new([1, 1]).with_body(vec![cell_row(&["only"])]);
        assert!(matches!(
            TableRenderer::new(RenderOptions::default()).render(&table),
            Err(TableError::Structural { row: 0, .. })
        ));
        let options = RenderOptions {
            validate: false,
            ..Default::default()
        };
        let lines = TableRenderer::new(options).render(&table).unwrap();
        // The missing cell's borders are never drawn.
        assert_eq!(lines, ["+---+----", "| o |   |", "+---+   |"]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let table = mixed();
        let renderer = TableRenderer::new(RenderOptions::default());
        assert_eq!(renderer.render(&table), renderer.render(&table));
    }
}
