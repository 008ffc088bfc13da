//! The document tree a table is laid out from.
//!
//! Parsing markup into this tree is up to the caller. A [`Table`] carries its column widths
//! already decided, and each [`Cell`] owns an arbitrary [`Node`] of content, which may itself
//! hold another table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::visit::{Visitor, Walk, walk_node};

/// A table: column specs plus header and body row groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    pub columns: Vec<Column>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub groups: Vec<RowGroup>,
}

/// A column's intrinsic content width, without border padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    pub width: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GroupKind {
    Head,
    #[default]
    Body,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowGroup {
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: GroupKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    #[cfg_attr(feature = "serde", serde(default))]
    pub cells: Vec<Cell>,
}

/// A cell occupying `col_span` x `row_span` positions of the grid.
///
/// Rows below a row-spanning cell leave that cell out; their own cells fill the remaining
/// positions left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub col_span: usize,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub row_span: usize,
    pub content: Node,
}

#[cfg(feature = "serde")]
fn one() -> usize {
    1
}

/// Cell content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Node {
    /// Plain inline text.
    Text(String),
    /// Inline children forming one wrapped paragraph.
    Paragraph(Vec<Node>),
    Emphasis(Vec<Node>),
    Strong(Vec<Node>),
    /// Inline code.
    Literal(String),
    /// Preformatted text, never wrapped.
    LiteralBlock(String),
    /// Each child is one list item.
    BulletList(Vec<Node>),
    /// A hard line break inside a paragraph.
    LineBreak,
    /// Block children separated by a blank line.
    Block(Vec<Node>),
    Table(Box<Table>),
}

impl Table {
    /// A table with one column per intrinsic width and no rows yet.
    pub fn new<I: IntoIterator<Item = usize>>(widths: I) -> Self {
        Self {
            columns: widths.into_iter().map(|width| Column { width }).collect(),
            groups: Vec::new(),
        }
    }

    pub fn with_head(mut self, rows: Vec<Row>) -> Self {
        self.groups.push(RowGroup {
            kind: GroupKind::Head,
            rows,
        });
        self
    }

    pub fn with_body(mut self, rows: Vec<Row>) -> Self {
        self.groups.push(RowGroup {
            kind: GroupKind::Body,
            rows,
        });
        self
    }

    /// All rows, header groups and body groups in document order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.groups.iter().flat_map(|group| group.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|group| group.rows.len()).sum()
    }
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl Cell {
    pub fn new(content: Node) -> Self {
        Self {
            col_span: 1,
            row_span: 1,
            content,
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(Node::from(text))
    }

    pub fn span(mut self, col_span: usize, row_span: usize) -> Self {
        self.col_span = col_span;
        self.row_span = row_span;
        self
    }

    /// Columns covered, treating a zero span as one.
    pub fn cols(&self) -> usize {
        self.col_span.max(1)
    }

    /// Rows covered, treating a zero span as one.
    pub fn rows(&self) -> usize {
        self.row_span.max(1)
    }
}

impl Node {
    /// Inline and block containers expose their children; leaves and tables do not.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph(children)
            | Node::Emphasis(children)
            | Node::Strong(children)
            | Node::BulletList(children)
            | Node::Block(children) => children,
            Node::Text(_)
            | Node::Literal(_)
            | Node::LiteralBlock(_)
            | Node::LineBreak
            | Node::Table(_) => &[],
        }
    }

    fn is_block(&self) -> bool {
        matches!(self, Node::Block(_) | Node::BulletList(_))
    }

    /// The content as plain text, markup dropped.
    ///
    /// Inline children are concatenated; block children, list items and the cells of a
    /// nested table are separated by a blank line.
    pub fn plain_text(&self) -> String {
        let mut text = PlainText::default();
        let _walked = walk_node(self, &mut text);
        text.out
    }

    /// Number of plain-text lines, which is what a cell asks of its row.
    pub fn line_count(&self) -> usize {
        self.plain_text().split('\n').count()
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

#[derive(Debug)]
struct Frame {
    block: bool,
    first: bool,
}

#[derive(Debug, Default)]
struct PlainText {
    out: String,
    frames: Vec<Frame>,
}

impl PlainText {
    /// Called before every item; separates block siblings.
    fn enter(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            if frame.block && !frame.first {
                self.out.push_str("\n\n");
            }
            frame.first = false;
        }
    }

    fn push_frame(&mut self, block: bool) {
        self.frames.push(Frame { block, first: true });
    }
}

impl Visitor for PlainText {
    fn visit_node(&mut self, node: &Node) -> Walk {
        self.enter();
        match node {
            Node::Text(text) | Node::Literal(text) | Node::LiteralBlock(text) => {
                self.out.push_str(text);
            }
            Node::LineBreak => self.out.push('\n'),
            Node::Paragraph(_) | Node::Emphasis(_) | Node::Strong(_) => self.push_frame(false),
            Node::BulletList(_) | Node::Block(_) => self.push_frame(node.is_block()),
            Node::Table(_) => {}
        }
        Walk::Continue
    }

    fn depart_node(&mut self, node: &Node) {
        match node {
            Node::Paragraph(_)
            | Node::Emphasis(_)
            | Node::Strong(_)
            | Node::BulletList(_)
            | Node::Block(_) => {
                self.frames.pop();
            }
            Node::Text(_)
            | Node::Literal(_)
            | Node::LiteralBlock(_)
            | Node::LineBreak
            | Node::Table(_) => {}
        }
    }

    fn visit_table(&mut self, _table: &Table) -> Walk {
        self.push_frame(true);
        Walk::Continue
    }

    fn depart_table(&mut self, _table: &Table) {
        self.frames.pop();
    }

    fn visit_cell(&mut self, _cell: &Cell) -> Walk {
        self.enter();
        self.push_frame(false);
        Walk::Continue
    }

    fn depart_cell(&mut self, _cell: &Cell) {
        self.frames.pop();
    }
}
