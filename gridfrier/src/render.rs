//! Turning cell content into lines of text.

use textwrap::{Options, WordSplitter, wrap};

use crate::{
    error::TableError,
    render_table,
    tree::{Node, Table},
    visit::{Visitor, Walk, walk_table},
};

/// Settings for a top-level render, inherited by every nested table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// How many tables deep cells may nest tables. Zero forbids nested tables.
    pub max_depth: usize,
    /// Run [`crate::validate`] on every table before laying it out.
    pub validate: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: 8,
            validate: true,
        }
    }
}

/// How deep into nested tables a render currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nesting {
    pub depth: usize,
    pub options: RenderOptions,
}

impl Nesting {
    pub fn root(options: RenderOptions) -> Self {
        Self { depth: 0, options }
    }

    /// The nesting of a table inside a cell at this depth.
    pub fn descend(self) -> Result<Self, TableError> {
        let depth = self.depth + 1;
        if depth > self.options.max_depth {
            return Err(TableError::RecursionLimit {
                depth,
                limit: self.options.max_depth,
            });
        }
        Ok(Self { depth, ..self })
    }

    /// Fail if `table`, rendered at this depth, holds tables nested past the limit.
    ///
    /// The walk never goes more than the remaining depth below `table`, however deep the
    /// content really is.
    pub fn check(self, table: &Table) -> Result<(), TableError> {
        let mut depth = TableDepth {
            depth: self.depth,
            limit: self.options.max_depth,
            exceeded: None,
        };
        let _walked = walk_table(table, &mut depth);
        match depth.exceeded {
            Some(depth) => Err(TableError::RecursionLimit {
                depth,
                limit: self.options.max_depth,
            }),
            None => Ok(()),
        }
    }
}

#[derive(Debug)]
struct TableDepth {
    depth: usize,
    limit: usize,
    exceeded: Option<usize>,
}

impl Visitor for TableDepth {
    fn visit_node(&mut self, node: &Node) -> Walk {
        if let Node::Table(_) = node {
            self.depth += 1;
            if self.depth > self.limit {
                self.exceeded = Some(self.depth);
                return Walk::Stop;
            }
        }
        Walk::Continue
    }

    fn depart_node(&mut self, node: &Node) {
        if let Node::Table(_) = node {
            self.depth -= 1;
        }
    }
}

/// Renders the content of a single cell.
///
/// Implementations should return at most `height` lines, none wider than `width` columns,
/// without leading or trailing blank lines. The composer truncates whatever does not fit.
/// Tables found in the content are rendered with [`render_table`] at [`Nesting::descend`].
pub trait CellRenderer {
    fn render(
        &self,
        content: &Node,
        width: usize,
        height: usize,
        nesting: Nesting,
    ) -> Result<Vec<String>, TableError>;
}

const BULLET: &str = "- ";
const BULLET_INDENT: &str = "  ";

/// Renders content as unstyled text, wrapped to the cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    fn render_block(
        &self,
        node: &Node,
        width: usize,
        nesting: Nesting,
        lines: &mut Vec<String>,
    ) -> Result<(), TableError> {
        match node {
            Node::Block(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        lines.push(String::new());
                    }
                    self.render_block(child, width, nesting, lines)?;
                }
            }
            Node::BulletList(items) => {
                let inner = width.saturating_sub(BULLET.len());
                for item in items {
                    let mut item_lines = Vec::new();
                    self.render_block(item, inner, nesting, &mut item_lines)?;
                    for (i, line) in item_lines.into_iter().enumerate() {
                        let marker = if i == 0 { BULLET } else { BULLET_INDENT };
                        lines.push(format!("{marker}{line}"));
                    }
                }
            }
            Node::LiteralBlock(text) => lines.extend(text.lines().map(str::to_owned)),
            Node::Table(table) => {
                lines.extend(render_table(table, self, nesting.descend()?)?);
            }
            Node::Text(_)
            | Node::Paragraph(_)
            | Node::Emphasis(_)
            | Node::Strong(_)
            | Node::Literal(_)
            | Node::LineBreak => wrap_inline(node, width, lines),
        }
        Ok(())
    }
}

fn wrap_inline(node: &Node, width: usize, lines: &mut Vec<String>) {
    let options = Options::new(width.max(1))
        .break_words(true)
        .word_splitter(WordSplitter::NoHyphenation);
    for hard_line in node.plain_text().split('\n') {
        lines.extend(wrap(hard_line, &options).into_iter().map(|line| line.into_owned()));
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

impl CellRenderer for PlainRenderer {
    fn render(
        &self,
        content: &Node,
        width: usize,
        height: usize,
        nesting: Nesting,
    ) -> Result<Vec<String>, TableError> {
        let mut lines = Vec::new();
        self.render_block(content, width, nesting, &mut lines)?;

        let start = lines.iter().position(|line| !is_blank(line)).unwrap_or(lines.len());
        let end = lines.iter().rposition(|line| !is_blank(line)).map_or(start, |i| i + 1);
        Ok(lines.drain(start..end).take(height).collect())
    }
}
