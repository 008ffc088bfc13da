//! Depth-first traversal of tables and cell content.
//!
//! A [`Visitor`] only overrides the node kinds it cares about; every other `visit_*` method
//! continues into the children and every `depart_*` method does nothing. Each `visit_*`
//! returns a [`Walk`] telling the walker whether to descend.

use crate::tree::{Cell, Column, Node, Row, RowGroup, Table};

/// How the walk proceeds after a `visit_*` call.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Descend into the children.
    Continue,
    /// Do not descend, but still call the matching `depart_*`.
    SkipChildren,
    /// Abort the whole walk. No further `depart_*` calls are made.
    Stop,
}

pub trait Visitor {
    fn visit_table(&mut self, _table: &Table) -> Walk {
        Walk::Continue
    }

    fn depart_table(&mut self, _table: &Table) {}

    fn visit_column(&mut self, _index: usize, _column: &Column) -> Walk {
        Walk::Continue
    }

    fn visit_group(&mut self, _group: &RowGroup) -> Walk {
        Walk::Continue
    }

    fn depart_group(&mut self, _group: &RowGroup) {}

    fn visit_row(&mut self, _row: &Row) -> Walk {
        Walk::Continue
    }

    fn depart_row(&mut self, _row: &Row) {}

    fn visit_cell(&mut self, _cell: &Cell) -> Walk {
        Walk::Continue
    }

    fn depart_cell(&mut self, _cell: &Cell) {}

    fn visit_node(&mut self, _node: &Node) -> Walk {
        Walk::Continue
    }

    fn depart_node(&mut self, _node: &Node) {}
}

/// Walk a table. Returns [`Walk::Stop`] if a visitor aborted, [`Walk::Continue`] otherwise.
pub fn walk_table<V: Visitor + ?Sized>(table: &Table, visitor: &mut V) -> Walk {
    match visitor.visit_table(table) {
        Walk::Stop => return Walk::Stop,
        Walk::SkipChildren => {}
        Walk::Continue => {
            for (index, column) in table.columns.iter().enumerate() {
                if visitor.visit_column(index, column) == Walk::Stop {
                    return Walk::Stop;
                }
            }
            for group in &table.groups {
                if walk_group(group, visitor) == Walk::Stop {
                    return Walk::Stop;
                }
            }
        }
    }
    visitor.depart_table(table);
    Walk::Continue
}

fn walk_group<V: Visitor + ?Sized>(group: &RowGroup, visitor: &mut V) -> Walk {
    match visitor.visit_group(group) {
        Walk::Stop => return Walk::Stop,
        Walk::SkipChildren => {}
        Walk::Continue => {
            for row in &group.rows {
                if walk_row(row, visitor) == Walk::Stop {
                    return Walk::Stop;
                }
            }
        }
    }
    visitor.depart_group(group);
    Walk::Continue
}

fn walk_row<V: Visitor + ?Sized>(row: &Row, visitor: &mut V) -> Walk {
    match visitor.visit_row(row) {
        Walk::Stop => return Walk::Stop,
        Walk::SkipChildren => {}
        Walk::Continue => {
            for cell in &row.cells {
                if walk_cell(cell, visitor) == Walk::Stop {
                    return Walk::Stop;
                }
            }
        }
    }
    visitor.depart_row(row);
    Walk::Continue
}

fn walk_cell<V: Visitor + ?Sized>(cell: &Cell, visitor: &mut V) -> Walk {
    match visitor.visit_cell(cell) {
        Walk::Stop => return Walk::Stop,
        Walk::SkipChildren => {}
        Walk::Continue => {
            if walk_node(&cell.content, visitor) == Walk::Stop {
                return Walk::Stop;
            }
        }
    }
    visitor.depart_cell(cell);
    Walk::Continue
}

/// Walk a content node, descending into nested tables through [`walk_table`].
pub fn walk_node<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) -> Walk {
    match visitor.visit_node(node) {
        Walk::Stop => return Walk::Stop,
        Walk::SkipChildren => {}
        Walk::Continue => {
            if let Node::Table(table) = node {
                if walk_table(table, visitor) == Walk::Stop {
                    return Walk::Stop;
                }
            }
            for child in node.children() {
                if walk_node(child, visitor) == Walk::Stop {
                    return Walk::Stop;
                }
            }
        }
    }
    visitor.depart_node(node);
    Walk::Continue
}
